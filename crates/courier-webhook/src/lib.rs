//! Inbound side: decode pushed updates, hand them to one handler, and register the
//! endpoint with the platform.

pub mod dispatcher;
pub mod register;
pub mod server;

pub use dispatcher::{PushOutcome, UpdateHandler, WebhookDispatcher};
pub use register::register;
pub use server::{router, serve};
