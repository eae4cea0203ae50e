pub mod api;
pub mod bot;
pub mod dispatch;
pub mod encode;
pub mod envelope;
pub mod input;
pub mod markup;
pub mod methods;
pub mod types;
pub mod validate;

pub use api::Api;
pub use bot::{Bot, BotIdentity};
pub use dispatch::dispatch;
pub use input::{InputFile, InputMedia};
pub use markup::{InlineKeyboardButton, InlineKeyboardMarkup, ReplyMarkup};
pub use methods::Command;
pub use types::{ChatId, Update};
