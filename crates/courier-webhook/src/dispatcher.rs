use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use courier_telegram::{Bot, Update};
use tracing::{debug, error, warn};

/// Receives every decoded update.
///
/// Deliveries are handled concurrently when the server is, so implementations must be
/// safe to run alongside themselves.
#[async_trait]
pub trait UpdateHandler: Send + Sync {
    async fn handle(&self, update: Update, bot: &Bot);
}

#[async_trait]
impl<F, Fut> UpdateHandler for F
where
    F: Fn(Update, Bot) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn handle(&self, update: Update, bot: &Bot) {
        (self)(update, bot.clone()).await
    }
}

/// What became of one inbound push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Decoded and passed to the handler.
    Handled,
    /// Decoded, but no handler is registered.
    Unhandled,
    /// The body was not an update.
    Rejected,
}

pub struct WebhookDispatcher {
    bot: Bot,
    handler: Option<Arc<dyn UpdateHandler>>,
}

impl WebhookDispatcher {
    pub fn new(bot: Bot) -> Self {
        Self { bot, handler: None }
    }

    /// Install the handler. A later call replaces the earlier one.
    pub fn with_handler(mut self, handler: impl UpdateHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Decode one push body and hand the update to the handler, exactly once.
    ///
    /// Never fails: a bad body is logged and reported as `Rejected`.
    pub async fn on_inbound_push(&self, body: &[u8]) -> PushOutcome {
        debug!(body = %String::from_utf8_lossy(body), "inbound push");

        let update: Update = match serde_json::from_slice(body) {
            Ok(update) => update,
            Err(e) => {
                error!(error = %e, "failed to decode inbound update");
                return PushOutcome::Rejected;
            }
        };

        let Some(handler) = &self.handler else {
            warn!(update_id = update.update_id, "no update handler registered, dropping update");
            return PushOutcome::Unhandled;
        };

        handler.handle(update, &self.bot).await;
        PushOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::connected_bot;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_update_reaches_handler_once() {
        let server = MockServer::start().await;
        let bot = connected_bot(&server).await;

        let calls = Arc::new(AtomicUsize::new(0));
        let last_id = Arc::new(AtomicI64::new(0));
        let (c, l) = (calls.clone(), last_id.clone());

        let dispatcher = WebhookDispatcher::new(bot).with_handler(move |update: Update, _bot: Bot| {
            let (c, l) = (c.clone(), l.clone());
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                l.store(update.update_id, Ordering::SeqCst);
            }
        });

        let outcome = dispatcher
            .on_inbound_push(br#"{"update_id":1,"message":{"message_id":5,"text":"hi"}}"#)
            .await;

        assert_eq!(outcome, PushOutcome::Handled);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(last_id.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_handler_is_unhandled() {
        let server = MockServer::start().await;
        let dispatcher = WebhookDispatcher::new(connected_bot(&server).await);

        let outcome = dispatcher.on_inbound_push(br#"{"update_id":2}"#).await;
        assert_eq!(outcome, PushOutcome::Unhandled);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_without_calling_handler() {
        let server = MockServer::start().await;
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();

        let dispatcher = WebhookDispatcher::new(connected_bot(&server).await).with_handler(
            move |_update: Update, _bot: Bot| {
                let c = c.clone();
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                }
            },
        );

        assert_eq!(dispatcher.on_inbound_push(b"not json").await, PushOutcome::Rejected);
        assert_eq!(dispatcher.on_inbound_push(b"[1,2,3]").await, PushOutcome::Rejected);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    struct Recorder {
        seen: std::sync::Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl UpdateHandler for Recorder {
        async fn handle(&self, update: Update, bot: &Bot) {
            assert_eq!(bot.identity().me().id, 99);
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(update.update_id);
            }
        }
    }

    #[tokio::test]
    async fn test_handler_sees_bootstrapped_identity() {
        let server = MockServer::start().await;
        let recorder = Arc::new(Recorder {
            seen: std::sync::Mutex::new(Vec::new()),
        });

        struct Shared(Arc<Recorder>);

        #[async_trait]
        impl UpdateHandler for Shared {
            async fn handle(&self, update: Update, bot: &Bot) {
                self.0.handle(update, bot).await
            }
        }

        let dispatcher = WebhookDispatcher::new(connected_bot(&server).await)
            .with_handler(Shared(recorder.clone()));

        for id in [10, 11, 12] {
            let body = format!(r#"{{"update_id":{id},"poll":{{"id":"p{id}"}}}}"#);
            assert_eq!(
                dispatcher.on_inbound_push(body.as_bytes()).await,
                PushOutcome::Handled
            );
        }

        assert_eq!(*recorder.seen.lock().unwrap(), vec![10, 11, 12]);
    }
}
