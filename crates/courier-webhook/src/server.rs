use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use courier_core::error::{CourierError, Result};
use tracing::info;

use crate::dispatcher::{PushOutcome, WebhookDispatcher};

/// One POST route at `path`. Every delivery is answered `200 OK`, whatever its outcome,
/// so the platform never retries a body that cannot be decoded.
///
/// `path` must start with `/`.
pub fn router(dispatcher: Arc<WebhookDispatcher>, path: &str) -> Result<Router> {
    if !path.starts_with('/') {
        return Err(CourierError::Config(format!(
            "webhook path {path:?} must start with '/'"
        )));
    }
    Ok(Router::new()
        .route(path, post(receive))
        .with_state(dispatcher))
}

async fn receive(State(dispatcher): State<Arc<WebhookDispatcher>>, body: Bytes) -> StatusCode {
    if dispatcher.on_inbound_push(&body).await == PushOutcome::Rejected {
        info!(bytes = body.len(), "acknowledged undecodable push");
    }
    StatusCode::OK
}

/// Bind `addr` and serve inbound pushes until the process exits.
pub async fn serve(addr: &str, path: &str, dispatcher: Arc<WebhookDispatcher>) -> Result<()> {
    let app = router(dispatcher, path)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| CourierError::Server(format!("failed to bind {addr}: {e}")))?;

    info!(addr, path, "webhook server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| CourierError::Server(format!("webhook server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::connected_bot;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use courier_telegram::{Bot, Update};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;
    use wiremock::MockServer;

    fn push(path: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_push_is_acknowledged_and_handled() {
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
        let app = router(Arc::new(dispatcher), "/webhook").unwrap();

        let response = app
            .oneshot(push("/webhook", r#"{"update_id":1,"message":{"message_id":2,"text":"hi"}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_garbage_push_is_still_acknowledged() {
        let server = MockServer::start().await;
        let dispatcher = WebhookDispatcher::new(connected_bot(&server).await);
        let app = router(Arc::new(dispatcher), "/webhook").unwrap();

        let response = app.oneshot(push("/webhook", "{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_other_paths_are_not_routed() {
        let server = MockServer::start().await;
        let dispatcher = WebhookDispatcher::new(connected_bot(&server).await);
        let app = router(Arc::new(dispatcher), "/webhook").unwrap();

        let response = app.oneshot(push("/elsewhere", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_relative_path_is_a_config_error() {
        let server = MockServer::start().await;
        let dispatcher = Arc::new(WebhookDispatcher::new(connected_bot(&server).await));

        let err = serve("127.0.0.1:0", "webhook", dispatcher.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, CourierError::Config(ref m) if m.contains("webhook")));
        assert!(router(dispatcher, "").is_err());
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let server = MockServer::start().await;
        let dispatcher = Arc::new(WebhookDispatcher::new(connected_bot(&server).await));

        let err = serve("not-an-address", "/webhook", dispatcher)
            .await
            .unwrap_err();
        assert!(matches!(err, CourierError::Server(_)));
    }
}
