use courier_core::config::WebhookConfig;
use courier_core::error::Result;
use courier_telegram::methods::SetWebhook;
use courier_telegram::{Bot, InputFile};
use tracing::info;

/// Build the `setWebhook` call for a configured endpoint.
pub fn set_webhook(config: &WebhookConfig) -> SetWebhook {
    SetWebhook {
        url: config.public_url.clone(),
        certificate: config.certificate.as_ref().map(InputFile::path),
        max_connections: config.max_connections,
        allowed_updates: config.allowed_updates.clone(),
        drop_pending_updates: config.drop_pending_updates,
        ..Default::default()
    }
}

/// Point the platform at `config.public_url`. The certificate, when set, is uploaded.
pub async fn register(bot: &Bot, config: &WebhookConfig) -> Result<bool> {
    let accepted = bot.send(&set_webhook(config)).await?;
    info!(url = %config.public_url, accepted, "webhook registered");
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{connected_bot, TOKEN};
    use courier_core::error::{CourierError, ValidationError};
    use std::io::Write;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_register_sends_json_without_certificate() {
        let server = MockServer::start().await;
        let bot = connected_bot(&server).await;

        Mock::given(method("POST"))
            .and(path(format!("/bot{TOKEN}/setWebhook")))
            .and(body_json(serde_json::json!({
                "url": "https://bot.example.com/webhook",
                "allowed_updates": ["message", "callback_query"],
                "max_connections": 40
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true, "result": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = WebhookConfig {
            public_url: "https://bot.example.com/webhook".to_string(),
            allowed_updates: vec!["message".to_string(), "callback_query".to_string()],
            max_connections: 40,
            ..Default::default()
        };
        assert!(register(&bot, &config).await.unwrap());
    }

    #[tokio::test]
    async fn test_register_uploads_certificate() {
        let server = MockServer::start().await;
        let bot = connected_bot(&server).await;

        Mock::given(method("POST"))
            .and(path(format!("/bot{TOKEN}/setWebhook")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true, "result": true})),
            )
            .mount(&server)
            .await;

        let mut cert = tempfile::Builder::new().suffix(".pem").tempfile().unwrap();
        write!(cert, "-----BEGIN CERTIFICATE-----").unwrap();

        let config = WebhookConfig {
            public_url: "https://bot.example.com/webhook".to_string(),
            certificate: Some(cert.path().to_path_buf()),
            ..Default::default()
        };
        register(&bot, &config).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let upload = requests
            .iter()
            .find(|r| r.url.path().ends_with("/setWebhook"))
            .unwrap();
        let body = String::from_utf8_lossy(&upload.body);
        assert!(body.contains("name=\"certificate\""));
        assert!(body.contains("BEGIN CERTIFICATE"));
        assert!(body.contains("https://bot.example.com/webhook"));
    }

    #[tokio::test]
    async fn test_register_without_url_is_rejected_locally() {
        let server = MockServer::start().await;
        let bot = connected_bot(&server).await;

        let err = register(&bot, &WebhookConfig::default()).await.unwrap_err();
        assert!(matches!(
            err,
            CourierError::Validation(ValidationError::Missing { field: "url" })
        ));
    }
}
