use std::time::Duration;

use courier_core::config::TelegramConfig;
use courier_core::error::{CourierError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use crate::encode::{FormPart, PartContent, Payload};

/// Raw answer of one HTTP exchange, before the envelope is inspected.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport bound to one API host.
///
/// Cheap to clone; clones share the connection pool. Requests carry no state between
/// calls, so one `Api` serves any number of concurrent dispatches.
#[derive(Debug, Clone)]
pub struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CourierError::transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &TelegramConfig) -> Result<Self> {
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        Self::new(config.api_url.clone(), timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST one operation. Any HTTP status is returned as-is; only a failed exchange
    /// (connect, TLS, timeout, body read) is an error here.
    pub async fn post(&self, token: &str, method: &str, payload: Payload) -> Result<RawResponse> {
        let url = format!("{}/bot{token}/{method}", self.base_url);

        let request = match payload {
            Payload::Json(body) => self.client.post(&url).json(&body),
            Payload::Multipart(parts) => self.client.post(&url).multipart(into_form(parts)?),
        };

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?.to_vec();

        debug!(method, status, bytes = body.len(), "api response");
        Ok(RawResponse { status, body })
    }

    /// Fetch a file previously resolved with `getFile`.
    pub async fn download(&self, token: &str, file_path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/file/bot{token}/{file_path}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CourierError::Transport {
                status: Some(status.as_u16()),
                message: format!("file download failed for {file_path}"),
            });
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        Ok(bytes.to_vec())
    }
}

/// The request URL embeds the bot token, so it is stripped from the message.
/// Underlying causes are appended.
fn transport_error(e: reqwest::Error) -> CourierError {
    let status = e.status().map(|s| s.as_u16());
    let timed_out = e.is_timeout();
    let e = e.without_url();

    let mut message = e.to_string();
    let mut source = std::error::Error::source(&e);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    if timed_out && !message.contains("timed out") {
        message.push_str(": operation timed out");
    }

    CourierError::Transport { status, message }
}

fn into_form(parts: Vec<FormPart>) -> Result<Form> {
    let mut form = Form::new();
    for part in parts {
        form = match part.content {
            PartContent::Text(text) => form.text(part.name, text),
            PartContent::File { file_name, data } => {
                let mime = mime_for(&file_name);
                let file = Part::bytes(data)
                    .file_name(file_name)
                    .mime_str(mime)
                    .map_err(|e| CourierError::Encoding(e.to_string()))?;
                form.part(part.name, file)
            }
        };
    }
    Ok(form)
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "pem" => "application/x-pem-file",
        "tgs" => "application/x-tgsticker",
        _ => "application/octet-stream",
    }
}
