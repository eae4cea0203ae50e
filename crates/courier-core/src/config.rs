use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CourierError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Client-side timeout for one HTTP exchange. 0 disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Public HTTPS URL the platform pushes updates to. Empty means "don't register".
    #[serde(default)]
    pub public_url: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_path")]
    pub path: String,
    /// PEM certificate uploaded with `setWebhook` for self-signed setups.
    #[serde(default)]
    pub certificate: Option<PathBuf>,
    #[serde(default)]
    pub allowed_updates: Vec<String>,
    #[serde(default)]
    pub max_connections: u32,
    #[serde(default)]
    pub drop_pending_updates: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8443".to_string()
}

fn default_path() -> String {
    "/webhook".to_string()
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            public_url: String::new(),
            listen_addr: default_listen_addr(),
            path: default_path(),
            certificate: None,
            allowed_updates: Vec::new(),
            max_connections: 0,
            drop_pending_updates: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load config: defaults → courier.toml → env vars (env wins).
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read the TOML file, or fall back to defaults when it does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| CourierError::Config(format!("failed to read config: {e}")))?;
        toml::from_str(&content)
            .map_err(|e| CourierError::Config(format!("failed to parse config: {e}")))
    }

    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("COURIER_TELEGRAM_TOKEN") {
            self.telegram.token = v;
        }
        if let Some(v) = var("COURIER_API_URL") {
            self.telegram.api_url = v;
        }
        if let Some(v) = var("COURIER_WEBHOOK_URL") {
            self.webhook.public_url = v;
        }
        if let Some(v) = var("COURIER_LISTEN_ADDR") {
            self.webhook.listen_addr = v;
        }
        if let Some(v) = var("COURIER_LOG_LEVEL") {
            self.log.level = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::from_file(Path::new("/nonexistent/courier.toml")).unwrap();
        assert_eq!(config.telegram.api_url, "https://api.telegram.org");
        assert_eq!(config.telegram.timeout_secs, 30);
        assert_eq!(config.webhook.listen_addr, "0.0.0.0:8443");
        assert_eq!(config.webhook.path, "/webhook");
        assert_eq!(config.log.level, "info");
        assert!(config.telegram.token.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[telegram]\ntoken = \"123:abc\"\n\n[webhook]\npublic_url = \"https://example.com/hook\"\nallowed_updates = [\"message\", \"callback_query\"]"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.telegram.token, "123:abc");
        assert_eq!(config.telegram.api_url, "https://api.telegram.org");
        assert_eq!(config.webhook.public_url, "https://example.com/hook");
        assert_eq!(config.webhook.allowed_updates, vec!["message", "callback_query"]);
        assert_eq!(config.webhook.path, "/webhook");
        assert!(!config.log.json);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telegram\ntoken = ").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CourierError::Config(_)));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config::default();
        config.telegram.token = "from-file".to_string();

        let env: HashMap<&str, &str> = [
            ("COURIER_TELEGRAM_TOKEN", "from-env"),
            ("COURIER_WEBHOOK_URL", "https://bot.example.org/hook"),
            ("COURIER_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.telegram.token, "from-env");
        assert_eq!(config.webhook.public_url, "https://bot.example.org/hook");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.webhook.listen_addr, "0.0.0.0:8443");
    }
}
