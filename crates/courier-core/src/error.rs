use thiserror::Error;

/// Local pre-flight failure: the command never reached the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{field}`")]
    Missing { field: &'static str },
    #[error("unrecognized value {value:?} for `{field}`")]
    Unrecognized { field: &'static str, value: String },
    #[error("set both `chat_id` and `message_id`, otherwise set `inline_message_id`")]
    MissingTarget,
    #[error("`{first}` and `{second}` cannot both be set")]
    Exclusive {
        first: &'static str,
        second: &'static str,
    },
    #[error("inline result #{index} is invalid: {reason}")]
    InvalidResult { index: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum CourierError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("transport error: {message}")]
    Transport { status: Option<u16>, message: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("api error ({code}): {description}")]
    Api { code: i64, description: String },
    #[error("config error: {0}")]
    Config(String),
    #[error("server error: {0}")]
    Server(String),
}

impl CourierError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// True for failures raised before any request was built.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Encoding(_))
    }

    /// The platform's numeric error code, when the platform answered `ok: false`.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CourierError>;
