use std::fmt;
use std::sync::Arc;

use courier_core::error::Result;
use tracing::info;

use crate::api::Api;
use crate::dispatch::dispatch;
use crate::methods::{Command, GetMe, SendMessage};
use crate::types::{ChatId, Message, User};

const MAX_MESSAGE_LENGTH: usize = 4096;

/// Who the client is: the secret token and the account `getMe` reported for it.
///
/// Immutable after bootstrap and shared by reference.
pub struct BotIdentity {
    token: String,
    me: User,
}

impl BotIdentity {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn me(&self) -> &User {
        &self.me
    }
}

impl fmt::Debug for BotIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotIdentity")
            .field("token", &"<redacted>")
            .field("me", &self.me)
            .finish()
    }
}

/// A bootstrapped client: transport plus identity.
///
/// Clones share both, so a `Bot` can be handed to every task and handler.
#[derive(Debug, Clone)]
pub struct Bot {
    api: Api,
    identity: Arc<BotIdentity>,
}

impl Bot {
    /// Bootstrap: call `getMe` with the token. Any failure is returned and no `Bot` exists.
    pub async fn connect(api: Api, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let me = dispatch(&api, &token, &GetMe::default()).await?;

        info!(
            id = me.id,
            username = me.username.as_deref().unwrap_or_default(),
            "bot identity confirmed"
        );

        Ok(Self {
            api,
            identity: Arc::new(BotIdentity { token, me }),
        })
    }

    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub async fn send<C: Command>(&self, cmd: &C) -> Result<C::Output> {
        dispatch(&self.api, &self.identity.token, cmd).await
    }

    /// Send text of any length. Longer texts go out as several messages, in order.
    pub async fn send_text(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
    ) -> Result<Vec<Message>> {
        let chat_id = chat_id.into();
        let mut sent = Vec::new();

        for chunk in split_message(text) {
            let message = self.send(&SendMessage::new(chat_id.clone(), chunk)).await?;
            sent.push(message);
        }

        Ok(sent)
    }

    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>> {
        self.api.download(&self.identity.token, file_path).await
    }
}

/// Split on the last newline inside the limit, or at the limit when there is none.
fn split_message(text: &str) -> Vec<String> {
    if text.len() <= MAX_MESSAGE_LENGTH {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        if remaining.len() <= MAX_MESSAGE_LENGTH {
            chunks.push(remaining.to_string());
            break;
        }

        let mut limit = MAX_MESSAGE_LENGTH;
        while !remaining.is_char_boundary(limit) {
            limit -= 1;
        }

        let split_pos = match remaining[..limit].rfind('\n') {
            Some(pos) => pos + 1,
            None => limit,
        };

        chunks.push(remaining[..split_pos].to_string());
        remaining = &remaining[split_pos..];
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_one_chunk() {
        assert_eq!(split_message("hello"), vec!["hello".to_string()]);
    }

    #[test]
    fn test_split_prefers_last_newline() {
        let first = "a".repeat(4000);
        let second = "b".repeat(500);
        let text = format!("{first}\n{second}");

        let chunks = split_message(&text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], format!("{first}\n"));
        assert_eq!(chunks[1], second);
    }

    #[test]
    fn test_split_without_newline_cuts_at_limit() {
        let text = "x".repeat(MAX_MESSAGE_LENGTH * 2 + 10);
        let chunks = split_message(&text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), MAX_MESSAGE_LENGTH);
        assert_eq!(chunks[2].len(), 10);
    }

    #[test]
    fn test_split_respects_char_boundaries() {
        // 3-byte characters: 4096 is not a boundary.
        let text = "€".repeat(2000);
        let chunks = split_message(&text);
        assert!(chunks.iter().all(|c| c.len() <= MAX_MESSAGE_LENGTH));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_identity_debug_hides_token() {
        let identity = BotIdentity {
            token: "123456:SECRET".to_string(),
            me: User::default(),
        };
        let rendered = format!("{identity:?}");
        assert!(!rendered.contains("SECRET"));
        assert!(rendered.contains("<redacted>"));
    }
}
