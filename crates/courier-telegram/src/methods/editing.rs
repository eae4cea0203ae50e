use courier_core::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

use super::{is_zero, Command, MediaField};
use crate::input::InputMedia;
use crate::markup::InlineKeyboardMarkup;
use crate::types::{ChatId, Message, MessageEntity, Poll};
use crate::validate::{self, Required};

/// Edits of chat messages return the edited message; edits of inline messages return `true`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Edited {
    Message(Box<Message>),
    Inline(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditMessageText {
    #[serde(skip_serializing_if = "ChatId::is_unset")]
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "is_zero")]
    pub message_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inline_message_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn inline(inline_message_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            inline_message_id: inline_message_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Command for EditMessageText {
    const METHOD: &'static str = "editMessageText";
    type Output = Edited;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("text", &self.text)]
    }

    fn check(&self) -> Result<()> {
        validate::edit_target(&self.chat_id, self.message_id, &self.inline_message_id)?;
        validate::required(&self.required())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditMessageCaption {
    #[serde(skip_serializing_if = "ChatId::is_unset")]
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "is_zero")]
    pub message_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inline_message_id: String,
    /// Empty removes the caption.
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Command for EditMessageCaption {
    const METHOD: &'static str = "editMessageCaption";
    type Output = Edited;

    fn check(&self) -> Result<()> {
        validate::edit_target(&self.chat_id, self.message_id, &self.inline_message_id)?;
        Ok(())
    }
}

/// Replaces the media of an existing message. A local replacement file is uploaded
/// and referenced through `attach://`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditMessageMedia {
    #[serde(skip_serializing_if = "ChatId::is_unset")]
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "is_zero")]
    pub message_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inline_message_id: String,
    #[serde(skip)]
    pub media: Option<InputMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageMedia {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64, media: InputMedia) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            media: Some(media),
            ..Default::default()
        }
    }
}

impl Command for EditMessageMedia {
    const METHOD: &'static str = "editMessageMedia";
    type Output = Edited;

    fn check(&self) -> Result<()> {
        validate::edit_target(&self.chat_id, self.message_id, &self.inline_message_id)?;
        match &self.media {
            Some(media) if !media.media().is_empty() => Ok(()),
            _ => Err(ValidationError::Missing { field: "media" }.into()),
        }
    }

    fn media(&self) -> Vec<MediaField<'_>> {
        self.media
            .iter()
            .map(|media| MediaField::One("media", media))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditMessageReplyMarkup {
    #[serde(skip_serializing_if = "ChatId::is_unset")]
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "is_zero")]
    pub message_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inline_message_id: String,
    /// `None` removes the keyboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Command for EditMessageReplyMarkup {
    const METHOD: &'static str = "editMessageReplyMarkup";
    type Output = Edited;

    fn check(&self) -> Result<()> {
        validate::edit_target(&self.chat_id, self.message_id, &self.inline_message_id)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopPoll {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Command for StopPoll {
    const METHOD: &'static str = "stopPoll";
    type Output = Poll;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("message_id", &self.message_id),
        ]
    }
}
