use courier_core::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

use super::{collect_files, is_zero, is_zero_f64, Command, FileField, MediaField, SendOptions};
use crate::input::{InputFile, InputMedia};
use crate::markup::ReplyMarkup;
use crate::types::{ChatId, Message, MessageEntity, MessageId};
use crate::validate::{self, Required};

/// Actions accepted by `sendChatAction`. The retired `general` action is not among them.
pub const CHAT_ACTIONS: &[&str] = &[
    "typing",
    "upload_photo",
    "record_video",
    "upload_video",
    "record_voice",
    "upload_voice",
    "upload_document",
    "find_location",
    "record_video_note",
    "upload_video_note",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_web_page_preview: bool,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn parse_mode(mut self, mode: impl Into<String>) -> Self {
        self.parse_mode = mode.into();
        self
    }

    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.options.reply_to_message_id = message_id;
        self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }
}

impl Command for SendMessage {
    const METHOD: &'static str = "sendMessage";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("text", &self.text),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub photo: InputFile,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo,
            ..Default::default()
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }
}

impl Command for SendPhoto {
    const METHOD: &'static str = "sendPhoto";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("photo", &self.photo),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        vec![FileField::new("photo", &self.photo)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendVideo {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub video: InputFile,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "is_zero")]
    pub duration: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub width: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub height: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub supports_streaming: bool,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVideo {
    pub fn new(chat_id: impl Into<ChatId>, video: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            video,
            ..Default::default()
        }
    }
}

impl Command for SendVideo {
    const METHOD: &'static str = "sendVideo";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("video", &self.video),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([("video", Some(&self.video)), ("thumb", self.thumb.as_ref())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendAudio {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub audio: InputFile,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "is_zero")]
    pub duration: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub performer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendAudio {
    pub fn new(chat_id: impl Into<ChatId>, audio: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            audio,
            ..Default::default()
        }
    }
}

impl Command for SendAudio {
    const METHOD: &'static str = "sendAudio";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("audio", &self.audio),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([("audio", Some(&self.audio)), ("thumb", self.thumb.as_ref())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendDocument {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub document: InputFile,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_content_type_detection: bool,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendDocument {
    pub fn new(chat_id: impl Into<ChatId>, document: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            document,
            ..Default::default()
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

impl Command for SendDocument {
    const METHOD: &'static str = "sendDocument";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("document", &self.document),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([
            ("document", Some(&self.document)),
            ("thumb", self.thumb.as_ref()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendVoice {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub voice: InputFile,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "is_zero")]
    pub duration: i64,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVoice {
    pub fn new(chat_id: impl Into<ChatId>, voice: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            voice,
            ..Default::default()
        }
    }
}

impl Command for SendVoice {
    const METHOD: &'static str = "sendVoice";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("voice", &self.voice),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        vec![FileField::new("voice", &self.voice)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendAnimation {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub animation: InputFile,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "is_zero")]
    pub duration: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub width: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub height: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendAnimation {
    pub fn new(chat_id: impl Into<ChatId>, animation: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            animation,
            ..Default::default()
        }
    }
}

impl Command for SendAnimation {
    const METHOD: &'static str = "sendAnimation";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("animation", &self.animation),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([
            ("animation", Some(&self.animation)),
            ("thumb", self.thumb.as_ref()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendVideoNote {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub video_note: InputFile,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "is_zero")]
    pub duration: i64,
    /// Diameter of the round video.
    #[serde(skip_serializing_if = "is_zero")]
    pub length: i64,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Command for SendVideoNote {
    const METHOD: &'static str = "sendVideoNote";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("video_note", &self.video_note),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([
            ("video_note", Some(&self.video_note)),
            ("thumb", self.thumb.as_ref()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendSticker {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub sticker: InputFile,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendSticker {
    pub fn new(chat_id: impl Into<ChatId>, sticker: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker,
            ..Default::default()
        }
    }
}

impl Command for SendSticker {
    const METHOD: &'static str = "sendSticker";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("sticker", &self.sticker),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        vec![FileField::new("sticker", &self.sticker)]
    }
}

/// `is_anonymous` and `correct_option_id` are sent whenever set, `false` and `0` included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendPoll {
    pub chat_id: ChatId,
    pub question: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    /// "regular" or "quiz". Empty leaves the platform default.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub allows_multiple_answers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub explanation: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub explanation_parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explanation_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "is_zero")]
    pub open_period: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub close_date: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_closed: bool,
    #[serde(flatten)]
    pub send: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendPoll {
    pub fn new(chat_id: impl Into<ChatId>, question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            question: question.into(),
            options,
            ..Default::default()
        }
    }

    pub fn quiz(mut self, correct_option_id: i64) -> Self {
        self.kind = "quiz".to_string();
        self.correct_option_id = Some(correct_option_id);
        self
    }
}

impl Command for SendPoll {
    const METHOD: &'static str = "sendPoll";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("question", &self.question),
            Required::new("options", &self.options),
        ]
    }

    fn check(&self) -> Result<()> {
        validate::required(&self.required())?;
        if !self.kind.is_empty() {
            validate::one_of("type", &self.kind, &["regular", "quiz"])?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendDice {
    pub chat_id: ChatId,
    /// One of the dice emoji the platform animates.
    pub emoji: String,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendDice {
    pub fn new(chat_id: impl Into<ChatId>, emoji: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            emoji: emoji.into(),
            ..Default::default()
        }
    }
}

impl Command for SendDice {
    const METHOD: &'static str = "sendDice";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("emoji", &self.emoji),
        ]
    }
}

/// Coordinates are always sent; 0.0 is a valid latitude or longitude.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendLocation {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub horizontal_accuracy: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub live_period: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub heading: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub proximity_alert_radius: i64,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendLocation {
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            ..Default::default()
        }
    }
}

impl Command for SendLocation {
    const METHOD: &'static str = "sendLocation";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendContact {
    pub chat_id: ChatId,
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vcard: String,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Command for SendContact {
    const METHOD: &'static str = "sendContact";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("phone_number", &self.phone_number),
            Required::new("first_name", &self.first_name),
        ]
    }
}

/// An album of two to ten items. Every local file becomes its own binary part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMediaGroup {
    pub chat_id: ChatId,
    #[serde(skip)]
    pub media: Vec<InputMedia>,
    #[serde(flatten)]
    pub options: SendOptions,
}

impl SendMediaGroup {
    pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
        Self {
            chat_id: chat_id.into(),
            media,
            ..Default::default()
        }
    }
}

impl Command for SendMediaGroup {
    const METHOD: &'static str = "sendMediaGroup";
    type Output = Vec<Message>;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("media", &self.media),
        ]
    }

    fn check(&self) -> Result<()> {
        validate::required(&self.required())?;
        if self.media.iter().any(|item| item.media().is_empty()) {
            return Err(ValidationError::Missing { field: "media" }.into());
        }
        Ok(())
    }

    fn media(&self) -> Vec<MediaField<'_>> {
        vec![MediaField::Many("media", &self.media)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub protect_content: bool,
}

impl Command for ForwardMessage {
    const METHOD: &'static str = "forwardMessage";
    type Output = Message;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("from_chat_id", &self.from_chat_id),
            Required::new("message_id", &self.message_id),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(flatten)]
    pub options: SendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl Command for CopyMessage {
    const METHOD: &'static str = "copyMessage";
    type Output = MessageId;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("from_chat_id", &self.from_chat_id),
            Required::new("message_id", &self.message_id),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl Command for DeleteMessage {
    const METHOD: &'static str = "deleteMessage";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("message_id", &self.message_id),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendChatAction {
    pub chat_id: ChatId,
    pub action: String,
}

impl SendChatAction {
    pub fn new(chat_id: impl Into<ChatId>, action: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            action: action.into(),
        }
    }
}

impl Command for SendChatAction {
    const METHOD: &'static str = "sendChatAction";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("action", &self.action),
        ]
    }

    fn check(&self) -> Result<()> {
        validate::required(&self.required())?;
        validate::one_of("action", &self.action, CHAT_ACTIONS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::error::CourierError;
    use serde_json::json;

    #[test]
    fn test_send_message_omits_unset_optionals() {
        let cmd = SendMessage::new(42, "hello").reply_to(7);
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"chat_id": 42, "text": "hello", "reply_to_message_id": 7})
        );
    }

    #[test]
    fn test_send_message_requires_text() {
        let err = SendMessage::new(42, "").check().unwrap_err();
        assert!(matches!(
            err,
            CourierError::Validation(ValidationError::Missing { field: "text" })
        ));
    }

    #[test]
    fn test_location_always_carries_coordinates() {
        let cmd = SendLocation::new(1, 0.0, 0.0);
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"chat_id": 1, "latitude": 0.0, "longitude": 0.0})
        );
    }

    #[test]
    fn test_poll_sends_explicit_false_and_zero() {
        let mut cmd = SendPoll::new(1, "Pick", vec!["a".into(), "b".into()]).quiz(0);
        cmd.is_anonymous = Some(false);

        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["is_anonymous"], json!(false));
        assert_eq!(value["correct_option_id"], json!(0));
        assert_eq!(value["type"], json!("quiz"));
    }

    #[test]
    fn test_poll_rejects_unknown_type() {
        let mut cmd = SendPoll::new(1, "Pick", vec!["a".into(), "b".into()]);
        cmd.kind = "survey".to_string();
        assert!(matches!(
            cmd.check(),
            Err(CourierError::Validation(ValidationError::Unrecognized { field: "type", .. }))
        ));
    }

    #[test]
    fn test_chat_action_is_checked_against_known_set() {
        assert!(SendChatAction::new(1, "upload_photo").check().is_ok());
        assert!(matches!(
            SendChatAction::new(1, "dancing").check(),
            Err(CourierError::Validation(ValidationError::Unrecognized { field: "action", .. }))
        ));
        assert!(matches!(
            SendChatAction::new(1, "general").check(),
            Err(CourierError::Validation(ValidationError::Unrecognized { field: "action", .. }))
        ));
    }

    #[test]
    fn test_dice_requires_emoji() {
        assert!(matches!(
            SendDice::new(1, "").check(),
            Err(CourierError::Validation(ValidationError::Missing { field: "emoji" }))
        ));

        let cmd = SendDice::new(1, "🎯");
        assert!(cmd.check().is_ok());
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"chat_id": 1, "emoji": "🎯"})
        );
    }

    #[test]
    fn test_empty_media_group_is_rejected() {
        let err = SendMediaGroup::new(1, Vec::new()).check().unwrap_err();
        assert!(matches!(
            err,
            CourierError::Validation(ValidationError::Missing { field: "media" })
        ));

        let group = SendMediaGroup::new(1, vec![InputMedia::photo(InputFile::default())]);
        assert!(group.check().is_err());
    }

    #[test]
    fn test_photo_file_stays_out_of_the_record() {
        let cmd = SendPhoto::new(1, InputFile::remote("AgACAgI")).caption("cat");
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({"chat_id": 1, "caption": "cat"})
        );
        assert_eq!(cmd.files().len(), 1);
        assert_eq!(cmd.files()[0].name, "photo");
    }
}
