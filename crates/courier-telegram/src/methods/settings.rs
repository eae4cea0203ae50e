use courier_core::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

use super::{collect_files, is_zero, Command, FileField};
use crate::input::InputFile;
use crate::markup::InlineKeyboardMarkup;
use crate::types::{BotCommand, ChatId, File, User, UserProfilePhotos, WebhookInfo};
use crate::validate::{self, Required};

/// Scope types accepted by the `*MyCommands` family.
pub const COMMAND_SCOPES: &[&str] = &[
    "default",
    "all_private_chats",
    "all_group_chats",
    "all_chat_administrators",
    "chat",
    "chat_administrators",
    "chat_member",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMe {}

impl Command for GetMe {
    const METHOD: &'static str = "getMe";
    type Output = User;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotCommandScope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "ChatId::is_unset")]
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "is_zero")]
    pub user_id: i64,
}

impl BotCommandScope {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn chat(chat_id: impl Into<ChatId>) -> Self {
        Self {
            kind: "chat".to_string(),
            chat_id: chat_id.into(),
            user_id: 0,
        }
    }

    fn check(&self) -> Result<()> {
        validate::one_of("scope", &self.kind, COMMAND_SCOPES)?;
        let mut fields = Vec::new();
        if matches!(self.kind.as_str(), "chat" | "chat_administrators" | "chat_member") {
            fields.push(Required::new("scope.chat_id", &self.chat_id));
        }
        if self.kind == "chat_member" {
            fields.push(Required::new("scope.user_id", &self.user_id));
        }
        validate::required(&fields)?;
        Ok(())
    }
}

fn check_scope(scope: &Option<BotCommandScope>) -> Result<()> {
    match scope {
        Some(scope) => scope.check(),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetMyCommands {
    pub commands: Vec<BotCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language_code: String,
}

impl SetMyCommands {
    pub fn new(commands: Vec<BotCommand>) -> Self {
        Self {
            commands,
            ..Default::default()
        }
    }
}

impl Command for SetMyCommands {
    const METHOD: &'static str = "setMyCommands";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("commands", &self.commands)]
    }

    fn check(&self) -> Result<()> {
        validate::required(&self.required())?;
        check_scope(&self.scope)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language_code: String,
}

impl Command for GetMyCommands {
    const METHOD: &'static str = "getMyCommands";
    type Output = Vec<BotCommand>;

    fn check(&self) -> Result<()> {
        check_scope(&self.scope)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteMyCommands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<BotCommandScope>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language_code: String,
}

impl Command for DeleteMyCommands {
    const METHOD: &'static str = "deleteMyCommands";
    type Output = bool;

    fn check(&self) -> Result<()> {
        check_scope(&self.scope)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_alert: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Seconds the client may cache the answer.
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub cache_time: u32,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl Command for AnswerCallbackQuery {
    const METHOD: &'static str = "answerCallbackQuery";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("callback_query_id", &self.callback_query_id)]
    }
}

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputTextMessageContent {
    pub message_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_web_page_preview: bool,
}

/// One answer to an inline query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    Video(InlineQueryResultVideo),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineQueryResultArticle {
    pub id: String,
    pub title: String,
    pub input_message_content: InputTextMessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumb_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineQueryResultPhoto {
    pub id: String,
    pub photo_url: String,
    pub thumb_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,
    pub thumb_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,
    /// "text/html" or "video/mp4".
    pub mime_type: String,
    pub thumb_url: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl InlineQueryResult {
    fn required(&self) -> Vec<Required> {
        match self {
            Self::Article(r) => vec![
                Required::new("id", &r.id),
                Required::new("title", &r.title),
                Required::new(
                    "input_message_content.message_text",
                    &r.input_message_content.message_text,
                ),
            ],
            Self::Photo(r) => vec![
                Required::new("id", &r.id),
                Required::new("photo_url", &r.photo_url),
                Required::new("thumb_url", &r.thumb_url),
            ],
            Self::Gif(r) => vec![
                Required::new("id", &r.id),
                Required::new("gif_url", &r.gif_url),
                Required::new("thumb_url", &r.thumb_url),
            ],
            Self::Video(r) => vec![
                Required::new("id", &r.id),
                Required::new("video_url", &r.video_url),
                Required::new("mime_type", &r.mime_type),
                Required::new("thumb_url", &r.thumb_url),
                Required::new("title", &r.title),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results: Vec<InlineQueryResult>,
    #[serde(skip_serializing_if = "is_zero")]
    pub cache_time: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_personal: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_offset: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub switch_pm_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub switch_pm_parameter: String,
}

impl Command for AnswerInlineQuery {
    const METHOD: &'static str = "answerInlineQuery";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("inline_query_id", &self.inline_query_id),
            Required::new("results", &self.results),
        ]
    }

    fn check(&self) -> Result<()> {
        validate::required(&self.required())?;
        for (index, result) in self.results.iter().enumerate() {
            if let Err(ValidationError::Missing { field }) = validate::required(&result.required())
            {
                return Err(ValidationError::InvalidResult {
                    index,
                    reason: format!("missing required field `{field}`"),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl Command for GetFile {
    const METHOD: &'static str = "getFile";
    type Output = File;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("file_id", &self.file_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: i64,
    /// 1-100; unset means 100.
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: i64,
}

impl Command for GetUserProfilePhotos {
    const METHOD: &'static str = "getUserProfilePhotos";
    type Output = UserProfilePhotos;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("user_id", &self.user_id)]
    }
}

/// Registers the HTTPS endpoint the platform pushes updates to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetWebhook {
    pub url: String,
    /// Public key certificate for self-signed endpoints. Always uploaded.
    #[serde(skip)]
    pub certificate: Option<InputFile>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub max_connections: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub drop_pending_updates: bool,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Command for SetWebhook {
    const METHOD: &'static str = "setWebhook";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("url", &self.url)]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([("certificate", self.certificate.as_ref())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteWebhook {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub drop_pending_updates: bool,
}

impl Command for DeleteWebhook {
    const METHOD: &'static str = "deleteWebhook";
    type Output = bool;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetWebhookInfo {}

impl Command for GetWebhookInfo {
    const METHOD: &'static str = "getWebhookInfo";
    type Output = WebhookInfo;
}
