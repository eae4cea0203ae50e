use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markup::InlineKeyboardMarkup;

/// Target chat: a numeric id or an `@channelusername`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    /// The zero value: id 0 or an empty username.
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Id(id) => *id == 0,
            Self::Username(name) => name.is_empty(),
        }
    }
}

impl Default for ChatId {
    fn default() -> Self {
        Self::Id(0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
    /// Only returned by `getMe`.
    pub supports_inline_queries: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub invite_link: Option<String>,
    pub pinned_message: Option<Box<Message>>,
    pub permissions: Option<ChatPermissions>,
    pub slow_mode_delay: i64,
    pub message_auto_delete_time: i64,
    pub sticker_set_name: Option<String>,
    pub can_set_sticker_set: bool,
    pub linked_chat_id: Option<i64>,
}

/// Default rights of chat members. Always serialized in full: `false` is meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatPermissions {
    pub can_send_messages: bool,
    pub can_send_media_messages: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
}

impl ChatPermissions {
    pub fn all() -> Self {
        Self {
            can_send_messages: true,
            can_send_media_messages: true,
            can_send_polls: true,
            can_send_other_messages: true,
            can_add_web_page_previews: true,
            can_change_info: true,
            can_invite_users: true,
            can_pin_messages: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: i64,
    pub length: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub file_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Animation {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub duration: i64,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: Option<i64>,
    /// Use with `Bot::download_file`.
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PollOption {
    pub text: String,
    pub voter_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_voter_count: i64,
    pub is_closed: bool,
    pub is_anonymous: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub allows_multiple_answers: bool,
    pub correct_option_id: Option<i64>,
    pub explanation: Option<String>,
    pub open_period: Option<i64>,
    pub close_date: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    pub message: Option<Message>,
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    pub data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub date: i64,
    pub text: Option<String>,
    pub entities: Vec<MessageEntity>,
    pub caption: Option<String>,
    pub animation: Option<Animation>,
    pub photo: Vec<PhotoSize>,
    pub document: Option<Document>,
    pub sticker: Option<Sticker>,
    pub poll: Option<Poll>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub reply_to_message: Option<Box<Message>>,
    pub new_chat_members: Vec<User>,
    pub new_chat_title: Option<String>,
    pub new_chat_photo: Vec<PhotoSize>,
    pub delete_chat_photo: bool,
}

/// Result of `copyMessage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

/// What a message carries, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Animation,
    Photo,
    Document,
    DeleteChatPhoto,
    NewChatPhoto,
    Unknown,
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        if self.text.as_deref().is_some_and(|t| !t.is_empty()) {
            MessageKind::Text
        } else if self.animation.is_some() {
            MessageKind::Animation
        } else if !self.photo.is_empty() {
            MessageKind::Photo
        } else if self.document.is_some() {
            MessageKind::Document
        } else if self.delete_chat_photo {
            MessageKind::DeleteChatPhoto
        } else if !self.new_chat_photo.is_empty() {
            MessageKind::NewChatPhoto
        } else {
            MessageKind::Unknown
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatInviteLink {
    pub invite_link: String,
    pub creator: User,
    pub is_primary: bool,
    pub is_revoked: bool,
    pub expire_date: Option<i64>,
    pub member_limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatMember {
    pub status: String,
    pub user: User,
    pub is_anonymous: bool,
    pub custom_title: Option<String>,
    pub is_member: bool,
    pub can_be_edited: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_voice_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_messages: bool,
    pub can_edit_messages: bool,
    pub can_pin_messages: bool,
    pub can_send_messages: bool,
    pub can_send_media_messages: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    /// Restricted members: when restrictions are lifted, unix time. 0 means forever.
    pub until_date: Option<i64>,
    /// Derived effective permissions. Only `getChatAdministrators` fills this in.
    #[serde(skip)]
    pub permissions: Option<ChatPermissions>,
}

impl ChatMember {
    pub fn derive_permissions(&mut self) {
        let derived = match self.status.as_str() {
            "creator" => ChatPermissions::all(),
            "administrator" => ChatPermissions {
                can_change_info: self.can_change_info,
                can_invite_users: self.can_invite_users,
                can_pin_messages: self.can_pin_messages,
                ..ChatPermissions::all()
            },
            _ => ChatPermissions {
                can_send_messages: self.can_send_messages,
                can_send_media_messages: self.can_send_media_messages,
                can_send_polls: self.can_send_polls,
                can_send_other_messages: self.can_send_other_messages,
                can_add_web_page_previews: self.can_add_web_page_previews,
                can_change_info: self.can_change_info,
                can_invite_users: self.can_invite_users,
                can_pin_messages: self.can_pin_messages,
            },
        };
        self.permissions = Some(derived);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserProfilePhotos {
    pub total_count: i64,
    pub photos: Vec<Vec<PhotoSize>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskPosition {
    /// One of "forehead", "eyes", "mouth" or "chin".
    pub point: String,
    pub x_shift: f64,
    pub y_shift: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub is_animated: bool,
    pub emoji: Option<String>,
    pub set_name: Option<String>,
    pub mask_position: Option<MaskPosition>,
    pub thumb: Option<PhotoSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub is_animated: bool,
    pub contains_masks: bool,
    pub stickers: Vec<Sticker>,
    pub thumb: Option<PhotoSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WebhookInfo {
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    pub ip_address: Option<String>,
    pub last_error_date: Option<i64>,
    pub last_error_message: Option<String>,
    pub max_connections: Option<i64>,
    pub allowed_updates: Vec<String>,
}

/// One inbound notification. At most one variant field is populated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
    pub poll: Option<Poll>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateKind<'a> {
    Message(&'a Message),
    CallbackQuery(&'a CallbackQuery),
    Poll(&'a Poll),
    Unknown,
}

impl Update {
    pub fn kind(&self) -> UpdateKind<'_> {
        if let Some(message) = &self.message {
            UpdateKind::Message(message)
        } else if let Some(query) = &self.callback_query {
            UpdateKind::CallbackQuery(query)
        } else if let Some(poll) = &self.poll {
            UpdateKind::Poll(poll)
        } else {
            UpdateKind::Unknown
        }
    }
}
