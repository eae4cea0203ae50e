use serde::{Deserialize, Serialize};

use super::{is_zero, Command, FileField};
use crate::input::InputFile;
use crate::types::{Chat, ChatId, ChatInviteLink, ChatPermissions};
use crate::validate::Required;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl GetChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl Command for GetChat {
    const METHOD: &'static str = "getChat";
    type Output = Chat;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl Command for LeaveChat {
    const METHOD: &'static str = "leaveChat";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    pub title: String,
}

impl Command for SetChatTitle {
    const METHOD: &'static str = "setChatTitle";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("title", &self.title),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    /// Empty clears the description.
    pub description: String,
}

impl Command for SetChatDescription {
    const METHOD: &'static str = "setChatDescription";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetChatPhoto {
    pub chat_id: ChatId,
    /// Must be an upload; remote references are refused by the platform.
    #[serde(skip)]
    pub photo: InputFile,
}

impl Command for SetChatPhoto {
    const METHOD: &'static str = "setChatPhoto";
    type Output = bool;

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
pub struct DeleteChatPhoto {
    pub chat_id: ChatId,
}

impl Command for DeleteChatPhoto {
    const METHOD: &'static str = "deleteChatPhoto";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

/// The whole permission object is sent, including every `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetChatPermissions {
    pub chat_id: ChatId,
    pub permissions: ChatPermissions,
}

impl Command for SetChatPermissions {
    const METHOD: &'static str = "setChatPermissions";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetChatStickerSet {
    pub chat_id: ChatId,
    pub sticker_set_name: String,
}

impl Command for SetChatStickerSet {
    const METHOD: &'static str = "setChatStickerSet";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("sticker_set_name", &self.sticker_set_name),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteChatStickerSet {
    pub chat_id: ChatId,
}

impl Command for DeleteChatStickerSet {
    const METHOD: &'static str = "deleteChatStickerSet";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_notification: bool,
}

impl Command for PinChatMessage {
    const METHOD: &'static str = "pinChatMessage";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("message_id", &self.message_id),
        ]
    }
}

/// Without a `message_id` the most recent pinned message is unpinned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "is_zero")]
    pub message_id: i64,
}

impl Command for UnpinChatMessage {
    const METHOD: &'static str = "unpinChatMessage";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnpinAllChatMessages {
    pub chat_id: ChatId,
}

impl Command for UnpinAllChatMessages {
    const METHOD: &'static str = "unpinAllChatMessages";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

/// Revokes the current primary link and returns the new one as a bare string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportChatInviteLink {
    pub chat_id: ChatId,
}

impl Command for ExportChatInviteLink {
    const METHOD: &'static str = "exportChatInviteLink";
    type Output = String;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateChatInviteLink {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "is_zero")]
    pub expire_date: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub member_limit: i64,
}

impl Command for CreateChatInviteLink {
    const METHOD: &'static str = "createChatInviteLink";
    type Output = ChatInviteLink;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditChatInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub expire_date: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub member_limit: i64,
}

impl Command for EditChatInviteLink {
    const METHOD: &'static str = "editChatInviteLink";
    type Output = ChatInviteLink;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("invite_link", &self.invite_link),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevokeChatInviteLink {
    pub chat_id: ChatId,
    pub invite_link: String,
}

impl Command for RevokeChatInviteLink {
    const METHOD: &'static str = "revokeChatInviteLink";
    type Output = ChatInviteLink;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("invite_link", &self.invite_link),
        ]
    }
}
