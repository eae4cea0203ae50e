use serde::{Deserialize, Serialize};

use super::{is_zero, Command};
use crate::types::{ChatId, ChatMember, ChatPermissions};
use crate::validate::Required;

/// Returned as the platform reports it; `permissions` is left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl Command for GetChatMember {
    const METHOD: &'static str = "getChatMember";
    type Output = ChatMember;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("user_id", &self.user_id),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChatMemberCount {
    pub chat_id: ChatId,
}

impl Command for GetChatMemberCount {
    const METHOD: &'static str = "getChatMemberCount";
    type Output = i64;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl GetChatAdministrators {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

impl Command for GetChatAdministrators {
    const METHOD: &'static str = "getChatAdministrators";
    type Output = Vec<ChatMember>;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("chat_id", &self.chat_id)]
    }

    fn finish(output: &mut Self::Output) {
        for member in output.iter_mut() {
            member.derive_permissions();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Unix time; 0 bans forever.
    #[serde(skip_serializing_if = "is_zero")]
    pub until_date: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub revoke_messages: bool,
}

impl Command for BanChatMember {
    const METHOD: &'static str = "banChatMember";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("user_id", &self.user_id),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub only_if_banned: bool,
}

impl Command for UnbanChatMember {
    const METHOD: &'static str = "unbanChatMember";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("user_id", &self.user_id),
        ]
    }
}

/// The permission object is always sent in full: every `false` revokes a right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    #[serde(skip_serializing_if = "is_zero")]
    pub until_date: i64,
}

impl Command for RestrictChatMember {
    const METHOD: &'static str = "restrictChatMember";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("user_id", &self.user_id),
        ]
    }
}

/// Every flag is sent; passing all `false` demotes the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoteChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_post_messages: bool,
    pub can_edit_messages: bool,
    pub can_delete_messages: bool,
    pub can_manage_voice_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
}

impl Command for PromoteChatMember {
    const METHOD: &'static str = "promoteChatMember";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("user_id", &self.user_id),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetChatAdministratorCustomTitle {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub custom_title: String,
}

impl Command for SetChatAdministratorCustomTitle {
    const METHOD: &'static str = "setChatAdministratorCustomTitle";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("chat_id", &self.chat_id),
            Required::new("user_id", &self.user_id),
            Required::new("custom_title", &self.custom_title),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrators_get_derived_permissions() {
        let mut admins: Vec<ChatMember> = serde_json::from_str(
            r#"[
                {"status":"creator","user":{"id":1}},
                {"status":"administrator","user":{"id":2},"can_pin_messages":true}
            ]"#,
        )
        .unwrap();

        GetChatAdministrators::finish(&mut admins);

        assert_eq!(admins[0].permissions, Some(ChatPermissions::all()));
        let admin = admins[1].permissions.unwrap();
        assert!(admin.can_send_media_messages);
        assert!(admin.can_pin_messages);
        assert!(!admin.can_invite_users);
    }

    #[test]
    fn test_single_member_is_not_post_processed() {
        let mut member = ChatMember {
            status: "creator".to_string(),
            ..Default::default()
        };
        GetChatMember::finish(&mut member);
        assert!(member.permissions.is_none());
    }

    #[test]
    fn test_ban_requires_user() {
        let cmd = BanChatMember {
            chat_id: ChatId::from(-100),
            ..Default::default()
        };
        assert!(cmd.check().is_err());
    }
}
