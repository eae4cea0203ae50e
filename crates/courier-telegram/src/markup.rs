use serde::{Deserialize, Serialize};

/// Keyboard attached to an outgoing message. The two kinds are mutually exclusive.
///
/// Always travels as one nested JSON value under `reply_markup`, including in
/// multipart payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Inline(InlineKeyboardMarkup),
    Reply(ReplyKeyboardMarkup),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::Inline(markup)
    }
}

impl From<InlineKeyboardButton> for ReplyMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        Self::Inline(button.into())
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Reply(markup)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row of buttons.
    pub fn row(mut self, buttons: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(buttons);
        self
    }
}

impl From<InlineKeyboardButton> for InlineKeyboardMarkup {
    fn from(button: InlineKeyboardButton) -> Self {
        Self {
            inline_keyboard: vec![vec![button]],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(flatten)]
    pub action: ButtonAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ButtonAction {
    #[serde(rename = "url")]
    Url(String),
    /// Sent back in a callback query when pressed, 1-64 bytes.
    #[serde(rename = "callback_data")]
    CallbackData(String),
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::CallbackData(data.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub resize_keyboard: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub one_time_keyboard: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selective: bool,
}

impl ReplyKeyboardMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, buttons: Vec<KeyboardButton>) -> Self {
        self.keyboard.push(buttons);
        self
    }

    pub fn resized(mut self) -> Self {
        self.resize_keyboard = true;
        self
    }

    pub fn one_time(mut self) -> Self {
        self.one_time_keyboard = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub request_contact: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub request_location: bool,
}

impl KeyboardButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_keyboard_wire_shape() {
        let markup: ReplyMarkup = InlineKeyboardMarkup::new()
            .row(vec![
                InlineKeyboardButton::callback("Yes", "vote:yes"),
                InlineKeyboardButton::url("Docs", "https://example.com"),
            ])
            .into();

        assert_eq!(
            serde_json::to_value(&markup).unwrap(),
            json!({"inline_keyboard": [[
                {"text": "Yes", "callback_data": "vote:yes"},
                {"text": "Docs", "url": "https://example.com"}
            ]]})
        );
    }

    #[test]
    fn test_reply_keyboard_omits_unset_flags() {
        let markup: ReplyMarkup = ReplyKeyboardMarkup::new()
            .row(vec![KeyboardButton::new("Menu")])
            .resized()
            .into();

        assert_eq!(
            serde_json::to_value(&markup).unwrap(),
            json!({"keyboard": [[{"text": "Menu"}]], "resize_keyboard": true})
        );
    }

    #[test]
    fn test_markup_kind_is_recovered_on_decode() {
        let inline: ReplyMarkup =
            serde_json::from_value(json!({"inline_keyboard": [[{"text": "a", "callback_data": "b"}]]}))
                .unwrap();
        assert!(matches!(inline, ReplyMarkup::Inline(_)));

        let reply: ReplyMarkup =
            serde_json::from_value(json!({"keyboard": [[{"text": "a"}]]})).unwrap();
        assert!(matches!(reply, ReplyMarkup::Reply(_)));
    }
}
