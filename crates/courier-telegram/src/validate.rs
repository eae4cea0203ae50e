use courier_core::error::ValidationError;

use crate::input::InputFile;
use crate::types::ChatId;

/// Whether a field holds something other than its zero value.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for i64 {
    fn is_present(&self) -> bool {
        *self != 0
    }
}

impl Presence for ChatId {
    fn is_present(&self) -> bool {
        !self.is_unset()
    }
}

impl Presence for InputFile {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// A required field's wire name paired with whether it is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required {
    pub field: &'static str,
    pub present: bool,
}

impl Required {
    pub fn new<T: Presence + ?Sized>(field: &'static str, value: &T) -> Self {
        Self {
            field,
            present: value.is_present(),
        }
    }
}

/// Fail on the first required field that holds its zero value.
pub fn required(fields: &[Required]) -> Result<(), ValidationError> {
    match fields.iter().find(|f| !f.present) {
        Some(missing) => Err(ValidationError::Missing {
            field: missing.field,
        }),
        None => Ok(()),
    }
}

/// Reject values outside a fixed set. Unknown values are never replaced by a default.
pub fn one_of(field: &'static str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::Unrecognized {
            field,
            value: value.to_string(),
        })
    }
}

/// Edit operations address either an inline message or a chat message.
pub fn edit_target(
    chat_id: &ChatId,
    message_id: i64,
    inline_message_id: &str,
) -> Result<(), ValidationError> {
    if !inline_message_id.is_empty() {
        return Ok(());
    }
    if chat_id.is_unset() || message_id == 0 {
        return Err(ValidationError::MissingTarget);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_missing_field_is_reported() {
        let fields = [
            Required::new("chat_id", &ChatId::from(1)),
            Required::new("text", ""),
            Required::new("photo", &InputFile::default()),
        ];
        assert_eq!(
            required(&fields),
            Err(ValidationError::Missing { field: "text" })
        );
    }

    #[test]
    fn test_all_present_passes() {
        let options = vec!["a".to_string()];
        let fields = [
            Required::new("chat_id", &ChatId::from("@channel")),
            Required::new("message_id", &7i64),
            Required::new("options", &options),
            Required::new("thumb", &Some(InputFile::remote("id"))),
        ];
        assert_eq!(required(&fields), Ok(()));
    }

    #[test]
    fn test_one_of_rejects_unknown_values() {
        assert_eq!(one_of("action", "typing", &["typing", "upload_photo"]), Ok(()));
        assert_eq!(
            one_of("action", "dancing", &["typing", "upload_photo"]),
            Err(ValidationError::Unrecognized {
                field: "action",
                value: "dancing".to_string()
            })
        );
    }

    #[test]
    fn test_edit_target_rules() {
        assert_eq!(edit_target(&ChatId::default(), 0, "inline-1"), Ok(()));
        assert_eq!(edit_target(&ChatId::from(5), 10, ""), Ok(()));
        assert_eq!(
            edit_target(&ChatId::from(5), 0, ""),
            Err(ValidationError::MissingTarget)
        );
        assert_eq!(
            edit_target(&ChatId::default(), 10, ""),
            Err(ValidationError::MissingTarget)
        );
    }
}
