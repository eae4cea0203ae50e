use courier_core::error::{CourierError, Result};
use serde_json::{Map, Value};

use crate::input::{InputFile, InputMedia};
use crate::methods::{Command, MediaField};

/// Request body of one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Multipart(Vec<FormPart>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Multipart,
}

impl Payload {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Json(_) => ContentKind::Json,
            Self::Multipart(_) => ContentKind::Multipart,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub content: PartContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartContent {
    Text(String),
    File { file_name: String, data: Vec<u8> },
}

type Upload<'a> = (String, &'a InputFile);

/// Encode a command as JSON, or as multipart when any file must be uploaded.
///
/// In multipart form every non-file field becomes a text part: strings raw, anything
/// else (numbers, booleans, `reply_markup`, media lists) as its JSON text. Local files
/// nested in media descriptors are named `file<n>` and referenced as `attach://file<n>`.
pub async fn encode<C: Command>(cmd: &C) -> Result<Payload> {
    let mut fields = match serde_json::to_value(cmd) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(CourierError::Encoding(format!(
                "{} did not encode to an object: {other}",
                C::METHOD
            )))
        }
        Err(e) => return Err(CourierError::Encoding(e.to_string())),
    };

    let mut uploads: Vec<Upload<'_>> = Vec::new();

    for field in cmd.files() {
        match field.file {
            file if file.is_empty() => return Err(empty_file(field.name)),
            InputFile::Remote(reference) => {
                fields.insert(field.name.to_string(), Value::String(reference.clone()));
            }
            local => uploads.push((field.name.to_string(), local)),
        }
    }

    for media in cmd.media() {
        match media {
            MediaField::One(name, item) => {
                let value = attach(item, &mut uploads)?;
                fields.insert(name.to_string(), value);
            }
            MediaField::Many(name, items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    list.push(attach(item, &mut uploads)?);
                }
                fields.insert(name.to_string(), Value::Array(list));
            }
        }
    }

    if uploads.is_empty() {
        return Ok(Payload::Json(Value::Object(fields)));
    }

    let mut parts = text_parts(fields);
    for (name, file) in uploads {
        parts.push(file_part(name, file).await?);
    }
    Ok(Payload::Multipart(parts))
}

/// Serialize one media descriptor, writing its file references in.
fn attach<'a>(item: &'a InputMedia, uploads: &mut Vec<Upload<'a>>) -> Result<Value> {
    let mut map = match serde_json::to_value(item) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(CourierError::Encoding("media did not encode to an object".to_string())),
        Err(e) => return Err(CourierError::Encoding(e.to_string())),
    };

    for (key, file) in item.files() {
        let reference = match file {
            file if file.is_empty() => return Err(empty_file(key)),
            InputFile::Remote(reference) => reference.clone(),
            local => {
                let name = format!("file{}", uploads.len());
                let pointer = format!("attach://{name}");
                uploads.push((name, local));
                pointer
            }
        };
        map.insert(key.to_string(), Value::String(reference));
    }

    Ok(Value::Object(map))
}

fn empty_file(field: &str) -> CourierError {
    CourierError::Encoding(format!(
        "`{field}` holds neither a remote reference nor a local file"
    ))
}

fn text_parts(fields: Map<String, Value>) -> Vec<FormPart> {
    fields
        .into_iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            FormPart {
                name,
                content: PartContent::Text(text),
            }
        })
        .collect()
}

async fn file_part(name: String, file: &InputFile) -> Result<FormPart> {
    let (file_name, data) = match file {
        InputFile::Path(path) => {
            let data = tokio::fs::read(path).await.map_err(|e| {
                CourierError::Encoding(format!("failed to read {}: {e}", path.display()))
            })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.clone());
            (file_name, data)
        }
        InputFile::Memory { file_name, data } => (file_name.clone(), data.clone()),
        InputFile::Remote(reference) => {
            return Err(CourierError::Encoding(format!(
                "remote reference {reference:?} cannot be uploaded"
            )))
        }
    };

    Ok(FormPart {
        name,
        content: PartContent::File { file_name, data },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::InlineKeyboardButton;
    use crate::methods::{SendMediaGroup, SendMessage, SendPhoto};
    use serde_json::json;
    use std::io::Write;

    fn text<'a>(parts: &'a [FormPart], name: &str) -> Option<&'a str> {
        parts.iter().find(|p| p.name == name).and_then(|p| match &p.content {
            PartContent::Text(t) => Some(t.as_str()),
            PartContent::File { .. } => None,
        })
    }

    #[tokio::test]
    async fn test_plain_command_is_json() {
        let cmd = SendMessage::new(42, "hello");
        let payload = encode(&cmd).await.unwrap();
        assert_eq!(payload, Payload::Json(json!({"chat_id": 42, "text": "hello"})));
    }

    #[tokio::test]
    async fn test_remote_file_stays_json() {
        let cmd = SendPhoto::new(42, InputFile::remote("AgACAgIAAx"));
        let payload = encode(&cmd).await.unwrap();
        assert_eq!(
            payload,
            Payload::Json(json!({"chat_id": 42, "photo": "AgACAgIAAx"}))
        );
    }

    #[tokio::test]
    async fn test_local_file_switches_to_multipart() {
        let cmd = SendPhoto::new(42, InputFile::memory("cat.jpg", vec![0xff, 0xd8]))
            .caption("cat")
            .reply_markup(InlineKeyboardButton::callback("Like", "like"));

        let payload = encode(&cmd).await.unwrap();
        assert_eq!(payload.kind(), ContentKind::Multipart);

        let Payload::Multipart(parts) = payload else {
            unreachable!()
        };
        assert_eq!(text(&parts, "chat_id"), Some("42"));
        assert_eq!(text(&parts, "caption"), Some("cat"));

        let markup: Value = serde_json::from_str(text(&parts, "reply_markup").unwrap()).unwrap();
        assert_eq!(markup["inline_keyboard"][0][0]["callback_data"], "like");

        let photo = parts.iter().find(|p| p.name == "photo").unwrap();
        assert_eq!(
            photo.content,
            PartContent::File {
                file_name: "cat.jpg".to_string(),
                data: vec![0xff, 0xd8]
            }
        );
    }

    #[tokio::test]
    async fn test_media_group_gets_unique_attach_pointers() {
        let mut files = Vec::new();
        for i in 0..3 {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            write!(file, "image-{i}").unwrap();
            files.push(file);
        }
        let media = files
            .iter()
            .map(|f| InputMedia::photo(InputFile::path(f.path())))
            .collect();

        let payload = encode(&SendMediaGroup::new(42, media)).await.unwrap();
        let Payload::Multipart(parts) = payload else {
            panic!("expected multipart");
        };

        let binaries: Vec<_> = parts
            .iter()
            .filter(|p| matches!(p.content, PartContent::File { .. }))
            .collect();
        assert_eq!(binaries.len(), 3);

        let media: Value = serde_json::from_str(text(&parts, "media").unwrap()).unwrap();
        let pointers: Vec<&str> = media
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["media"].as_str().unwrap())
            .collect();
        assert_eq!(pointers, vec!["attach://file0", "attach://file1", "attach://file2"]);
        assert_eq!(media[0]["type"], "photo");

        for (i, part) in binaries.iter().enumerate() {
            assert_eq!(part.name, format!("file{i}"));
            match &part.content {
                PartContent::File { data, .. } => {
                    assert_eq!(data, format!("image-{i}").as_bytes())
                }
                PartContent::Text(_) => unreachable!(),
            }
        }
    }

    #[tokio::test]
    async fn test_remote_album_stays_json() {
        let media = vec![
            InputMedia::photo(InputFile::remote("https://example.com/a.jpg")),
            InputMedia::photo(InputFile::remote("https://example.com/b.jpg")),
        ];
        let payload = encode(&SendMediaGroup::new(42, media)).await.unwrap();
        assert_eq!(
            payload,
            Payload::Json(json!({
                "chat_id": 42,
                "media": [
                    {"type": "photo", "media": "https://example.com/a.jpg"},
                    {"type": "photo", "media": "https://example.com/b.jpg"}
                ]
            }))
        );
    }

    #[tokio::test]
    async fn test_json_payload_decodes_back_to_the_command() {
        let cmd = SendMessage::new(-100123, "release notes")
            .parse_mode("HTML")
            .reply_to(12)
            .reply_markup(InlineKeyboardButton::url("Open", "https://example.com"));

        let Payload::Json(value) = encode(&cmd).await.unwrap() else {
            panic!("expected json");
        };
        let decoded: SendMessage = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, cmd);
    }

    #[tokio::test]
    async fn test_empty_optional_file_is_encoding_error() {
        let cmd = crate::methods::SendVideo {
            chat_id: 42.into(),
            video: InputFile::remote("BAACAgI"),
            thumb: Some(InputFile::default()),
            ..Default::default()
        };
        let err = encode(&cmd).await.unwrap_err();
        assert!(matches!(err, CourierError::Encoding(ref m) if m.contains("thumb")));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_encoding_error() {
        let cmd = SendPhoto::new(42, InputFile::path("/nonexistent/courier/cat.jpg"));
        let err = encode(&cmd).await.unwrap_err();
        assert!(matches!(err, CourierError::Encoding(_)));
    }
}
