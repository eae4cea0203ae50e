use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::MessageEntity;

/// A file-bearing field.
///
/// `Remote` references a file already on the platform (a `file_id`) or an HTTP URL
/// the platform fetches itself. `Path` and `Memory` are uploaded in a multipart body;
/// a path is opened and read once while the payload is encoded, never retained.
#[derive(Debug, Clone, PartialEq)]
pub enum InputFile {
    Remote(String),
    Path(PathBuf),
    Memory { file_name: String, data: Vec<u8> },
}

impl InputFile {
    pub fn remote(reference: impl Into<String>) -> Self {
        Self::Remote(reference.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn memory(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Memory {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// True when the field forces a multipart upload.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Remote(_))
    }

    /// The zero value: nothing to reference and nothing to upload.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Remote(reference) => reference.is_empty(),
            Self::Path(path) => path.as_os_str().is_empty(),
            Self::Memory { data, .. } => data.is_empty(),
        }
    }
}

impl Default for InputFile {
    fn default() -> Self {
        Self::Remote(String::new())
    }
}

/// One element of an album or the replacement in `editMessageMedia`.
///
/// File fields are excluded from serde; the encoder writes them in, either as the
/// remote reference or as an `attach://<name>` pointer to a binary part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    pub fn photo(media: InputFile) -> Self {
        Self::Photo(InputMediaPhoto {
            media,
            ..Default::default()
        })
    }

    pub fn video(media: InputFile) -> Self {
        Self::Video(InputMediaVideo {
            media,
            ..Default::default()
        })
    }

    pub fn audio(media: InputFile) -> Self {
        Self::Audio(InputMediaAudio {
            media,
            ..Default::default()
        })
    }

    pub fn document(media: InputFile) -> Self {
        Self::Document(InputMediaDocument {
            media,
            ..Default::default()
        })
    }

    pub fn media(&self) -> &InputFile {
        match self {
            Self::Photo(m) => &m.media,
            Self::Video(m) => &m.media,
            Self::Audio(m) => &m.media,
            Self::Document(m) => &m.media,
        }
    }

    /// File fields keyed by their wire name.
    pub fn files(&self) -> Vec<(&'static str, &InputFile)> {
        let thumb = match self {
            Self::Photo(_) => None,
            Self::Video(m) => m.thumb.as_ref(),
            Self::Audio(m) => m.thumb.as_ref(),
            Self::Document(m) => m.thumb.as_ref(),
        };
        let mut files = vec![("media", self.media())];
        if let Some(thumb) = thumb {
            files.push(("thumb", thumb));
        }
        files
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputMediaPhoto {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputMediaVideo {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "crate::methods::is_zero")]
    pub width: i64,
    #[serde(skip_serializing_if = "crate::methods::is_zero")]
    pub height: i64,
    #[serde(skip_serializing_if = "crate::methods::is_zero")]
    pub duration: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub supports_streaming: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputMediaAudio {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    #[serde(skip_serializing_if = "crate::methods::is_zero")]
    pub duration: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub performer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputMediaDocument {
    #[serde(skip)]
    pub media: InputFile,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,
    /// Always true for documents sent as part of an album.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_content_type_detection: bool,
}
