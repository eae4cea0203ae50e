//! Command records, one struct per remote operation.
//!
//! Every record is plain data. Its `Command` impl names the operation, the result
//! shape, the required fields and the file-bearing fields; `dispatch` does the rest.

mod chat;
mod editing;
mod members;
mod messages;
mod settings;
mod stickers;

pub use chat::*;
pub use editing::*;
pub use members::*;
pub use messages::*;
pub use settings::*;
pub use stickers::*;

use courier_core::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::input::{InputFile, InputMedia};
use crate::validate::{self, Required};

pub trait Command: Serialize + Sync {
    /// Wire name of the operation, the last path segment of the request URL.
    const METHOD: &'static str;
    /// Shape the envelope's `result` is decoded into.
    type Output: DeserializeOwned + Send;

    fn required(&self) -> Vec<Required> {
        Vec::new()
    }

    /// Pre-flight validation. Runs before anything is encoded or sent.
    fn check(&self) -> Result<()> {
        validate::required(&self.required())?;
        Ok(())
    }

    /// Top-level file fields. These are `#[serde(skip)]` on the record itself.
    fn files(&self) -> Vec<FileField<'_>> {
        Vec::new()
    }

    /// Nested media descriptors whose files may need `attach://` pointers.
    fn media(&self) -> Vec<MediaField<'_>> {
        Vec::new()
    }

    /// Per-operation post-processing of a decoded result.
    fn finish(_output: &mut Self::Output) {}
}

#[derive(Debug, Clone, Copy)]
pub struct FileField<'a> {
    pub name: &'static str,
    pub file: &'a InputFile,
}

impl<'a> FileField<'a> {
    pub fn new(name: &'static str, file: &'a InputFile) -> Self {
        Self { name, file }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MediaField<'a> {
    One(&'static str, &'a InputMedia),
    Many(&'static str, &'a [InputMedia]),
}

/// Delivery flags shared by the `send*` family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub protect_content: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub reply_to_message_id: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub allow_sending_without_reply: bool,
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

pub(crate) fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}

/// Files of a record whose optional file fields may be unset.
pub(crate) fn collect_files<'a>(
    fields: impl IntoIterator<Item = (&'static str, Option<&'a InputFile>)>,
) -> Vec<FileField<'a>> {
    fields
        .into_iter()
        .filter_map(|(name, file)| file.map(|file| FileField::new(name, file)))
        .collect()
}
