use courier_core::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

use super::{collect_files, Command, FileField};
use crate::input::InputFile;
use crate::types::{File, MaskPosition, StickerSet};
use crate::validate::{self, Required};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetStickerSet {
    pub name: String,
}

impl Command for GetStickerSet {
    const METHOD: &'static str = "getStickerSet";
    type Output = StickerSet;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("name", &self.name)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadStickerFile {
    pub user_id: i64,
    #[serde(skip)]
    pub png_sticker: InputFile,
}

impl Command for UploadStickerFile {
    const METHOD: &'static str = "uploadStickerFile";
    type Output = File;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("user_id", &self.user_id),
            Required::new("png_sticker", &self.png_sticker),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        vec![FileField::new("png_sticker", &self.png_sticker)]
    }
}

/// Exactly one of the static (`png_sticker`) or animated (`tgs_sticker`) forms is expected.
fn sticker_file(png: &Option<InputFile>, tgs: &Option<InputFile>) -> Result<()> {
    let present = |file: &Option<InputFile>| file.as_ref().is_some_and(|f| !f.is_empty());
    match (present(png), present(tgs)) {
        (true, true) => Err(ValidationError::Exclusive {
            first: "png_sticker",
            second: "tgs_sticker",
        }
        .into()),
        (false, false) => Err(ValidationError::Missing {
            field: "png_sticker",
        }
        .into()),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateNewStickerSet {
    pub user_id: i64,
    /// Must end in `_by_<bot username>`.
    pub name: String,
    pub title: String,
    #[serde(skip)]
    pub png_sticker: Option<InputFile>,
    #[serde(skip)]
    pub tgs_sticker: Option<InputFile>,
    pub emojis: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub contains_masks: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
}

impl Command for CreateNewStickerSet {
    const METHOD: &'static str = "createNewStickerSet";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("user_id", &self.user_id),
            Required::new("name", &self.name),
            Required::new("title", &self.title),
            Required::new("emojis", &self.emojis),
        ]
    }

    fn check(&self) -> Result<()> {
        validate::required(&self.required())?;
        sticker_file(&self.png_sticker, &self.tgs_sticker)
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([
            ("png_sticker", self.png_sticker.as_ref()),
            ("tgs_sticker", self.tgs_sticker.as_ref()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddStickerToSet {
    pub user_id: i64,
    pub name: String,
    #[serde(skip)]
    pub png_sticker: Option<InputFile>,
    #[serde(skip)]
    pub tgs_sticker: Option<InputFile>,
    pub emojis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
}

impl Command for AddStickerToSet {
    const METHOD: &'static str = "addStickerToSet";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("user_id", &self.user_id),
            Required::new("name", &self.name),
            Required::new("emojis", &self.emojis),
        ]
    }

    fn check(&self) -> Result<()> {
        validate::required(&self.required())?;
        sticker_file(&self.png_sticker, &self.tgs_sticker)
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([
            ("png_sticker", self.png_sticker.as_ref()),
            ("tgs_sticker", self.tgs_sticker.as_ref()),
        ])
    }
}

/// `position` is zero-based and always sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetStickerPositionInSet {
    pub sticker: String,
    pub position: i64,
}

impl Command for SetStickerPositionInSet {
    const METHOD: &'static str = "setStickerPositionInSet";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("sticker", &self.sticker)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteStickerFromSet {
    pub sticker: String,
}

impl Command for DeleteStickerFromSet {
    const METHOD: &'static str = "deleteStickerFromSet";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![Required::new("sticker", &self.sticker)]
    }
}

/// Without a `thumb` the first sticker becomes the thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetStickerSetThumb {
    pub name: String,
    pub user_id: i64,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
}

impl Command for SetStickerSetThumb {
    const METHOD: &'static str = "setStickerSetThumb";
    type Output = bool;

    fn required(&self) -> Vec<Required> {
        vec![
            Required::new("name", &self.name),
            Required::new("user_id", &self.user_id),
        ]
    }

    fn files(&self) -> Vec<FileField<'_>> {
        collect_files([("thumb", self.thumb.as_ref())])
    }
}
