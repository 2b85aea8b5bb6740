use std::fs;
use std::path::Path;

use crate::density;
use crate::error::Result;
use crate::util::{decode_text, extract_inputenc_encoding};

use super::ChapterId;

/// A titled unit of plain text.
///
/// `content` carries no markup syntax. It may start with the
/// paragraph-analysis sentinel line; use [`Chapter::clean_content`] to read
/// it without the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    pub content: String,
}

impl Chapter {
    pub fn new(id: ChapterId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Content with any leading sentinel marker removed.
    pub fn clean_content(&self) -> &str {
        density::strip_sentinel(&self.content)
    }

    /// Whether the converter flagged this chapter as one unbroken block.
    pub fn needs_paragraph_analysis(&self) -> bool {
        density::has_sentinel(&self.content)
    }

    /// Whether the chapter has no meaningful content.
    pub fn is_blank(&self) -> bool {
        self.clean_content().trim().is_empty()
    }
}

/// One entry of an import batch: a file name and its raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFile {
    pub name: String,
    pub text: String,
}

impl ImportFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a source file from disk.
    ///
    /// Bytes are decoded as UTF-8 when valid, otherwise with the encoding
    /// named by an `inputenc` declaration, falling back to Windows-1252.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = decode_text(&bytes, extract_inputenc_encoding(&bytes)).into_owned();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, text })
    }
}
