//! Error types for folio operations.

use thiserror::Error;

use crate::model::ChapterId;

/// Errors that can occur while importing, editing, or formatting a manuscript.
///
/// None of these are raised for malformed markup: conversion always degrades
/// to best-effort passthrough. They cover caller misuse and I/O at the edges.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown style: {0} (expected APA or MLA)")]
    UnknownStyle(String),

    #[error("Chapter {0} has no content to format")]
    EmptyChapter(ChapterId),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(ChapterId),

    #[error("A manuscript must keep at least one chapter")]
    LastChapter,

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
