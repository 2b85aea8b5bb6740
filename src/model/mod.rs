//! Core data model for manuscript processing.
//!
//! This module contains:
//! - Chapter records and their opaque identifiers
//! - The identifier generator owned by importers and manuscripts
//! - Import batch entries (filename + raw text)
//! - The ordered chapter working set driven by an editing surface

mod chapter;
mod id;
mod manuscript;

pub use chapter::{Chapter, ImportFile};
pub use id::{ChapterId, ChapterIdGenerator};
pub use manuscript::Manuscript;
