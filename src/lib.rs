//! # folio
//!
//! Turns LaTeX manuscripts into plain-text chapters and lays those chapters
//! out for APA or MLA.
//!
//! ## Features
//!
//! - Split LaTeX sources into chapters at `\chapter`, `\section` and `\part`
//! - Strip markup while keeping paragraphs, quotations, lists and footnotes
//! - Flag converted text that lost its paragraph structure
//! - Reformat citations, headings, block quotes and reference lists
//! - Audit a chapter against a style without changing it
//!
//! ## Quick Start
//!
//! ```
//! use folio::{Importer, StyleKind, format_document};
//!
//! let mut importer = Importer::new();
//! let chapters = importer.import(
//!     "\\chapter{Intro}Hello world. \\textbf{Bold} text.\\chapter{Two}More.",
//! );
//! assert_eq!(chapters.len(), 2);
//! assert_eq!(chapters[0].content, "Hello world. Bold text.");
//!
//! let formatted = format_document("The (Smith,2001) theory", StyleKind::Apa);
//! assert_eq!(formatted, "The (Smith, 2001) theory");
//! ```
//!
//! ## Working with a Manuscript
//!
//! [`Manuscript`] is the ordered chapter list an editor works on:
//!
//! ```
//! use folio::{Manuscript, StyleKind};
//!
//! let mut manuscript = Manuscript::new();
//! let id = manuscript.add_chapter().id.clone();
//! manuscript.set_content(&id, "A first paragraph.").unwrap();
//! manuscript.format_chapter(&id, StyleKind::Mla).unwrap();
//! assert_eq!(manuscript.chapter(&id).unwrap().content, "    A first paragraph.");
//! ```

pub mod academic;
pub mod convert;
pub mod density;
pub mod error;
pub mod latex;
pub mod model;
pub(crate) mod util;

pub use academic::{FormatIssue, StyleKind, StyleParams, audit, format_chapter, format_document};
pub use convert::{Stage, convert};
pub use error::{Error, Result};
pub use latex::{DEFAULT_TITLE, Importer};
pub use model::{Chapter, ChapterId, ChapterIdGenerator, ImportFile, Manuscript};
