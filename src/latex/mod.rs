//! LaTeX import: normalization, segmentation and chapter assembly.
//!
//! Import runs in three phases:
//! 1. [`normalize`] unifies line endings and strips comments
//! 2. [`segment`] splits the source at `\chapter`, `\section` and `\part`
//! 3. Each segment's title and body go through [`crate::convert`], and the
//!    body is checked by the [`crate::density`] heuristic
//!
//! An [`Importer`] owns the identifier generator, so every chapter it emits
//! gets a fresh id, even when the same source is imported twice.

mod segment;

pub use segment::{Segment, segment};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::convert::convert;
use crate::density;
use crate::model::{Chapter, ChapterIdGenerator, ImportFile};

/// Title given to a document that has no sectioning markers.
pub const DEFAULT_TITLE: &str = "Imported Document";

/// Unify line endings and strip comments.
///
/// A comment runs from an unescaped `%` to the end of its line; the newline
/// itself is kept. `\%` is an escaped percent sign and survives, while `\\%`
/// is a line break followed by a comment.
pub fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut result = String::with_capacity(text.len());
    let mut backslashes = 0usize;
    let mut in_comment = false;

    for c in text.chars() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
                result.push(c);
            }
            continue;
        }
        match c {
            '%' if backslashes % 2 == 0 => in_comment = true,
            _ => result.push(c),
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
    }

    result
}

/// A converted chapter that has not been given an identifier yet.
struct Draft {
    title: String,
    content: String,
}

impl Draft {
    fn from_segment(seg: &Segment<'_>) -> Self {
        Self {
            title: convert(seg.title.unwrap_or(DEFAULT_TITLE)),
            content: density::mark(convert(seg.body)),
        }
    }
}

/// Convert one source string into drafts.
///
/// When `fallback_title` is given and the source has no markers, that title
/// replaces the default one.
fn draft_source(text: &str, fallback_title: Option<&str>) -> Vec<Draft> {
    let normalized = normalize(text);
    let segments = segment(&normalized);
    let untitled = matches!(segments.as_slice(), [Segment { title: None, .. }]);

    let mut drafts: Vec<Draft> = segments.iter().map(Draft::from_segment).collect();
    if untitled
        && let Some(title) = fallback_title
        && let Some(draft) = drafts.first_mut()
    {
        draft.title = title.to_string();
    }
    drafts
}

/// Strip a `.tex` extension, ignoring case.
fn file_stem(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(ext)) if !stem.is_empty() && ext.eq_ignore_ascii_case(".tex") => stem,
        _ => name,
    }
}

/// Converts LaTeX sources into chapters with process-unique identifiers.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    ids: ChapterIdGenerator,
}

impl Importer {
    /// Create an importer with a clock-seeded identifier generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer that draws identifiers from `ids`.
    pub fn with_generator(ids: ChapterIdGenerator) -> Self {
        Self { ids }
    }

    /// Import a single source string.
    ///
    /// Never fails: a source without markers becomes one chapter titled
    /// [`DEFAULT_TITLE`], and unrecognized markup degrades to plain text.
    pub fn import(&mut self, text: &str) -> Vec<Chapter> {
        let drafts = draft_source(text, None);
        self.finish(drafts)
    }

    /// Import an ordered batch of files.
    ///
    /// Chapters come out in file order, then source order. A file without
    /// sectioning markers is titled after its file name, minus `.tex`.
    pub fn import_batch(&mut self, files: &[ImportFile]) -> Vec<Chapter> {
        #[cfg(feature = "parallel")]
        let drafts: Vec<Vec<Draft>> = files
            .par_iter()
            .map(|f| draft_source(&f.text, Some(file_stem(&f.name))))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let drafts: Vec<Vec<Draft>> = files
            .iter()
            .map(|f| draft_source(&f.text, Some(file_stem(&f.name))))
            .collect();

        tracing::debug!(files = files.len(), "imported batch");
        self.finish(drafts.into_iter().flatten())
    }

    /// Assign identifiers in order.
    fn finish(&mut self, drafts: impl IntoIterator<Item = Draft>) -> Vec<Chapter> {
        drafts
            .into_iter()
            .map(|d| Chapter::new(self.ids.next_id(), d.title, d.content))
            .collect()
    }
}
