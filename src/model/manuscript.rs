//! The ordered chapter working set.

use crate::academic::{self, StyleKind};
use crate::error::{Error, Result};

use super::{Chapter, ChapterId, ChapterIdGenerator};

/// Ordered chapters of a manuscript, as an editing surface sees them.
///
/// A manuscript always keeps at least one chapter.
#[derive(Debug, Clone)]
pub struct Manuscript {
    chapters: Vec<Chapter>,
    ids: ChapterIdGenerator,
}

impl Manuscript {
    /// Create a manuscript holding a single empty "Introduction" chapter.
    pub fn new() -> Self {
        Self::with_generator(ChapterIdGenerator::new())
    }

    /// Create a manuscript whose manually added chapters draw identifiers
    /// from `ids`.
    pub fn with_generator(mut ids: ChapterIdGenerator) -> Self {
        let first = Chapter::new(ids.next_id(), "Introduction", "");
        Self {
            chapters: vec![first],
            ids,
        }
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn chapter(&self, id: &ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| &c.id == id)
    }

    fn chapter_mut(&mut self, id: &ChapterId) -> Result<&mut Chapter> {
        self.chapters
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| Error::ChapterNotFound(id.clone()))
    }

    /// Append an empty chapter titled "Chapter N".
    pub fn add_chapter(&mut self) -> &Chapter {
        let title = format!("Chapter {}", self.chapters.len() + 1);
        let chapter = Chapter::new(self.ids.next_id(), title, "");
        self.chapters.push(chapter);
        &self.chapters[self.chapters.len() - 1]
    }

    pub fn set_title(&mut self, id: &ChapterId, title: impl Into<String>) -> Result<()> {
        self.chapter_mut(id)?.title = title.into();
        Ok(())
    }

    pub fn set_content(&mut self, id: &ChapterId, content: impl Into<String>) -> Result<()> {
        self.chapter_mut(id)?.content = content.into();
        Ok(())
    }

    /// Delete a chapter. The last remaining chapter cannot be deleted.
    pub fn remove(&mut self, id: &ChapterId) -> Result<Chapter> {
        let index = self
            .chapters
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| Error::ChapterNotFound(id.clone()))?;
        if self.chapters.len() == 1 {
            return Err(Error::LastChapter);
        }
        Ok(self.chapters.remove(index))
    }

    /// Replace the working set with imported chapters.
    ///
    /// An empty import leaves the manuscript untouched and returns `false`.
    pub fn replace_with(&mut self, chapters: Vec<Chapter>) -> bool {
        if chapters.is_empty() {
            return false;
        }
        self.chapters = chapters;
        true
    }

    /// Append imported chapters after the existing ones.
    pub fn extend(&mut self, chapters: impl IntoIterator<Item = Chapter>) {
        self.chapters.extend(chapters);
    }

    /// Apply academic formatting to one chapter's content in place.
    pub fn format_chapter(&mut self, id: &ChapterId, style: StyleKind) -> Result<()> {
        academic::format_chapter(self.chapter_mut(id)?, style)
    }
}

impl Default for Manuscript {
    fn default() -> Self {
        Self::new()
    }
}
