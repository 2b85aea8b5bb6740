//! Paragraph-density heuristic.
//!
//! Converted text with almost no paragraph breaks but a lot of words is
//! probably one unbroken block that lost its structure. Such text is tagged
//! with a sentinel line so an editor can offer paragraph-break review.

use memchr::memmem;

/// Sentinel line prepended to content that needs paragraph-break review.
pub const SENTINEL: &str = "[NEEDS_PARAGRAPH_ANALYSIS]\n";

/// Fewer double line breaks than this count as "unbroken".
pub const MIN_PARAGRAPH_BREAKS: usize = 2;

/// More words than this make an unbroken text worth flagging.
pub const MAX_UNBROKEN_WORDS: usize = 200;

/// Count non-overlapping `\n\n` occurrences.
pub fn paragraph_breaks(text: &str) -> usize {
    memmem::find_iter(text.as_bytes(), b"\n\n").count()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether converted text should carry the sentinel.
pub fn needs_analysis(text: &str) -> bool {
    paragraph_breaks(text) < MIN_PARAGRAPH_BREAKS && word_count(text) > MAX_UNBROKEN_WORDS
}

/// Prepend the sentinel line when the text looks like one unbroken block.
///
/// Text that already carries the sentinel is returned unchanged.
pub fn mark(text: String) -> String {
    if has_sentinel(&text) || !needs_analysis(&text) {
        return text;
    }
    tracing::debug!(
        words = word_count(&text),
        "flagging unbroken text for paragraph analysis"
    );
    let mut marked = String::with_capacity(SENTINEL.len() + text.len());
    marked.push_str(SENTINEL);
    marked.push_str(&text);
    marked
}

pub fn has_sentinel(text: &str) -> bool {
    text.starts_with(SENTINEL)
}

/// Remove a leading sentinel line, if present.
pub fn strip_sentinel(text: &str) -> &str {
    text.strip_prefix(SENTINEL).unwrap_or(text)
}
