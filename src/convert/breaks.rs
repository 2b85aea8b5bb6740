//! Paragraph-break recovery (stages 5-9).
//!
//! LaTeX marks paragraphs with blank lines or `\par`, but manuscripts pasted
//! from word processors often rely on line breaks and prose cues instead.
//! These stages re-insert `\n\n` where a paragraph most likely starts, then
//! collapse blank-line runs so each break is exactly two newlines.

use super::patterns::{
    BLANK_LINES_RE, DIALOGUE_RE, PAR_RE, PARAGRAPH_RE, SENTENCE_BREAK_RE, SUBSECTION_RE,
    TRANSITION_RE,
};

/// Transition words and phrases that usually open a new paragraph.
pub const TRANSITION_PHRASES: &[&str] = &[
    "However",
    "Therefore",
    "Furthermore",
    "Moreover",
    "Additionally",
    "In contrast",
    "Meanwhile",
    "Subsequently",
    "Consequently",
    "Nevertheless",
    "Then",
    "Next",
    "Later",
    "Finally",
    "Suddenly",
    "But",
    "And then",
    "After that",
    "Soon",
    "Eventually",
    "At that moment",
];

/// Scene and time transitions common in fiction and memoir.
pub const SCENE_PHRASES: &[&str] = &[
    "The next day",
    "The following morning",
    "Years later",
    "Hours passed",
    "Meanwhile",
    "Back at",
    "Elsewhere",
    "At the same time",
];

/// Stage 5: `\par` and `\paragraph{...}` become a paragraph break.
///
/// Subsection titles are kept as a paragraph of their own; the segmenter
/// only splits on chapter, section and part.
pub fn paragraph_commands(text: &str) -> String {
    let text = PAR_RE.replace_all(text, "\n\n");
    let text = PARAGRAPH_RE.replace_all(&text, "\n\n");
    SUBSECTION_RE
        .replace_all(&text, "\n\n$1\n\n")
        .into_owned()
}

/// Stage 6: a sentence ending at a source line break, followed by a
/// capitalized line, starts a new paragraph.
///
/// A space between sentences on the same line is not a break.
pub fn sentence_breaks(text: &str) -> String {
    SENTENCE_BREAK_RE
        .replace_all(text, "$1\n\n$2")
        .into_owned()
}

/// Stage 7: break before a transition phrase that follows sentence punctuation.
pub fn transition_breaks(text: &str) -> String {
    TRANSITION_RE.replace_all(text, "$1\n\n$2 ").into_owned()
}

/// Stage 8: adjacent quotations opening capitalized speech are separate turns.
pub fn dialogue_breaks(text: &str) -> String {
    DIALOGUE_RE
        .replace_all(text, "\"\n\n\"$1")
        .into_owned()
}

/// Stage 9: runs of blank lines collapse to exactly one.
///
/// Must run after stages 6-8 so their inserted breaks survive as-is.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES_RE.replace_all(text, "\n\n").into_owned()
}
