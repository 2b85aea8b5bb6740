//! Paragraph layout.

use super::StyleKind;
use super::StyleParams;
use super::blocks::{BlockKind, classify, split_blocks};
use super::references::find_reference_section;

/// Separate blocks by exactly one blank line and indent body paragraphs.
///
/// A body paragraph loses the leading whitespace of its first line and
/// gets the style's paragraph indent instead. Headings, block quotes and
/// the reference section keep their layout.
pub fn format_paragraphs(text: &str, style: StyleKind) -> String {
    let params = style.params();
    let Some(section) = find_reference_section(text, params) else {
        return indent_blocks(text, params);
    };

    let parts = [
        indent_blocks(&text[..section.start], params),
        text[section.start..section.end].trim_end().to_string(),
        indent_blocks(&text[section.end..], params),
    ];
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn indent_blocks(text: &str, params: &StyleParams) -> String {
    let indent = " ".repeat(params.paragraph_indent);
    split_blocks(text)
        .into_iter()
        .map(|block| match classify(block, params) {
            BlockKind::Body => format!("{indent}{}", block.trim_start()),
            BlockKind::Heading | BlockKind::Quote => block.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indents_body_paragraphs() {
        let out = format_paragraphs("First one.\n\n\n\n  Second one.\nSame paragraph.", StyleKind::Apa);
        assert_eq!(out, "    First one.\n\n    Second one.\nSame paragraph.");
    }

    #[test]
    fn test_headings_and_quotes_are_kept() {
        let src = "# Intro\nBody text.\n\n> A quote.\n\n          Already indented.";
        assert_eq!(
            format_paragraphs(src, StyleKind::Mla),
            "# Intro\n\n    Body text.\n\n> A quote.\n\n          Already indented."
        );
    }

    #[test]
    fn test_reference_section_is_kept() {
        let src = "Body.\nReferences\nB entry.\n  continued.\nA entry.";
        assert_eq!(
            format_paragraphs(src, StyleKind::Apa),
            "    Body.\n\nReferences\nB entry.\n  continued.\nA entry."
        );
    }

    #[test]
    fn test_paragraph_after_references_is_indented() {
        let src = "Intro text.\n\nReferences\nSmith J 2001 Title\n\nMore text here.";
        assert_eq!(
            format_paragraphs(src, StyleKind::Apa),
            "    Intro text.\n\nReferences\nSmith J 2001 Title\n\n    More text here."
        );
    }

    #[test]
    fn test_title_like_line_stays_flush() {
        assert_eq!(
            format_paragraphs("Short line\n\nShort line.", StyleKind::Apa),
            "Short line\n\n    Short line."
        );
    }

    #[test]
    fn test_whitespace_only_paragraphs_dropped() {
        assert_eq!(format_paragraphs(" \n\n\t\n\nText.", StyleKind::Apa), "    Text.");
    }

    #[test]
    fn test_idempotent() {
        let src = "One.\n\n# Two\nThree.\n> four\n\nReferences\nX.";
        let once = format_paragraphs(src, StyleKind::Apa);
        assert_eq!(format_paragraphs(&once, StyleKind::Apa), once);
    }
}
