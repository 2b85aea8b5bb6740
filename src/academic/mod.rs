//! Academic structural formatting for APA and MLA.
//!
//! Formatting only moves whitespace and punctuation around: the words of
//! the text are never changed, only where they sit. The document pipeline
//! runs these steps in order:
//!
//! 1. **Paragraphs** - one blank line between blocks, body paragraphs get a first-line indent
//! 2. **Headings** - `#` markers are removed, top-level headings are centered
//! 3. **Citations** - parenthetical citations are rewritten to the style's shape
//! 4. **Quotes** - `>` lines become indented block quotes
//! 5. **References** - the reference list is sorted and given hanging indents
//!
//! Every step is idempotent on its own, and so is the whole pipeline.
//! [`audit`] runs the same classification without changing anything.

mod audit;
mod blocks;
mod citations;
mod headings;
mod paragraphs;
mod quotes;
mod references;
mod title_page;

pub use audit::{FormatIssue, audit};
pub use citations::format_citations;
pub use headings::format_headings;
pub use paragraphs::format_paragraphs;
pub use quotes::format_quotes;
pub use references::{ReferenceSection, find_reference_section, format_references};
pub use title_page::{parse_date, title_page};

use std::fmt;
use std::str::FromStr;

use crate::density;
use crate::error::{Error, Result};
use crate::model::Chapter;

/// Heading labels that open a reference list, matched case-insensitively.
pub const REFERENCE_HEADINGS: [&str; 3] = ["References", "Bibliography", "Works Cited"];

/// Supported citation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub enum StyleKind {
    #[default]
    Apa,
    Mla,
}

/// Layout parameters of a style. All widths are in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleParams {
    /// First-line indent of a body paragraph.
    pub paragraph_indent: usize,
    /// Indent of a block quote. Blocks indented this far are left alone.
    pub block_quote_indent: usize,
    /// Leading indent approximating a centered heading.
    pub heading_indent: usize,
    /// Indent of reference-entry continuation lines.
    pub hanging_indent: usize,
    /// Wrap width of reference entries.
    pub reference_width: usize,
    pub reference_headings: &'static [&'static str],
    /// Heading suggested when a reference section is missing.
    pub preferred_heading: &'static str,
}

const APA_PARAMS: StyleParams = StyleParams {
    paragraph_indent: 4,
    block_quote_indent: 8,
    heading_indent: 32,
    hanging_indent: 4,
    reference_width: 72,
    reference_headings: &REFERENCE_HEADINGS,
    preferred_heading: "References",
};

const MLA_PARAMS: StyleParams = StyleParams {
    preferred_heading: "Works Cited",
    ..APA_PARAMS
};

impl StyleKind {
    pub fn params(self) -> &'static StyleParams {
        match self {
            StyleKind::Apa => &APA_PARAMS,
            StyleKind::Mla => &MLA_PARAMS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Apa => "APA",
            StyleKind::Mla => "MLA",
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("apa") {
            Ok(StyleKind::Apa)
        } else if s.eq_ignore_ascii_case("mla") {
            Ok(StyleKind::Mla)
        } else {
            Err(Error::UnknownStyle(s.to_string()))
        }
    }
}

/// Run the full formatting pipeline over a document.
///
/// A leading paragraph-analysis sentinel is removed first and does not
/// reappear in the output.
pub fn format_document(text: &str, style: StyleKind) -> String {
    let text = density::strip_sentinel(text).replace("\r\n", "\n");
    let text = format_paragraphs(&text, style);
    let text = format_headings(&text, style);
    let text = format_citations(&text, style);
    let text = format_quotes(&text, style);
    let text = format_references(&text, style);
    tracing::debug!(%style, len = text.len(), "formatted document");
    text
}

/// Format a chapter's content in place.
///
/// Blank chapters are reported as [`Error::EmptyChapter`] and left as they
/// are.
pub fn format_chapter(chapter: &mut Chapter, style: StyleKind) -> Result<()> {
    if chapter.is_blank() {
        return Err(Error::EmptyChapter(chapter.id.clone()));
    }
    chapter.content = format_document(&chapter.content, style);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::SENTINEL;
    use crate::model::ChapterId;
    use proptest::prelude::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("apa".parse::<StyleKind>().unwrap(), StyleKind::Apa);
        assert_eq!(" MLA ".parse::<StyleKind>().unwrap(), StyleKind::Mla);
        assert!(matches!(
            "chicago".parse::<StyleKind>(),
            Err(Error::UnknownStyle(s)) if s == "chicago"
        ));
    }

    #[test]
    fn test_params_differ_only_in_heading() {
        let apa = StyleKind::Apa.params();
        let mla = StyleKind::Mla.params();
        assert_eq!(apa.preferred_heading, "References");
        assert_eq!(mla.preferred_heading, "Works Cited");
        assert_eq!(apa.paragraph_indent, mla.paragraph_indent);
    }

    #[test]
    fn test_citation_example() {
        assert_eq!(
            format_document("The (Smith,2001) theory", StyleKind::Apa),
            "The (Smith, 2001) theory"
        );
    }

    #[test]
    fn test_sentinel_is_stripped() {
        let text = format!("{SENTINEL}One paragraph.");
        assert_eq!(format_document(&text, StyleKind::Apa), "    One paragraph.");
    }

    #[test]
    fn test_full_document() {
        let src = "# Method Overview\n\
                   Participants were tested (Lee ,2019 , p.4).\n\
                   \n\
                   > Quoted material here.\n\
                   \n\
                   References\n\
                   Zeller, A. (2001). Later work.\n\
                   Adams, B. (1999). Earlier work.";
        let expected = format!(
            "{}Method Overview\n\n    Participants were tested (Lee, 2019, p. 4).\n\n{}Quoted material here.\n\nReferences\n\nAdams, B. (1999). Earlier work.\nZeller, A. (2001). Later work.",
            " ".repeat(32),
            " ".repeat(8)
        );
        assert_eq!(format_document(src, StyleKind::Apa), expected);
    }

    #[test]
    fn test_text_after_references_stays_body() {
        let src = "Intro text.\n\nReferences\nSmith J 2001 Title\n\nMore text here.";
        let expected = "    Intro text.\n\nReferences\n\nSmith J 2001 Title\n\n    More text here.";
        let once = format_document(src, StyleKind::Apa);
        assert_eq!(once, expected);
        assert_eq!(format_document(&once, StyleKind::Apa), once);
    }

    #[test]
    fn test_format_chapter_rejects_blank() {
        let mut chapter = Chapter::new(ChapterId::from("c"), "T", "   ");
        assert!(matches!(
            format_chapter(&mut chapter, StyleKind::Mla),
            Err(Error::EmptyChapter(id)) if id.as_str() == "c"
        ));
        assert_eq!(chapter.content, "   ");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(format_document("", StyleKind::Apa), "");
        assert_eq!(format_document("\n\n  \n", StyleKind::Mla), "");
    }

    fn sentence() -> impl Strategy<Value = String> {
        (
            "[A-Z][a-z]{1,7}",
            prop::collection::vec("[a-z]{1,7}", 1..8),
            prop::option::of((
                "[A-Z][a-z]{2,7}",
                1900u32..2030,
                prop::option::of(1u32..400),
            )),
        )
            .prop_map(|(first, rest, cite)| {
                let mut s = format!("{first} {}", rest.join(" "));
                if let Some((name, year, page)) = cite {
                    match page {
                        Some(p) => s.push_str(&format!(" ({name} ,{year},p.{p})")),
                        None => s.push_str(&format!(" ( {name},{year})")),
                    }
                }
                s.push('.');
                s
            })
    }

    fn block() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => prop::collection::vec(sentence(), 1..4).prop_map(|s| s.join(" ")),
            1 => "[A-Z][a-z]{2,8}( [A-Z][a-z]{2,8}){0,2}".prop_map(|h| format!("# {h}")),
            1 => "[A-Z][a-z]{2,8}".prop_map(|h| format!("## {h}")),
            1 => sentence().prop_map(|s| format!("> {s}")),
        ]
    }

    fn entry() -> impl Strategy<Value = String> {
        (
            "[A-Z][a-z]{2,8}",
            "[A-Z]",
            1900u32..2030,
            prop::collection::vec("[a-z]{1,9}", 1..16),
        )
            .prop_map(|(name, initial, year, title)| {
                format!("{name}, {initial}. ({year}). {}.", title.join(" "))
            })
    }

    fn document() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(block(), 0..6),
            prop::option::of(prop::collection::vec(entry(), 1..5)),
        )
            .prop_map(|(blocks, refs)| {
                let mut doc = blocks.join("\n\n");
                if let Some(refs) = refs {
                    doc.push_str("\n\nReferences\n");
                    doc.push_str(&refs.join("\n"));
                }
                doc
            })
    }

    fn alphabetic_words(text: &str) -> Vec<String> {
        let mut words: Vec<String> = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        words.sort();
        words
    }

    proptest! {
        #[test]
        fn prop_format_is_idempotent(doc in document()) {
            for style in [StyleKind::Apa, StyleKind::Mla] {
                let once = format_document(&doc, style);
                let twice = format_document(&once, style);
                prop_assert_eq!(&twice, &once);
            }
        }

        #[test]
        fn prop_format_preserves_words(doc in document()) {
            let formatted = format_document(&doc, StyleKind::Apa);
            prop_assert_eq!(alphabetic_words(&formatted), alphabetic_words(&doc));
        }
    }
}
