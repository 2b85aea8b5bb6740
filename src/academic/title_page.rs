//! Plain-text title pages.

use chrono::NaiveDate;

use super::StyleKind;
use crate::error::{Error, Result};

/// Blank lines above an APA title.
const APA_TOP_MARGIN: usize = 5;

/// Blank lines between an APA title and the byline.
const APA_TITLE_GAP: usize = 3;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Render a title page.
///
/// APA centers everything below a top margin. MLA puts a left-aligned
/// header block above the centered title, with placeholders for the
/// instructor and course; `institution` is not part of an MLA header.
pub fn title_page(
    style: StyleKind,
    title: &str,
    author: &str,
    institution: &str,
    date: NaiveDate,
) -> String {
    let center = " ".repeat(style.params().heading_indent);
    let date = date.format("%B %-d, %Y");

    match style {
        StyleKind::Apa => format!(
            "{}{center}{title}{}{center}{author}\n{center}{institution}\n{center}{date}",
            "\n".repeat(APA_TOP_MARGIN),
            "\n".repeat(APA_TITLE_GAP + 1),
        ),
        StyleKind::Mla => {
            format!("{author}\nProfessor [Name]\n[Course]\n{date}\n\n{center}{title}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        parse_date("2024-03-07").unwrap()
    }

    #[test]
    fn test_apa_title_page() {
        let page = title_page(StyleKind::Apa, "On Things", "A. Writer", "State University", date());
        let pad = " ".repeat(32);
        assert_eq!(
            page,
            format!(
                "\n\n\n\n\n{pad}On Things\n\n\n\n{pad}A. Writer\n{pad}State University\n{pad}March 7, 2024"
            )
        );
    }

    #[test]
    fn test_mla_title_page() {
        let page = title_page(StyleKind::Mla, "On Things", "A. Writer", "State University", date());
        assert_eq!(
            page,
            format!(
                "A. Writer\nProfessor [Name]\n[Course]\nMarch 7, 2024\n\n{}On Things",
                " ".repeat(32)
            )
        );
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(parse_date("07/03/2024"), Err(Error::InvalidDate(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(Error::InvalidDate(_))));
    }
}
