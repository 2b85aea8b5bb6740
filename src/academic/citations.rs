//! Parenthetical citations.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use super::StyleKind;

/// `(Name, Year[, p./pp. N[-M]])` with loose spacing. The comma between
/// name and year is required; the name holds no digits or commas.
static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\(\s*([^()0-9,\n]*[^()0-9,\s])\s*,\s*(\d{4})(?:\s*,?\s*(pp?)\s*\.?\s*(\d+)(?:\s*[-–]\s*(\d+))?)?\s*\)",
    )
    .unwrap()
});

/// Rewrite citations to the style's canonical shape.
///
/// - APA: `(Name, Year)`, `(Name, Year, p. N)`, `(Name, Year, pp. N-M)`
/// - MLA: `(Name N)`, `(Name N-M)`, or `(Name)` without a page
pub fn format_citations(text: &str, style: StyleKind) -> String {
    CITATION_RE
        .replace_all(text, |caps: &Captures| rewrite(caps, style))
        .into_owned()
}

fn rewrite(caps: &Captures, style: StyleKind) -> String {
    let name = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
    let year = &caps[2];
    let pages = caps.get(4).map(|first| match caps.get(5) {
        Some(last) => format!("{}-{}", first.as_str(), last.as_str()),
        None => first.as_str().to_string(),
    });

    match (style, pages) {
        (StyleKind::Apa, Some(pages)) => {
            let token = caps.get(3).map_or("p", |m| m.as_str());
            format!("({name}, {year}, {token}. {pages})")
        }
        (StyleKind::Apa, None) => format!("({name}, {year})"),
        (StyleKind::Mla, Some(pages)) => format!("({name} {pages})"),
        (StyleKind::Mla, None) => format!("({name})"),
    }
}
