//! Read-only format checks.

use std::fmt;
use std::sync::LazyLock;

use memchr::memmem;
use regex_lite::Regex;

use super::blocks::{BlockKind, PARENTHETICAL_RE, classify, indent_width, split_blocks};
use super::citations::format_citations;
use super::references::{ReferenceSection, find_reference_section};
use super::{StyleKind, StyleParams};
use crate::density;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

static APA_CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\((?:[^()0-9,\s]+(?: [^()0-9,\s]+)*, )?\d{4}(?:, pp?\. \d+(?:-\d+)?)?\)$")
        .unwrap()
});

static MLA_CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([^()0-9,\s]+(?: [^()0-9,\s]+)* \d+(?:-\d+)?\)$").unwrap()
});

/// An author-page citation without a year.
static MLA_CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()0-9,\s][^()0-9,]*\s\d+(?:-\d+)?\)").unwrap());

const PREVIEW_CHARS: usize = 40;

/// One deviation from the active style.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct FormatIssue {
    pub description: String,
    pub suggested_fix: Option<String>,
}

impl FormatIssue {
    fn new(description: impl Into<String>, suggested_fix: Option<String>) -> Self {
        Self {
            description: description.into(),
            suggested_fix,
        }
    }
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suggested_fix {
            Some(fix) => write!(f, "{} (suggested: {fix:?})", self.description),
            None => f.write_str(&self.description),
        }
    }
}

/// Check a document against a style without changing it.
///
/// Issues come back in check order: tabs, line breaks, paragraph indents,
/// citation shapes, then the reference section. A leading sentinel line is
/// ignored. Blank input has no issues.
pub fn audit(text: &str, style: StyleKind) -> Vec<FormatIssue> {
    let text = density::strip_sentinel(text);
    if text.trim().is_empty() {
        return Vec::new();
    }

    let params = style.params();
    let section = find_reference_section(text, params);
    let mut issues = Vec::new();

    if text.contains('\t') {
        issues.push(FormatIssue::new("Use spaces instead of tabs", None));
    }
    if memmem::find(text.as_bytes(), b"\n\n\n\n").is_some() {
        issues.push(FormatIssue::new("Excessive line breaks found", None));
    }
    check_indents(text, section, params, &mut issues);
    check_citations(text, section, style, &mut issues);

    if section.is_none() && has_citation(text, style) {
        issues.push(FormatIssue::new(
            format!(
                "Document appears to have citations but no {} section",
                params.preferred_heading
            ),
            Some(params.preferred_heading.to_string()),
        ));
    }

    tracing::debug!(%style, issues = issues.len(), "audited document");
    issues
}

/// Text outside the reference section.
fn outside(text: &str, section: Option<ReferenceSection>) -> [&str; 2] {
    match section {
        Some(s) => [&text[..s.start], &text[s.end..]],
        None => [text, ""],
    }
}

fn preview(line: &str) -> String {
    let mut preview: String = line.chars().take(PREVIEW_CHARS).collect();
    if line.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

fn check_indents(
    text: &str,
    section: Option<ReferenceSection>,
    params: &StyleParams,
    issues: &mut Vec<FormatIssue>,
) {
    let indent = " ".repeat(params.paragraph_indent);
    let blocks = outside(text, section)
        .into_iter()
        .flat_map(split_blocks)
        .filter(|b| classify(b, params) == BlockKind::Body);

    for block in blocks {
        let first_line = block.lines().next().unwrap_or_default();
        if first_line.starts_with(&indent) && indent_width(first_line) == params.paragraph_indent {
            continue;
        }
        let body = first_line.trim_start();
        issues.push(FormatIssue::new(
            format!(
                "Paragraph is not indented by {} spaces: \"{}\"",
                params.paragraph_indent,
                preview(body)
            ),
            Some(format!("{indent}{body}")),
        ));
    }
}

fn check_citations(
    text: &str,
    section: Option<ReferenceSection>,
    style: StyleKind,
    issues: &mut Vec<FormatIssue>,
) {
    let canonical: &Regex = match style {
        StyleKind::Apa => &APA_CANONICAL_RE,
        StyleKind::Mla => &MLA_CANONICAL_RE,
    };

    for m in PARENTHETICAL_RE.find_iter(text) {
        if section.is_some_and(|s| s.contains(m.start())) {
            continue;
        }
        let citation = m.as_str();
        if !YEAR_RE.is_match(citation) || canonical.is_match(citation) {
            continue;
        }
        let fixed = format_citations(citation, style);
        issues.push(FormatIssue::new(
            format!("Citation {citation} does not follow {style} format"),
            (fixed != citation).then_some(fixed),
        ));
    }
}

fn has_citation(text: &str, style: StyleKind) -> bool {
    PARENTHETICAL_RE
        .find_iter(text)
        .any(|m| YEAR_RE.is_match(m.as_str()))
        || (style == StyleKind::Mla && MLA_CITATION_RE.is_match(text))
}
