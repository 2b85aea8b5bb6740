//! Block splitting and classification shared by the formatter and auditor.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::StyleParams;

/// A line break followed by one or more blank lines.
static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());

/// A parenthetical without nesting.
pub(crate) static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").unwrap());

/// Longer single lines are prose, not headings.
const MAX_HEADING_WORDS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    /// A `#` marker line, a centered line, or a short title-like line.
    Heading,
    /// A `>` quote or a block already indented as one.
    Quote,
    /// An ordinary paragraph.
    Body,
}

/// Columns of leading whitespace. Tabs count as four.
pub(crate) fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| matches!(c, ' ' | '\t'))
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

/// Whether a line carries a heading marker.
pub(crate) fn is_marker_line(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Whether a line reads like a heading rather than prose.
///
/// It must start with a capital or a digit, must not end in sentence or
/// clause punctuation, and must be short. Parentheticals do not count
/// toward the length, so citation rewriting never changes the answer.
pub(crate) fn is_heading_like(line: &str) -> bool {
    let trimmed = line.trim();
    let (Some(first), Some(last)) = (trimmed.chars().next(), trimmed.chars().next_back()) else {
        return false;
    };
    if !(first.is_uppercase() || first.is_ascii_digit()) {
        return false;
    }
    if matches!(last, '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'') {
        return false;
    }
    let words = PARENTHETICAL_RE
        .replace_all(trimmed, " ")
        .split_whitespace()
        .count();
    words <= MAX_HEADING_WORDS
}

/// Split text into blocks at blank lines.
///
/// Marker lines are split off into blocks of their own. Every block starts
/// at the beginning of its first non-blank line and has no trailing
/// whitespace; whitespace-only blocks are dropped.
pub(crate) fn split_blocks(text: &str) -> Vec<&str> {
    BLANK_LINE_RE
        .split(text)
        .flat_map(split_marker_lines)
        .map(trim_blank_lines)
        .filter(|b| !b.is_empty())
        .collect()
}

fn split_marker_lines(block: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        if is_marker_line(line) {
            parts.push(&block[start..offset]);
            parts.push(&block[offset..offset + line.len()]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    parts.push(&block[start..]);
    parts
}

fn trim_blank_lines(block: &str) -> &str {
    let Some(first) = block.find(|c: char| !c.is_whitespace()) else {
        return "";
    };
    let line_start = block[..first].rfind('\n').map_or(0, |i| i + 1);
    block[line_start..].trim_end()
}

/// Classify a block by its first line.
///
/// A single short line without closing punctuation counts as a heading even
/// without a `#` marker. Deeper headings lose their marker when formatted,
/// and this keeps them flush on the next run. The cost is that a one-line
/// paragraph such as `Hello world` is neither indented nor flagged.
pub(crate) fn classify(block: &str, params: &StyleParams) -> BlockKind {
    let first_line = block.lines().next().unwrap_or_default();
    let indent = indent_width(first_line);

    if is_marker_line(first_line) || indent >= params.heading_indent {
        BlockKind::Heading
    } else if first_line.trim_start().starts_with('>') || indent >= params.block_quote_indent {
        BlockKind::Quote
    } else if !block.contains('\n') && is_heading_like(block) {
        BlockKind::Heading
    } else {
        BlockKind::Body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::academic::StyleKind;

    #[test]
    fn test_heading_like() {
        assert!(is_heading_like("Results and Discussion"));
        assert!(is_heading_like("2 Method"));
        assert!(is_heading_like("The (Smith,2001) theory"));
        assert!(!is_heading_like("It was late."));
        assert!(!is_heading_like("lowercase start"));
        assert!(!is_heading_like(""));
        assert!(!is_heading_like(
            "One two three four five six seven eight nine ten eleven twelve thirteen"
        ));
    }

    #[test]
    fn test_split_blocks() {
        let blocks = split_blocks("\n  \nOne\nstill one\n \n\n# Head\nTwo\n\n   ");
        assert_eq!(blocks, vec!["One\nstill one", "# Head", "Two"]);
    }

    #[test]
    fn test_split_keeps_first_line_indent() {
        assert_eq!(split_blocks("\n    Indented."), vec!["    Indented."]);
    }

    #[test]
    fn test_classify() {
        let params = StyleKind::Apa.params();
        assert_eq!(classify("# Title", params), BlockKind::Heading);
        assert_eq!(classify("Short Title", params), BlockKind::Heading);
        assert_eq!(classify("> quoted", params), BlockKind::Quote);
        assert_eq!(classify("        indented", params), BlockKind::Quote);
        assert_eq!(classify("A sentence.", params), BlockKind::Body);
        assert_eq!(classify("Short Title\nwith a second line", params), BlockKind::Body);
    }

    #[test]
    fn test_indent_width() {
        assert_eq!(indent_width("    x"), 4);
        assert_eq!(indent_width("\t x"), 5);
        assert_eq!(indent_width("x"), 0);
    }
}
