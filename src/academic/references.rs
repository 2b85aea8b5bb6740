//! Reference list layout.

use super::blocks::{indent_width, is_heading_like, is_marker_line};
use super::{StyleKind, StyleParams};

/// Byte span of a reference section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSection {
    /// Start of the heading line.
    pub start: usize,
    /// End of the heading line, before its newline.
    pub heading_end: usize,
    /// Start of the line that ends the section, or the end of the text.
    pub end: usize,
}

impl ReferenceSection {
    pub fn contains(&self, offset: usize) -> bool {
        (self.start..self.end).contains(&offset)
    }
}

/// Lines of `text` with their byte offsets.
fn line_spans(text: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    text.split('\n')
        .map(|line| {
            let start = offset;
            offset += line.len() + 1;
            (start, line)
        })
        .collect()
}

fn is_reference_heading(line: &str, params: &StyleParams) -> bool {
    let label = line.trim().trim_start_matches('#').trim();
    let label = label.strip_suffix(':').unwrap_or(label).trim_end();
    params
        .reference_headings
        .iter()
        .any(|h| h.eq_ignore_ascii_case(label))
}

/// Whether a body line starts the next section.
///
/// Marker lines always do. Otherwise the line must stand alone between
/// blank lines and be either centered or a flush heading-like line.
fn ends_section(line: &str, standalone: bool, params: &StyleParams) -> bool {
    if is_marker_line(line) {
        return true;
    }
    if !standalone || line.trim().is_empty() {
        return false;
    }
    let indent = indent_width(line);
    indent >= params.heading_indent
        || (indent < params.block_quote_indent && is_heading_like(line))
}

/// Whether a line after a blank line opens a body paragraph.
///
/// Entries are flush and their continuations indented, so a capitalized
/// line at most paragraph-indented that follows a blank line is prose.
fn starts_paragraph(line: &str, params: &StyleParams) -> bool {
    indent_width(line) < params.block_quote_indent
        && line.trim_start().chars().next().is_some_and(char::is_uppercase)
}

/// Locate the first reference section.
///
/// The heading is a whole line holding one of the style's reference labels,
/// optionally with `#` markers and a trailing colon. The section runs until
/// the next heading or a capitalized paragraph set off by a blank line.
/// Blank lines between the heading and the first entry belong to the
/// section.
pub fn find_reference_section(text: &str, params: &StyleParams) -> Option<ReferenceSection> {
    let lines = line_spans(text);
    let heading = lines
        .iter()
        .position(|(_, line)| is_reference_heading(line, params))?;
    let (start, heading_line) = lines[heading];

    let is_blank = |i: usize| lines.get(i).is_none_or(|(_, l)| l.trim().is_empty());
    let first_entry = (heading + 1..lines.len()).find(|&i| !is_blank(i));
    let end = (heading + 1..lines.len())
        .find(|&i| {
            let line = lines[i].1;
            let standalone = is_blank(i - 1) && is_blank(i + 1);
            let after_gap = is_blank(i - 1) && Some(i) != first_entry;
            ends_section(line, standalone, params)
                || (after_gap && starts_paragraph(line, params))
        })
        .map_or(text.len(), |i| lines[i].0);

    Some(ReferenceSection {
        start,
        heading_end: start + heading_line.len(),
        end,
    })
}

/// Split a section body into entries with collapsed whitespace.
///
/// Each non-blank line starts an entry, except that an indented line
/// continues an entry whose first line was flush.
fn parse_entries(body: &str) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut continuable = false;

    for line in body.lines() {
        if line.trim().is_empty() {
            continuable = false;
            continue;
        }
        let indented = indent_width(line) > 0;
        match entries.last_mut() {
            Some(entry) if indented && continuable => {
                entry.push(' ');
                entry.push_str(line.trim());
            }
            _ => {
                entries.push(line.trim().to_string());
                continuable = !indented;
            }
        }
    }

    entries
        .into_iter()
        .map(|e| e.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

/// Wrap an entry with a hanging indent.
fn hang(entry: &str, params: &StyleParams) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in entry.split_whitespace() {
        let indent = if lines.is_empty() { 0 } else { params.hanging_indent };
        let needed = current.chars().count() + 1 + word.chars().count();
        if !current.is_empty() && indent + needed > params.reference_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);

    let pad = " ".repeat(params.hanging_indent);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| if i == 0 { line.clone() } else { format!("{pad}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sort the reference list and lay it out with hanging indents.
///
/// Entries are ordered case-insensitively, keeping the source order of
/// ties. The heading is kept and followed by one blank line. Text without
/// a reference section is returned unchanged.
pub fn format_references(text: &str, style: StyleKind) -> String {
    let params = style.params();
    let Some(section) = find_reference_section(text, params) else {
        return text.to_string();
    };

    let mut entries = parse_entries(&text[section.heading_end..section.end]);
    entries.sort_by_cached_key(|e| e.to_lowercase());
    tracing::debug!(entries = entries.len(), "sorted reference list");

    let rendered: Vec<String> = entries.iter().map(|e| hang(e, params)).collect();
    let rest = &text[section.end..];

    let mut out = String::with_capacity(text.len() + rendered.len() * params.hanging_indent);
    out.push_str(&text[..section.start]);
    out.push_str(text[section.start..section.heading_end].trim_end());
    if !rendered.is_empty() {
        out.push_str("\n\n");
        out.push_str(&rendered.join("\n"));
    }
    if !rest.trim().is_empty() {
        out.push_str("\n\n");
        out.push_str(rest);
    }
    out
}
