//! Chapter segmentation at sectioning markers.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Matches `\chapter`, `\section` and `\part` with optional star and short
/// title, up to and including the brace that opens the title argument.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:chapter|section|part)\*?\s*(?:\[[^\]]*\])?\s*\{").unwrap()
});

/// One titled slice of raw source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Literal marker argument, or `None` when the source had no markers.
    pub title: Option<&'a str>,
    /// Raw markup between this marker and the next.
    pub body: &'a str,
}

/// A sectioning marker located in the source.
struct Marker<'a> {
    start: usize,
    end: usize,
    title: &'a str,
}

/// Byte offset of the brace closing a group whose content starts at `from`.
///
/// Nested groups are balanced and escaped braces are skipped.
fn closing_brace(text: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut bytes = text.as_bytes()[from..].iter().enumerate();
    while let Some((i, &b)) = bytes.next() {
        match b {
            b'\\' => {
                bytes.next();
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Find every marker with a balanced, non-blank title argument.
///
/// Scanning resumes after each title, so a marker nested inside another
/// marker's title is not a boundary.
fn find_markers(text: &str) -> Vec<Marker<'_>> {
    let mut markers = Vec::new();
    let mut pos = 0;
    while let Some(m) = MARKER_RE.find_at(text, pos) {
        match closing_brace(text, m.end()) {
            Some(close) if !text[m.end()..close].trim().is_empty() => {
                markers.push(Marker {
                    start: m.start(),
                    end: close + 1,
                    title: text[m.end()..close].trim(),
                });
                pos = close + 1;
            }
            _ => pos = m.end(),
        }
    }
    markers
}

/// Split normalized source into segments.
///
/// Every marker starts a segment that runs to the next marker or the end of
/// input. Text before the first marker is dropped. Input without markers
/// becomes a single untitled segment covering everything.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let markers = find_markers(text);

    let Some(first) = markers.first() else {
        return vec![Segment {
            title: None,
            body: text,
        }];
    };

    if !text[..first.start].trim().is_empty() {
        tracing::debug!(
            bytes = first.start,
            "discarding text before first sectioning marker"
        );
    }

    let segments: Vec<_> = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
            Segment {
                title: Some(marker.title),
                body: &text[marker.end..end],
            }
        })
        .collect();

    tracing::debug!(count = segments.len(), "segmented source");
    segments
}
