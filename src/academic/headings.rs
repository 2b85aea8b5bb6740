//! Heading markers.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::StyleKind;
use super::blocks::is_heading_like;

/// A run of `#` markers, whitespace, then the heading text.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(#+)[ \t]+(\S.*?)[ \t]*$").unwrap());

/// Replace `#` markers with layout.
///
/// A top-level heading is indented to approximate centering. Deeper levels
/// go flush left, provided their text still reads as a heading once the
/// marker is gone; otherwise the marker stays so the line is not mistaken
/// for a paragraph later.
pub fn format_headings(text: &str, style: StyleKind) -> String {
    let center = " ".repeat(style.params().heading_indent);
    text.split('\n')
        .map(|line| {
            let Some(caps) = HEADING_RE.captures(line) else {
                return line.to_string();
            };
            let (Some(level), Some(title)) = (caps.get(1), caps.get(2)) else {
                return line.to_string();
            };
            match level.len() {
                1 => format!("{center}{}", title.as_str()),
                _ if is_heading_like(title.as_str()) => title.as_str().to_string(),
                _ => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let out = format_headings("# Top Level\ntext\n## Second Level\n  ### Third", StyleKind::Apa);
        assert_eq!(
            out,
            format!("{}Top Level\ntext\nSecond Level\nThird", " ".repeat(32))
        );
    }

    #[test]
    fn test_not_a_heading() {
        assert_eq!(format_headings("#hashtag", StyleKind::Mla), "#hashtag");
        assert_eq!(format_headings("C# rocks", StyleKind::Mla), "C# rocks");
    }

    #[test]
    fn test_prose_subheading_keeps_marker() {
        let src = "## notes on the method.";
        assert_eq!(format_headings(src, StyleKind::Apa), src);
    }

    #[test]
    fn test_idempotent() {
        let once = format_headings("# A\n## B\n### c.", StyleKind::Mla);
        assert_eq!(format_headings(&once, StyleKind::Mla), once);
    }
}
