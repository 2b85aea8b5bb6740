//! Block quotes.

use super::StyleKind;

/// Turn `>` quote lines into indented block-quote lines.
///
/// All leading markers are removed, so nested quotes flatten to one level.
/// A line holding nothing but markers is left alone.
pub fn format_quotes(text: &str, style: StyleKind) -> String {
    let indent = " ".repeat(style.params().block_quote_indent);
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim_start();
            if !trimmed.starts_with('>') {
                return line.to_string();
            }
            let quoted = trimmed.trim_start_matches(|c: char| c == '>' || c.is_whitespace());
            if quoted.is_empty() {
                line.to_string()
            } else {
                format!("{indent}{quoted}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
