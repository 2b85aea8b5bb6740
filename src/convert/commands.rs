//! Command conversion (stages 10-14).

use regex_lite::Captures;

use super::patterns::{
    BARE_COMMAND_RE, CITE_RE, COMMAND_WITH_ARG_RE, ENV_DELIM_RE, FOOTNOTE_RE, ITEM_RE, LABEL_RE,
    LINE_BREAK_RE, LIST_ENV_RE, NEWLINE_CMD_RE, REF_RE,
};

/// Placeholder left where a cross-reference stood.
pub const REF_PLACEHOLDER: &str = "[REF]";

/// Placeholder left where a citation command stood.
pub const CITE_PLACEHOLDER: &str = "[CITE]";

/// Bullet prefix for list items.
pub const BULLET: &str = "\u{2022} ";

/// Stage 10: explicit line breaks become single newlines.
///
/// The source newline that usually follows `\\` is absorbed so the pair
/// does not read as a paragraph break.
pub fn line_breaks(text: &str) -> String {
    let text = LINE_BREAK_RE.replace_all(text, "\n");
    NEWLINE_CMD_RE.replace_all(&text, "\n").into_owned()
}

/// Stage 11: labels vanish; references and citations become placeholders.
pub fn references(text: &str) -> String {
    let text = LABEL_RE.replace_all(text, "");
    let text = REF_RE.replace_all(&text, REF_PLACEHOLDER);
    CITE_RE.replace_all(&text, CITE_PLACEHOLDER).into_owned()
}

/// Stage 12: list environments become blank-line separated bullet lines.
pub fn lists(text: &str) -> String {
    let text = LIST_ENV_RE.replace_all(text, "\n\n");
    ITEM_RE
        .replace_all(&text, |caps: &Captures| match caps.get(1) {
            Some(label) if !label.as_str().trim().is_empty() => {
                format!("\n{BULLET}{} ", label.as_str().trim())
            }
            _ => format!("\n{BULLET}"),
        })
        .into_owned()
}

/// Stage 13: footnotes become an inline parenthetical at the footnoted point.
pub fn footnotes(text: &str) -> String {
    FOOTNOTE_RE.replace_all(text, " ($1)").into_owned()
}

/// Stage 14: anything still shaped like a command is stripped.
///
/// Environment delimiters become paragraph breaks. A command with a brace
/// argument loses its name and keeps the group, a bare command becomes a
/// space, and finally group braces are dropped and escaped specials are
/// unescaped. Only command names and delimiter characters are consumed, so
/// text converted by earlier stages is never eaten.
pub fn generic_commands(text: &str) -> String {
    let text = ENV_DELIM_RE.replace_all(text, "\n\n");
    let text = COMMAND_WITH_ARG_RE.replace_all(&text, "{");
    let text = BARE_COMMAND_RE.replace_all(&text, " ");
    strip_groups(&text)
}

/// Drop unescaped group braces and resolve the remaining backslash escapes.
fn strip_groups(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '{' | '}' => {}
            '~' => result.push(' '),
            '\\' => match chars.next() {
                // Spacing commands: \, \; \: \! and control space
                Some(',' | ';' | ':' | '!' | ' ') => result.push(' '),
                Some('\n') => result.push('\n'),
                // Escaped specials and accents keep the escaped character
                Some(escaped) => result.push(escaped),
                None => {}
            },
            _ => result.push(c),
        }
    }

    result
}
