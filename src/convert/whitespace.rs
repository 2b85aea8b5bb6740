//! Final whitespace normalization (stage 15).

/// Collapse whitespace runs while keeping line structure.
///
/// A run holding two or more newlines becomes a paragraph break (`\n\n`),
/// a run with one newline becomes `\n`, any other run becomes one space.
/// Leading and trailing whitespace is dropped.
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_run = false;
    let mut newlines = 0usize;

    for c in text.chars() {
        if c.is_whitespace() {
            in_run = true;
            if c == '\n' {
                newlines += 1;
            }
            continue;
        }

        if in_run && !result.is_empty() {
            match newlines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        in_run = false;
        newlines = 0;
        result.push(c);
    }

    result
}
