//! Document scaffolding and inline markup (stages 1-4).

use std::borrow::Cow;

use super::patterns::{DOCUMENT_ENV_RE, EMPHASIS_RE, PREAMBLE_DECL_RE};

/// Stage 1: `\documentclass` and `\usepackage` declarations vanish.
pub fn strip_preamble(text: &str) -> String {
    PREAMBLE_DECL_RE.replace_all(text, "").into_owned()
}

/// Stage 2: `\begin{document}` / `\end{document}` vanish.
pub fn strip_document_env(text: &str) -> String {
    DOCUMENT_ENV_RE.replace_all(text, "").into_owned()
}

/// Stage 3: emphasis wrappers are replaced by their inner text.
///
/// The innermost wrappers match first, so the pass repeats until nothing
/// changes to unwrap nested emphasis.
pub fn unwrap_emphasis(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        match EMPHASIS_RE.replace_all(&current, "$1") {
            Cow::Borrowed(_) => return current,
            Cow::Owned(next) => current = next,
        }
    }
}

/// Stage 4: TeX and typographic quotes become straight quotes.
pub fn straighten_quotes(text: &str) -> String {
    text.replace("``", "\"")
        .replace("''", "\"")
        .replace(['\u{201C}', '\u{201D}', '\u{201E}'], "\"")
        .replace(['`', '\u{2018}', '\u{2019}'], "'")
}
