//! Cached regex patterns for LaTeX conversion.
//!
//! Uses LazyLock to compile patterns once on first use. The literals are
//! fixed, so compilation cannot fail at runtime.

use regex_lite::Regex;
use std::sync::LazyLock;

// === Preamble ===

/// Matches \documentclass[...]{...} and \usepackage[...]{...}
pub static PREAMBLE_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:documentclass|usepackage)\s*(?:\[[^\]]*\])?\s*\{[^}]*\}").unwrap()
});

/// Matches \begin{document} and \end{document}
pub static DOCUMENT_ENV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:begin|end)\s*\{document\}").unwrap());

// === Inline formatting ===

/// Matches an emphasis wrapper whose argument holds no nested group
pub static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:textbf|textit|emph|underline|textsc|textsl|texttt)\s*\{([^{}]*)\}").unwrap()
});

// === Paragraph structure ===

/// Matches \par (not \paragraph) and the whitespace after it
pub static PAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\par\b\s*").unwrap());

/// Matches \paragraph{...}
pub static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\paragraph\*?\s*\{[^}]*\}").unwrap());

/// Matches \subsection{...} and \subsubsection{...}, capturing the title
pub static SUBSECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:subsection|subsubsection)\*?\s*(?:\[[^\]]*\])?\s*\{([^}]*)\}").unwrap()
});

/// Matches sentence punctuation, a source line break, then a capital letter
pub static SENTENCE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])[ \t]*\n\s*([A-Z])").unwrap());

/// Matches sentence punctuation followed by a transition word or phrase
pub static TRANSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let phrases: Vec<&str> = super::breaks::TRANSITION_PHRASES
        .iter()
        .chain(super::breaks::SCENE_PHRASES.iter())
        .copied()
        .collect();
    Regex::new(&format!(r"([.!?])\s+({})\s+", phrases.join("|"))).unwrap()
});

/// Matches a closing quote, whitespace, and a quote opening a capitalized turn
pub static DIALOGUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""\s+"([A-Z])"#).unwrap());

/// Matches two or more line breaks, with optional blanks on the empty lines
pub static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\n(?:[ \t]*\n)+").unwrap());

// === Commands ===

/// Matches \\ with optional star and length, plus the source newline after it
pub static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\\\*?(?:\[[^\]]*\])?[ \t]*\n?").unwrap());

/// Matches \newline
pub static NEWLINE_CMD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\newline\b[ \t]*\n?").unwrap());

/// Matches \label{...}
pub static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\label\s*\{[^}]*\}").unwrap());

/// Matches cross-reference commands
pub static REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:ref|eqref|pageref|autoref|nameref|cref|Cref)\*?\s*\{[^}]*\}").unwrap()
});

/// Matches citation commands with optional pre/post notes
pub static CITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\(?:cite[a-zA-Z]*|parencite|textcite|autocite|footcite)\*?\s*(?:\[[^\]]*\]\s*)*\{[^}]*\}",
    )
    .unwrap()
});

/// Matches list environment delimiters
pub static LIST_ENV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:begin|end)\s*\{(?:itemize|enumerate|description)\}").unwrap()
});

/// Matches \item with an optional [label], absorbing one source line break before it
pub static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]*\n?[ \t]*\\item\b\s*(?:\[([^\]]*)\])?\s*").unwrap()
});

/// Matches \footnote[...]{...}, capturing the note text
pub static FOOTNOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]*\\footnote\s*(?:\[[^\]]*\])?\s*\{([^}]*)\}").unwrap()
});

/// Matches any remaining environment delimiter
pub static ENV_DELIM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:begin|end)\s*\{[^}]*\}(?:\[[^\]]*\])?").unwrap()
});

/// Matches a command name that takes a brace argument (the brace is kept)
pub static COMMAND_WITH_ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\*?\s*(?:\[[^\]]*\])?\s*\{").unwrap());

/// Matches a command without argument and the blanks after it
pub static BARE_COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\*?[ \t]*").unwrap());
