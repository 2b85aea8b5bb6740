//! LaTeX to plain-text conversion.
//!
//! Conversion is an ordered pipeline of pure string stages. The order is
//! load-bearing: each stage assumes the ones before it have run.
//!
//! ## Pipeline Order
//!
//! 1. **StripPreamble** - `\documentclass` / `\usepackage` vanish
//! 2. **StripDocumentEnv** - `\begin{document}` / `\end{document}` vanish
//! 3. **UnwrapEmphasis** - `\textbf{x}`, `\emph{x}`, ... become `x`
//! 4. **StraightenQuotes** - ``` `` ``` / `''` / curly quotes become straight
//! 5. **ParagraphCommands** - `\par`, `\paragraph{}` become `\n\n`
//! 6. **SentenceBreaks** - sentence end + source newline + capital starts a paragraph
//! 7. **TransitionBreaks** - break before transition phrases
//! 8. **DialogueBreaks** - break between adjacent capitalized quotations
//! 9. **CollapseBlankLines** - blank-line runs become exactly `\n\n` (after 6-8)
//! 10. **LineBreaks** - `\\` and `\newline` become `\n`
//! 11. **References** - labels vanish, `\ref` / `\cite` become `[REF]` / `[CITE]`
//! 12. **Lists** - list environments become blank lines, `\item` becomes a bullet
//! 13. **Footnotes** - `\footnote{x}` becomes ` (x)`
//! 14. **GenericCommands** - any leftover command is stripped, braces dropped
//! 15. **Whitespace** - whitespace runs collapse, at most two newlines in a row
//!
//! Comments are not handled here: [`crate::latex::normalize`] strips them
//! from the whole document before segmentation.

mod breaks;
mod commands;
mod inline;
mod patterns;
mod whitespace;

pub use breaks::{SCENE_PHRASES, TRANSITION_PHRASES};
pub use commands::{BULLET, CITE_PLACEHOLDER, REF_PLACEHOLDER};

/// One named step of the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    StripPreamble,
    StripDocumentEnv,
    UnwrapEmphasis,
    StraightenQuotes,
    ParagraphCommands,
    SentenceBreaks,
    TransitionBreaks,
    DialogueBreaks,
    CollapseBlankLines,
    LineBreaks,
    References,
    Lists,
    Footnotes,
    GenericCommands,
    Whitespace,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 15] = [
        Stage::StripPreamble,
        Stage::StripDocumentEnv,
        Stage::UnwrapEmphasis,
        Stage::StraightenQuotes,
        Stage::ParagraphCommands,
        Stage::SentenceBreaks,
        Stage::TransitionBreaks,
        Stage::DialogueBreaks,
        Stage::CollapseBlankLines,
        Stage::LineBreaks,
        Stage::References,
        Stage::Lists,
        Stage::Footnotes,
        Stage::GenericCommands,
        Stage::Whitespace,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::StripPreamble => "strip-preamble",
            Stage::StripDocumentEnv => "strip-document-env",
            Stage::UnwrapEmphasis => "unwrap-emphasis",
            Stage::StraightenQuotes => "straighten-quotes",
            Stage::ParagraphCommands => "paragraph-commands",
            Stage::SentenceBreaks => "sentence-breaks",
            Stage::TransitionBreaks => "transition-breaks",
            Stage::DialogueBreaks => "dialogue-breaks",
            Stage::CollapseBlankLines => "collapse-blank-lines",
            Stage::LineBreaks => "line-breaks",
            Stage::References => "references",
            Stage::Lists => "lists",
            Stage::Footnotes => "footnotes",
            Stage::GenericCommands => "generic-commands",
            Stage::Whitespace => "whitespace",
        }
    }

    /// Run this stage alone.
    pub fn apply(self, text: &str) -> String {
        match self {
            Stage::StripPreamble => inline::strip_preamble(text),
            Stage::StripDocumentEnv => inline::strip_document_env(text),
            Stage::UnwrapEmphasis => inline::unwrap_emphasis(text),
            Stage::StraightenQuotes => inline::straighten_quotes(text),
            Stage::ParagraphCommands => breaks::paragraph_commands(text),
            Stage::SentenceBreaks => breaks::sentence_breaks(text),
            Stage::TransitionBreaks => breaks::transition_breaks(text),
            Stage::DialogueBreaks => breaks::dialogue_breaks(text),
            Stage::CollapseBlankLines => breaks::collapse_blank_lines(text),
            Stage::LineBreaks => commands::line_breaks(text),
            Stage::References => commands::references(text),
            Stage::Lists => commands::lists(text),
            Stage::Footnotes => commands::footnotes(text),
            Stage::GenericCommands => commands::generic_commands(text),
            Stage::Whitespace => whitespace::collapse_whitespace(text),
        }
    }
}

/// Convert a LaTeX fragment to plain text.
///
/// Pure and deterministic. Unrecognized markup degrades to its text content;
/// conversion never fails.
pub fn convert(text: &str) -> String {
    run_stages(text, &Stage::ALL)
}

/// Run a subset of stages, in the order given.
pub fn run_stages(text: &str, stages: &[Stage]) -> String {
    stages
        .iter()
        .fold(text.to_string(), |acc, stage| stage.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_example_body() {
        assert_eq!(
            convert("Hello world. \\textbf{Bold} text."),
            "Hello world. Bold text."
        );
    }

    #[test]
    fn test_full_document() {
        let src = "\\documentclass{article}\n\\usepackage{amsmath}\n\\begin{document}\n\
                   It was late.\nThe house was quiet\\footnote{Mostly.}.\n\n\n\
                   \\begin{itemize}\n\\item Milk\n\\item Eggs\n\\end{itemize}\n\
                   See \\ref{fig} and \\cite{doe}.\\\\\nDone.\n\\end{document}\n";
        assert_eq!(
            convert(src),
            "It was late.\n\nThe house was quiet (Mostly.).\n\n\u{2022} Milk\n\u{2022} Eggs\n\nSee [REF] and [CITE].\nDone."
        );
    }

    #[test]
    fn test_breaks_survive_collapse() {
        // Stage 6 inserts a break, stage 9 must not merge it back
        let out = convert("One.\n\n\n\nTwo.\nThree.");
        assert_eq!(out, "One.\n\nTwo.\n\nThree.");
    }

    #[test]
    fn test_dialogue_turns() {
        let out = convert("``Are you coming?'' ``Not today.''");
        assert_eq!(out, "\"Are you coming?\"\n\n\"Not today.\"");
    }

    #[test]
    fn test_unknown_markup_passthrough() {
        assert_eq!(convert("\\mystery{kept} words"), "kept words");
        assert_eq!(convert("unbalanced \\textbf{bold"), "unbalanced bold");
        assert_eq!(convert("math $x^2$ stays"), "math $x^2$ stays");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("  \n\n "), "");
    }

    #[test]
    fn test_stage_names_are_unique() {
        let mut names: Vec<_> = Stage::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Stage::ALL.len());
    }

    #[test]
    fn test_run_stages_subset() {
        let out = run_stages(
            "\\emph{a}  \\par b",
            &[Stage::UnwrapEmphasis, Stage::ParagraphCommands],
        );
        assert_eq!(out, "a  \n\nb");
    }

    const FRAGMENTS: &[&str] = &[
        "word", "Word", " ", "\n", "\n\n", ".", "?", "\"", "``", "''", "{", "}",
        "\\textbf{", "\\emph{", "\\textit{", "\\underline{", "\\par ", "\\paragraph{x}",
        "\\item ", "\\begin{itemize}", "\\end{enumerate}", "\\footnote{", "\\cite{k}",
        "\\ref{r}", "\\label{l}", "\\\\", "\\newline", "\\noindent", "\\section*{",
        "\\begin{quote}", "\\% ", "~", "However ",
    ];

    fn latex_soup() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40)
            .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_no_command_tokens_survive(src in latex_soup()) {
            let out = convert(&src);
            prop_assert!(!out.contains('\\'), "residual command in {:?}", out);
        }

        #[test]
        fn prop_at_most_two_newlines(src in latex_soup()) {
            prop_assert!(!convert(&src).contains("\n\n\n"));
        }

        #[test]
        fn prop_at_most_two_newlines_any_text(src in "\\PC{0,200}") {
            prop_assert!(!convert(&src).contains("\n\n\n"));
        }

        #[test]
        fn prop_plain_prose_words_survive(words in prop::collection::vec("[a-z]{1,8}", 1..30)) {
            let src = words.join(" ");
            prop_assert_eq!(convert(&src), src);
        }
    }
}
