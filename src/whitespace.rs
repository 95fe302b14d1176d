//! Blank-line collapsing and document trimming.
//!
//! The mandatory final stage: runs regardless of which strip flags are
//! set, so every cleaned document comes out with at most one blank line
//! between paragraphs and no leading or trailing whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapses runs of three or more line breaks to exactly two, then trims
/// the whole document.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_three_newlines() {
        assert_eq!(normalize_whitespace("a\n\n\nb"), "a\n\nb");
    }

    // Four consecutive blank lines come out as exactly one blank line.
    #[test]
    fn test_collapses_long_runs() {
        assert_eq!(normalize_whitespace("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_single_blank_line_is_kept() {
        assert_eq!(normalize_whitespace("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_trims_document_edges() {
        assert_eq!(normalize_whitespace("  \n\nhello\n\n  "), "hello");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("\n\n\n"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["a\n\n\n\nb", "  x  ", "p\n\nq\n\n\nr"];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once);
        }
    }
}
