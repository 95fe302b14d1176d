//! Markdown formatting stripper.
//!
//! An ordered sequence of content-preserving rewrites. Order is
//! load-bearing in two places: bold markers must be resolved before
//! single-character emphasis (`**text**` is a superset of `*text*`), and
//! the image rewrite runs just before the inline-link rewrite because
//! `![alt](url)` contains `[alt](url)` as a substring.
//!
//! Emphasis matches are line-local so list markers on consecutive lines
//! are never mistaken for an emphasis pair.

use once_cell::sync::Lazy;
use regex::Regex;

/// `#`..`######` heading markers at line start.
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").unwrap());

/// Bold, both marker styles.
static BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static BOLD_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"__([^_]+)__").unwrap());

/// Italic, after bold has consumed the doubled markers.
static ITALIC_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static ITALIC_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b_([^_\n]+)_\b").unwrap());

/// Strikethrough.
static STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~([^~]+)~~").unwrap());

/// Blockquote markers at line start, nested included.
static BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:>[ \t]*)+").unwrap());

/// Images, alt text kept. Runs before inline links.
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());

/// Inline links, reference links, link-definition lines.
static INLINE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
static REF_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\[[^\]]*\]").unwrap());
static LINK_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\[[^\]]+\]:[^\n]*\n?").unwrap());

/// Horizontal rules, whole line removed.
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:-{3,}|\*{3,}|_{3,})[ \t]*$\n?").unwrap());

/// Inline code spans.
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// List markers. Task-list checkboxes go first, then plain unordered
/// and ordered markers.
static TASK_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+\[[ xX]\][ \t]*").unwrap());
static UNORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap());
static ORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap());

/// HTML comments, content and all.
static HTML_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Footnote references.
static FOOTNOTE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\^[^\]]+\]").unwrap());

/// Applies the full rewrite sequence, markers removed, text kept.
///
/// Every rule preserves the enclosed content except link-definition
/// lines, horizontal rules, HTML comments, and footnote references,
/// which are dropped whole.
pub(crate) fn strip_markdown(text: &str) -> String {
    let text = HEADING.replace_all(text, "");
    let text = BOLD_STARS.replace_all(&text, "${1}");
    let text = BOLD_UNDER.replace_all(&text, "${1}");
    let text = ITALIC_STARS.replace_all(&text, "${1}");
    let text = ITALIC_UNDER.replace_all(&text, "${1}");
    let text = STRIKE.replace_all(&text, "${1}");
    let text = BLOCKQUOTE.replace_all(&text, "");
    let text = IMAGE.replace_all(&text, "${1}");
    let text = INLINE_LINK.replace_all(&text, "${1}");
    let text = REF_LINK.replace_all(&text, "${1}");
    let text = LINK_DEF.replace_all(&text, "");
    let text = HORIZONTAL_RULE.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "${1}");
    let text = TASK_LIST.replace_all(&text, "");
    let text = UNORDERED_LIST.replace_all(&text, "");
    let text = ORDERED_LIST.replace_all(&text, "");
    let text = HTML_COMMENT.replace_all(&text, "");
    FOOTNOTE_REF.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(strip_markdown("# Title"), "Title");
        assert_eq!(strip_markdown("###### Deep"), "Deep");
        assert_eq!(strip_markdown("  ## Indented"), "Indented");
        assert_eq!(strip_markdown("not # a heading"), "not # a heading");
    }

    #[test]
    fn test_bold() {
        assert_eq!(strip_markdown("Some **bold** text"), "Some bold text");
        assert_eq!(strip_markdown("Some __bold__ text"), "Some bold text");
    }

    #[test]
    fn test_italic() {
        assert_eq!(strip_markdown("Some *italic* text"), "Some italic text");
        assert_eq!(strip_markdown("Some _italic_ text"), "Some italic text");
    }

    // Order sensitivity: bold must run before italic, otherwise the
    // doubled markers leave strays behind.
    #[test]
    fn test_bold_before_italic_ordering() {
        let output = strip_markdown("**bold**");
        assert_eq!(output, "bold");
        assert!(!output.contains('*'));

        assert_eq!(strip_markdown("***both***"), "both");
        assert_eq!(strip_markdown("**a** and *b*"), "a and b");
    }

    #[test]
    fn test_snake_case_is_not_italic() {
        assert_eq!(strip_markdown("call my_var_name here"), "call my_var_name here");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(strip_markdown("~~gone~~ kept"), "gone kept");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(strip_markdown("> quoted line"), "quoted line");
        assert_eq!(strip_markdown(">> nested quote"), "nested quote");
    }

    #[test]
    fn test_inline_link() {
        assert_eq!(
            strip_markdown("see [the docs](https://example.com) here"),
            "see the docs here"
        );
    }

    #[test]
    fn test_reference_link() {
        assert_eq!(strip_markdown("see [the docs][docs] here"), "see the docs here");
        assert_eq!(strip_markdown("see [the docs][] here"), "see the docs here");
    }

    #[test]
    fn test_link_definition_line_removed() {
        assert_eq!(
            strip_markdown("text\n[docs]: https://example.com\nmore"),
            "text\nmore"
        );
    }

    #[test]
    fn test_image_keeps_alt_text() {
        assert_eq!(strip_markdown("![a diagram](img.png)"), "a diagram");
        assert_eq!(strip_markdown("![](img.png)"), "");
        // No stray `!` left behind by the link rule.
        assert!(!strip_markdown("intro ![alt](x.png) outro").contains('!'));
    }

    #[test]
    fn test_horizontal_rules_removed() {
        assert_eq!(strip_markdown("a\n---\nb"), "a\nb");
        assert_eq!(strip_markdown("a\n*****\nb"), "a\nb");
        assert_eq!(strip_markdown("a\n___\nb"), "a\nb");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(strip_markdown("use `cargo build` here"), "use cargo build here");
    }

    #[test]
    fn test_unordered_list_markers() {
        assert_eq!(strip_markdown("* one\n- two\n+ three"), "one\ntwo\nthree");
    }

    #[test]
    fn test_ordered_list_markers() {
        assert_eq!(strip_markdown("1. one\n2. two\n10. ten"), "one\ntwo\nten");
    }

    #[test]
    fn test_task_list_markers() {
        assert_eq!(strip_markdown("- [ ] open\n- [x] done"), "open\ndone");
    }

    #[test]
    fn test_html_comment_removed_entirely() {
        assert_eq!(strip_markdown("a <!-- hidden note --> b"), "a  b");
        assert_eq!(strip_markdown("a <!-- multi\nline --> b"), "a  b");
    }

    #[test]
    fn test_footnote_reference_removed() {
        assert_eq!(strip_markdown("claim[^1] made"), "claim made");
        assert_eq!(strip_markdown("claim[^note] made"), "claim made");
    }

    #[test]
    fn test_content_preservation() {
        // For content-preserving rules the enclosed text must appear
        // verbatim in the output.
        let cases = [
            ("# The Heading", "The Heading"),
            ("**kept**", "kept"),
            ("*kept*", "kept"),
            ("[kept](url)", "kept"),
            ("`kept`", "kept"),
            ("- kept", "kept"),
            ("> kept", "kept"),
        ];
        for (input, content) in cases {
            assert_eq!(strip_markdown(input), content);
        }
    }

    #[test]
    fn test_arbitrary_text_is_untouched() {
        let input = "Plain sentences. Nothing to strip here, 2 + 2 = 4.";
        assert_eq!(strip_markdown(input), input);
    }

    #[test]
    fn test_idempotent() {
        let input = "# Title\n\n> A **bold** claim[^1] with [a link](url).\n\n\
                     - [x] item *one*\n- item `two`\n\n---\n\n[^1]: note";
        let once = strip_markdown(input);
        assert_eq!(strip_markdown(&once), once);
    }

    #[test]
    fn test_mixed_document() {
        let input = "## Usage\n\nRun `init` first, then read [the guide](g.md).\n\n\
                     1. install\n2. configure\n\n~~old step~~\n";
        let output = strip_markdown(input);
        assert_eq!(
            output,
            "Usage\n\nRun init first, then read the guide.\n\ninstall\nconfigure\n\nold step\n"
        );
    }
}
