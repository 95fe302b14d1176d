//! Angle-bracket tag stripping.
//!
//! Removes `<...>` delimiters (XML, HTML, React-style components) while
//! keeping the text between paired tags. Opening and closing tags are
//! removed independently, so no pairing or nesting validation happens.

use once_cell::sync::Lazy;
use regex::Regex;

/// Self-closing tags like `<br/>` or `<Icon name="x" />`.
static SELF_CLOSING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z][^>]*/>").unwrap());

/// Any remaining `<...>` delimiter, opening or closing.
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Removes every `<...>` delimiter from the text.
///
/// Self-closing forms go first, then any remaining tag. Enclosed text is
/// left intact. A literal `<` or `>` used as a comparison operator is
/// ambiguous at the pattern level and gets stripped along with real
/// markup; known limitation.
pub(crate) fn strip_tags(text: &str) -> String {
    let text = SELF_CLOSING.replace_all(text, "");
    ANY_TAG.replace_all(&text, "").into_owned()
}
