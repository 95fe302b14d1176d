//! Fenced code block handling.
//!
//! Two policies, selected by [`CodeFencePolicy`]: strip only the
//! triple-backtick marker lines and keep the code body, or drop the whole
//! block including its content.
//!
//! Unterminated fences never fail; the behavior is fixed per policy:
//! under `Preserve` a dangling opener line is stripped (the rewrite is
//! line-local), under `Remove` it is left untouched (the block rewrite
//! requires a matching closer).

use crate::config::CodeFencePolicy;
use once_cell::sync::Lazy;
use regex::Regex;

/// A whole fenced block, opener through closer, non-greedy.
static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\s\S]*?```").unwrap());

/// A fence marker line: ``` at line start, optional language hint.
static FENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*```[^\n]*\n?").unwrap());

/// Applies the configured fence policy to the text.
pub(crate) fn strip_fences(text: &str, policy: CodeFencePolicy) -> String {
    match policy {
        CodeFencePolicy::Remove => FENCED_BLOCK.replace_all(text, "").into_owned(),
        CodeFencePolicy::Preserve => FENCE_LINE.replace_all(text, "").into_owned(),
    }
}
