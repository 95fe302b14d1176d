//! # mdstrip
//!
//! Normalizes mixed Markdown/XML/LLM-transcript text into plain text and
//! reports the reduction in characters and BPE tokens.
//!
//! ## Features
//!
//! - Selective stripping: code fences, `<...>` tags, Markdown formatting
//! - Two code-fence policies: keep the code body, or drop the whole block
//! - Real token accounting against a cached cl100k BPE vocabulary
//! - Named presets matching the common cleaning modes
//!
//! ## Quick Start
//!
//! ```
//! use mdstrip::Settings;
//!
//! let cleaned = mdstrip::clean("# Title\n\nSome **bold** text.", &Settings::default());
//! assert_eq!(cleaned, "Title\n\nSome bold text.");
//! ```
//!
//! With token accounting:
//!
//! ```no_run
//! use mdstrip::Settings;
//!
//! # fn main() -> mdstrip::Result<()> {
//! let result = mdstrip::process("<Tip>Note this</Tip>", &Settings::default())?;
//! assert_eq!(result.cleaned_text, "Note this");
//! println!("saved {:.1}% of tokens", result.token_savings_pct());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! A fixed-order rewrite pipeline:
//! 1. **fence**: removes code-fence markers, or whole fenced blocks
//! 2. **tags**: removes `<...>` delimiters, keeping enclosed text
//! 3. **markdown**: removes formatting markers, keeping content
//! 4. **whitespace**: collapses blank lines and trims (always runs)
//!
//! followed by token counting on both sides of the rewrite.

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod fence;
mod markdown;
mod pipeline;
mod stats;
mod tags;
mod token;
mod whitespace;

pub mod preset;

pub use config::{CodeFencePolicy, Settings, SettingsBuilder};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use preset::PresetKind;
pub use stats::ProcessingResult;
pub use token::TokenCounter;

/// Cleans the text with the given settings.
///
/// Pure and total: applies the enabled rewrite stages plus the mandatory
/// whitespace normalization, and never fails on any UTF-8 input.
///
/// # Examples
///
/// ```
/// use mdstrip::{PresetKind, Settings};
///
/// let settings = Settings::from_preset(PresetKind::PlainText);
/// assert_eq!(mdstrip::clean("*hi*", &settings), "hi");
/// ```
#[must_use]
pub fn clean(text: &str, settings: &Settings) -> String {
    pipeline::clean_with(text, settings)
}

/// Cleans the text and measures the character and token reduction.
///
/// # Errors
///
/// Returns an error only if the token vocabulary cannot be loaded; the
/// rewrite stages themselves cannot fail.
pub fn process(text: &str, settings: &Settings) -> Result<ProcessingResult> {
    Ok(Pipeline::new(*settings)?.process(text))
}

/// Counts the BPE tokens in the text.
///
/// # Errors
///
/// Returns an error if the token vocabulary cannot be loaded — never a
/// silent zero.
pub fn count_tokens(text: &str) -> Result<usize> {
    Ok(TokenCounter::new()?.count(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_is_pure_passthrough_to_pipeline() {
        let settings = Settings::default();
        assert_eq!(clean("plain", &settings), "plain");
    }

    #[test]
    fn test_process_round_trip() {
        let result = process("# Hi", &Settings::default()).unwrap();
        assert_eq!(result.cleaned_text, "Hi");
        assert_eq!(result.original_chars, 4);
        assert_eq!(result.cleaned_chars, 2);
    }

    #[test]
    fn test_count_tokens_empty() {
        assert_eq!(count_tokens("").unwrap(), 0);
    }
}
