use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use tiktoken_rs::CoreBPE;

/// Process-wide BPE vocabulary, parsed at most once and read-only after.
///
/// Parsing the merge rules is the expensive part, so the cell is shared by
/// every counter in the process. A failed load is not cached; the next
/// caller retries instead of inheriting a poisoned handle.
static VOCABULARY: OnceCell<CoreBPE> = OnceCell::new();

/// Token counter over the cl100k byte-pair-encoding vocabulary.
///
/// Counts are deterministic: the same text always yields the same count.
/// The counter is cheap to construct after the first successful load and
/// is safe to use from multiple threads at once.
///
/// # Examples
///
/// ```no_run
/// use mdstrip::TokenCounter;
///
/// # fn main() -> mdstrip::Result<()> {
/// let counter = TokenCounter::new()?;
/// assert_eq!(counter.count(""), 0);
/// assert!(counter.count("Hello, world!") > 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct TokenCounter {
    bpe: &'static CoreBPE,
}

impl std::fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCounter")
            .field("vocabulary", &"cl100k_base")
            .finish()
    }
}

impl TokenCounter {
    /// Creates a counter, loading the vocabulary on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tokenizer`] if the vocabulary cannot be loaded.
    /// The failure is loud: a broken vocabulary must never be reported as
    /// a zero count.
    pub fn new() -> Result<Self> {
        let bpe = VOCABULARY.get_or_try_init(|| {
            tiktoken_rs::cl100k_base().map_err(|e| Error::tokenizer(e.to_string()))
        })?;
        Ok(Self { bpe })
    }

    /// Counts the tokens in the given text.
    ///
    /// Special-token strings that appear literally in transcripts are
    /// encoded as their single token rather than rejected.
    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_zero_tokens() {
        let counter = TokenCounter::new().unwrap();
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn test_basic_count() {
        let counter = TokenCounter::new().unwrap();
        let tokens = counter.count("Hello, world!");
        assert!(tokens > 0);
        assert!(tokens < 10);
    }

    #[test]
    fn test_deterministic() {
        let counter = TokenCounter::new().unwrap();
        let text = "the same text, counted twice";
        assert_eq!(counter.count(text), counter.count(text));
    }

    #[test]
    fn test_counters_share_one_vocabulary() {
        let a = TokenCounter::new().unwrap();
        let b = TokenCounter::new().unwrap();
        assert_eq!(a.count("shared vocabulary"), b.count("shared vocabulary"));
        assert!(std::ptr::eq(a.bpe, b.bpe));
    }

    #[test]
    fn test_unicode_text() {
        let counter = TokenCounter::new().unwrap();
        assert!(counter.count("héllo wörld — ünïcode ✓") > 0);
    }

    #[test]
    fn test_longer_text_has_more_tokens() {
        let counter = TokenCounter::new().unwrap();
        let short = counter.count("one sentence.");
        let long = counter.count("one sentence. and another. and a third one after that.");
        assert!(long > short);
    }
}
