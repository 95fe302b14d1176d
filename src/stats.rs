use serde::Serialize;

/// Result of one cleaning invocation.
///
/// Carries the cleaned text plus the before/after measurements, and
/// derives the deltas and percentage savings from them. Built once by the
/// pipeline and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    /// The cleaned text
    pub cleaned_text: String,

    /// Character count of the original text
    pub original_chars: usize,

    /// Character count of the cleaned text
    pub cleaned_chars: usize,

    /// Token count of the original text
    pub original_tokens: usize,

    /// Token count of the cleaned text
    pub cleaned_tokens: usize,
}

impl ProcessingResult {
    /// Characters removed by cleaning.
    ///
    /// Signed: replacement rules can occasionally add characters, so the
    /// cleaned text is not guaranteed to be shorter.
    #[must_use]
    pub const fn chars_saved(&self) -> i64 {
        self.original_chars as i64 - self.cleaned_chars as i64
    }

    /// Tokens removed by cleaning. Signed, like [`Self::chars_saved`].
    #[must_use]
    pub const fn tokens_saved(&self) -> i64 {
        self.original_tokens as i64 - self.cleaned_tokens as i64
    }

    /// Percentage of characters saved. 0.0 when the original is empty.
    #[must_use]
    pub fn char_savings_pct(&self) -> f64 {
        savings_pct(self.original_chars, self.cleaned_chars)
    }

    /// Percentage of tokens saved. 0.0 when the original is empty.
    #[must_use]
    pub fn token_savings_pct(&self) -> f64 {
        savings_pct(self.original_tokens, self.cleaned_tokens)
    }

    /// Prints a human-readable reduction summary to stderr.
    ///
    /// Goes to stderr so the cleaned text on stdout stays pipeable.
    pub fn print_summary(&self) {
        eprintln!("\n╔═══════════════════════════════════════════╗");
        eprintln!("║            Reduction Summary              ║");
        eprintln!("╠═══════════════════════════════════════════╣");
        eprintln!(
            "║ Characters:  {:>9} → {:>9}        ║",
            self.original_chars, self.cleaned_chars
        );
        eprintln!(
            "║   removed:   {:>9} ({:>5.1}%)           ║",
            self.chars_saved(),
            self.char_savings_pct()
        );
        eprintln!(
            "║ Tokens:      {:>9} → {:>9}        ║",
            self.original_tokens, self.cleaned_tokens
        );
        eprintln!(
            "║   removed:   {:>9} ({:>5.1}%)           ║",
            self.tokens_saved(),
            self.token_savings_pct()
        );
        eprintln!("╚═══════════════════════════════════════════╝\n");
    }
}

/// Percentage saved between two measures, defined as 0.0 when the
/// original measure is zero.
fn savings_pct(original: usize, cleaned: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - cleaned as f64) / original as f64 * 100.0
}
