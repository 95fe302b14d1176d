use crate::{
    config::Settings,
    error::Result,
    fence, markdown,
    stats::ProcessingResult,
    tags,
    token::TokenCounter,
    whitespace,
};
use tracing::{debug, info, instrument};

/// Pipeline applying the enabled rewrite stages in a fixed order.
///
/// Stage order: code fences (if enabled) → tags (if enabled) → Markdown
/// formatting (if enabled) → whitespace normalization (always). Each stage
/// is a pure text→text pass over the previous stage's output; none of
/// them assumes the input is valid Markdown or XML.
pub struct Pipeline {
    settings: Settings,
    counter: TokenCounter,
}

impl Pipeline {
    /// Creates a new pipeline with the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the token vocabulary cannot be loaded. The
    /// rewrite stages themselves cannot fail.
    pub fn new(settings: Settings) -> Result<Self> {
        let counter = TokenCounter::new()?;
        Ok(Self { settings, counter })
    }

    /// Returns the settings this pipeline was built with.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the rewrite stages and returns the cleaned text.
    ///
    /// Pure and total: any UTF-8 input comes back cleaned, worst case with
    /// imperfect stripping on pathological markup.
    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        clean_with(text, &self.settings)
    }

    /// Cleans the text and measures the reduction.
    #[instrument(skip_all, fields(input_chars = text.chars().count()))]
    #[must_use]
    pub fn process(&self, text: &str) -> ProcessingResult {
        let cleaned = self.clean(text);

        let original_tokens = self.counter.count(text);
        let cleaned_tokens = self.counter.count(&cleaned);

        let result = ProcessingResult {
            original_chars: text.chars().count(),
            cleaned_chars: cleaned.chars().count(),
            original_tokens,
            cleaned_tokens,
            cleaned_text: cleaned,
        };

        info!(
            "Cleaned {} -> {} chars, {} -> {} tokens ({:.1}% saved)",
            result.original_chars,
            result.cleaned_chars,
            result.original_tokens,
            result.cleaned_tokens,
            result.token_savings_pct()
        );

        result
    }
}

/// Applies the enabled stages to the text without token accounting.
pub(crate) fn clean_with(text: &str, settings: &Settings) -> String {
    let mut processed = text.to_string();

    if settings.strip_code {
        processed = fence::strip_fences(&processed, settings.fence_policy);
        debug!(stage = "fences", chars = processed.chars().count());
    }

    if settings.strip_tags {
        processed = tags::strip_tags(&processed);
        debug!(stage = "tags", chars = processed.chars().count());
    }

    if settings.strip_markdown {
        processed = markdown::strip_markdown(&processed);
        debug!(stage = "markdown", chars = processed.chars().count());
    }

    // Always the final stage, independent of settings.
    processed = whitespace::normalize_whitespace(&processed);
    debug!(stage = "whitespace", chars = processed.chars().count());

    processed
}
