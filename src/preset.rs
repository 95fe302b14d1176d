//! Named cleaning presets.
//!
//! Bundles of [`Settings`] for the common cases, so callers don't have to
//! pick individual flags: full plain-text conversion, or tag removal that
//! leaves standard Markdown intact.

use crate::config::{CodeFencePolicy, Settings};
use serde::{Deserialize, Serialize};

/// Kind of cleaning preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetKind {
    /// Strip everything: code fences (with content), tags, and Markdown
    /// formatting. Returns pure text.
    PlainText,
    /// Strip only `<...>` tags (like `<Tip>` wrappers), keeping standard
    /// Markdown headers, lists, links, and code blocks.
    MarkdownOnly,
}

impl PresetKind {
    /// Returns the ID string for this preset.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::PlainText => "plain-text",
            Self::MarkdownOnly => "markdown-only",
        }
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PlainText => "Removes XML tags, code blocks, and Markdown formatting",
            Self::MarkdownOnly => "Removes XML tags but keeps standard Markdown",
        }
    }

    /// Returns all available preset kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::PlainText, Self::MarkdownOnly]
    }

    /// Parse a preset kind from its string ID.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "plain-text" => Some(Self::PlainText),
            "markdown-only" => Some(Self::MarkdownOnly),
            _ => None,
        }
    }

    /// Returns the settings bundle for this preset.
    #[must_use]
    pub fn settings(self) -> Settings {
        match self {
            Self::PlainText => Settings::builder()
                .strip_code(true)
                .fence_policy(CodeFencePolicy::Remove)
                .strip_tags(true)
                .strip_markdown(true)
                .build(),
            Self::MarkdownOnly => Settings::builder()
                .strip_code(false)
                .strip_tags(true)
                .strip_markdown(false)
                .build(),
        }
    }
}
