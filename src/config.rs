use crate::preset::PresetKind;

/// Policy for handling fenced code blocks.
///
/// The two policies are mutually exclusive by construction: a single enum
/// value selects one, so "strip the markers" and "strip the whole block"
/// can never both be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeFencePolicy {
    /// Remove only the fence marker lines (including any language hint),
    /// keeping the code body as plain text.
    Preserve,
    /// Remove the fence markers and everything between them.
    ///
    /// This is the default, matching the most aggressive cleaning mode.
    #[default]
    Remove,
}

impl CodeFencePolicy {
    /// Returns the ID string for this policy.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Remove => "remove",
        }
    }

    /// Parse a policy from its string ID.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "preserve" => Some(Self::Preserve),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }
}

/// Settings for one cleaning invocation.
///
/// Settings are immutable once built; the pipeline never mutates them.
/// Use [`Settings::builder()`] to construct a custom combination, or
/// [`PresetKind::settings`] for one of the named bundles.
///
/// # Examples
///
/// ```
/// use mdstrip::{CodeFencePolicy, Settings};
///
/// let settings = Settings::builder()
///     .strip_code(true)
///     .fence_policy(CodeFencePolicy::Preserve)
///     .strip_tags(true)
///     .strip_markdown(false)
///     .build();
///
/// assert!(!settings.strip_markdown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Settings {
    /// Strip fenced code blocks (policy chosen by `fence_policy`)
    pub strip_code: bool,

    /// How fenced code blocks are handled when `strip_code` is set
    pub fence_policy: CodeFencePolicy,

    /// Strip `<...>` tags (XML, HTML, React-style components)
    pub strip_tags: bool,

    /// Strip standard Markdown formatting markers
    pub strip_markdown: bool,
}

impl Settings {
    /// Creates a new settings builder with the default flags.
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Returns the settings bundle for a named preset.
    #[must_use]
    pub fn from_preset(preset: PresetKind) -> Self {
        preset.settings()
    }
}

impl Default for Settings {
    /// Defaults to the most aggressive cleaning: everything stripped,
    /// fenced blocks removed with their content.
    fn default() -> Self {
        Self {
            strip_code: true,
            fence_policy: CodeFencePolicy::Remove,
            strip_tags: true,
            strip_markdown: true,
        }
    }
}

/// Builder for creating [`Settings`].
#[derive(Debug, Default, Clone)]
pub struct SettingsBuilder {
    strip_code: Option<bool>,
    fence_policy: Option<CodeFencePolicy>,
    strip_tags: Option<bool>,
    strip_markdown: Option<bool>,
}

impl SettingsBuilder {
    /// Enables or disables fenced code block stripping.
    #[must_use]
    pub const fn strip_code(mut self, enabled: bool) -> Self {
        self.strip_code = Some(enabled);
        self
    }

    /// Sets the fenced code block policy.
    #[must_use]
    pub const fn fence_policy(mut self, policy: CodeFencePolicy) -> Self {
        self.fence_policy = Some(policy);
        self
    }

    /// Enables or disables `<...>` tag stripping.
    #[must_use]
    pub const fn strip_tags(mut self, enabled: bool) -> Self {
        self.strip_tags = Some(enabled);
        self
    }

    /// Enables or disables Markdown formatting stripping.
    #[must_use]
    pub const fn strip_markdown(mut self, enabled: bool) -> Self {
        self.strip_markdown = Some(enabled);
        self
    }

    /// Builds the settings.
    ///
    /// Unset flags fall back to the [`Settings::default`] values. Every
    /// flag combination is valid, so building cannot fail.
    #[must_use]
    pub fn build(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            strip_code: self.strip_code.unwrap_or(defaults.strip_code),
            fence_policy: self.fence_policy.unwrap_or(defaults.fence_policy),
            strip_tags: self.strip_tags.unwrap_or(defaults.strip_tags),
            strip_markdown: self.strip_markdown.unwrap_or(defaults.strip_markdown),
        }
    }
}
