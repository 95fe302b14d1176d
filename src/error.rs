use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the mdstrip library.
///
/// Text rewriting itself is total over arbitrary UTF-8 and never fails;
/// errors only arise around the edges (tokenizer vocabulary, serialization).
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The BPE vocabulary could not be loaded.
    ///
    /// Token counts must never silently degrade to 0, so a missing or
    /// corrupt vocabulary is reported loudly instead.
    #[error("Tokenizer unavailable: {message}")]
    Tokenizer {
        /// Underlying loader error message
        message: String,
    },

    /// JSON serialization error.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Creates a tokenizer-unavailable error.
    #[must_use]
    pub fn tokenizer(message: impl Into<String>) -> Self {
        Self::Tokenizer {
            message: message.into(),
        }
    }

    /// Returns true if this is a tokenizer-unavailable error.
    #[must_use]
    pub const fn is_tokenizer(&self) -> bool {
        matches!(self, Self::Tokenizer { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_error() {
        let err = Error::tokenizer("vocabulary missing");
        assert!(err.is_tokenizer());
        assert!(err.to_string().contains("vocabulary missing"));
        assert!(err.to_string().contains("Tokenizer unavailable"));
    }

    #[test]
    fn test_serialization_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(!err.is_tokenizer());
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_clone() {
        let err = Error::tokenizer("test");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
