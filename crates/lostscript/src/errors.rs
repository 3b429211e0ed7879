//! # Error Types

/// Errors from lostscript operations.
#[derive(Debug, thiserror::Error)]
pub enum LostScriptError {
    /// A language identifier was registered twice.
    #[error("charset already registered for language '{0}'")]
    DuplicateRegistration(String),

    /// A language identifier was never registered.
    #[error("no charset registered for language '{0}'")]
    UnknownLanguage(String),

    /// A structure element is neither a valid leaf nor a recognized container.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A symbol id lies outside ``[0, size)``.
    #[error("symbol id {id} out of range for vocabulary of size {size}")]
    IndexOutOfRange {
        /// The offending id, widened for reporting.
        id: u128,

        /// The vocabulary size.
        size: usize,
    },

    /// The operation has no implementation for this vocabulary.
    #[error("{op} is not implemented for charset '{lang}'")]
    NotImplemented {
        /// The language identifier.
        lang: String,

        /// The operation name.
        op: &'static str,
    },

    /// Vocabulary declaration is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// A normalization chain finished without resolving a character.
    #[error("charset '{lang}' has no resolution for {ch:?}")]
    Unnormalizable {
        /// The language identifier.
        lang: String,

        /// The unresolved character.
        ch: char,
    },

    /// JSON structure error.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for lostscript operations.
pub type LSResult<T> = core::result::Result<T, LostScriptError>;
