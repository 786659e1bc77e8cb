use thiserror::Error;

/// Result type alias using the engine's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the engine can produce.
///
/// Degenerate inputs (empty text) are *not* errors; they yield empty
/// outcomes. Only configuration problems and annotation/text mismatches
/// during restore are fatal.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied custom pattern failed to compile. Built-in patterns
    /// are unaffected; the call fails before any scanning.
    #[error("invalid custom pattern for category {category}: {source}")]
    InvalidPattern {
        category: String,
        source: regex_lite::Error,
    },

    /// During restore, the expected placeholder literal was not found at the
    /// offset derived from the annotation ledger. The annotations do not
    /// belong to the supplied text.
    #[error("restore mismatch for {id}: expected placeholder at byte offset {offset}")]
    RestoreMismatch { id: String, offset: usize },
}
