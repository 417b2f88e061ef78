//! Error types for wikicite-identifiers

use thiserror::Error;

/// Result type alias for rewrite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why an identifier could not be hyphenated.
///
/// `Degraded` is recovered where it happens: the identifier is emitted without
/// hyphens. `Fatal` means a detector captured something the hyphenation table
/// cannot place at all and the run has to stop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HyphenationError {
    /// Wrong length or non-numeric where digits are required
    #[error("Malformed ISBN: {0:?}")]
    Degraded(String),

    /// Well-formed, but not placeable in the registration ranges
    #[error("Cannot hyphenate ISBN {raw:?}: {cause}")]
    Fatal { raw: String, cause: String },
}

/// Main error type for rewrite operations
#[derive(Error, Debug)]
pub enum Error {
    /// An identifier normalizer hit an unrecoverable hyphenation failure
    #[error("Normalization aborted at line {line}: {source}")]
    Normalization {
        line: usize,
        #[source]
        source: HyphenationError,
    },
}
