//! Error types for locale registration and phrase loading

use crate::Bucket;
use thiserror::Error;

/// Errors raised while registering or loading locales.
///
/// Classification and resolution never fail; only the operations that
/// change the registry do.
#[derive(Debug, Error)]
pub enum ElapsedError {
    /// Locale code was empty after trimming
    #[error("Invalid locale code: code must not be blank")]
    InvalidCode,

    /// A locale with this code is already registered
    #[error("Locale already registered: {0}")]
    AlreadyExists(String),

    /// Phrase table lacks buckets the reference locale defines
    #[error("Incomplete phrase table for locale {code}: missing {}", join_buckets(.missing))]
    Incomplete { code: String, missing: Vec<Bucket> },

    /// Key in a phrase file does not name a bucket
    #[error("Unknown bucket: {0}")]
    UnknownBucket(String),

    /// Phrase file is not shaped as expected
    #[error("Failed to parse phrase file: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error returned by locale registration.
pub type RegistrationError = ElapsedError;

fn join_buckets(buckets: &[Bucket]) -> String {
    buckets
        .iter()
        .map(Bucket::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
