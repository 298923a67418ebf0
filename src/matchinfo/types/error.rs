//! Custom error types for the matchinfo-reader crate.

use thiserror::Error;

/// The error type returned when a matchinfo blob cannot be decoded.
///
/// Both variants are permanent: a blob that fails once will fail on every
/// attempt, so callers should treat the row's statistics as unusable rather
/// than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchInfoError {
    /// The buffer failed the minimum-size gate before any header field was read.
    #[error("Blob too short: {len} bytes, at least {min} bytes required")]
    TooShort { len: usize, min: usize },

    /// The buffer does not match the exact size implied by its own header.
    ///
    /// `expected` is the length the failed check required: the header-implied
    /// total for the size check, or the end offset of a bounds-checked read.
    /// It is `u64::MAX` when the header describes a blob no buffer can hold.
    #[error(
        "Blob length does not match its header: expected {expected} bytes, found {found} bytes"
    )]
    Truncated { expected: u64, found: usize },
}

/// Name used by callers that only care that decoding failed.
pub type DecodeError = MatchInfoError;

/// A convenience `Result` type alias using the crate's `MatchInfoError` type.
pub type Result<T> = std::result::Result<T, MatchInfoError>;
