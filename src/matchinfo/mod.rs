//! Core matchinfo decoding module

pub mod format;
pub mod types;
mod utils;

pub use types::error::{DecodeError, MatchInfoError, Result};
pub use types::models::{ColumnTermStats, DecodedStats, PhraseStats, SearchRow, MATCHINFO_FORMAT};
pub use types::options::{DecodeOptions, TrailingBytes, HEADER_LEN, MIN_BLOB_LEN};

/// Decode a `matchinfo('pcnalx')` blob with the default options.
///
/// # Errors
/// Returns an error if:
/// - The blob is shorter than [`MIN_BLOB_LEN`] (`TooShort`)
/// - The blob length differs from the size its header implies (`Truncated`)
pub fn decode(raw: &[u8]) -> Result<DecodedStats> {
    decode_with(raw, &DecodeOptions::default())
}

/// Decode a blob with explicit [`DecodeOptions`].
pub fn decode_with(raw: &[u8], options: &DecodeOptions) -> Result<DecodedStats> {
    format::decoder::decode_with(raw, options)
}
