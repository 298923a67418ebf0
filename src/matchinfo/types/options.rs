//! Decoder configuration.

/// Size of the three header fields (phrase, column and row count).
pub const HEADER_LEN: usize = 12;

/// Default minimum blob size accepted before the header is trusted.
///
/// One phrase over one column is the smallest blob a real query produces
/// (12 header + 8 token counts + 12 hit triple).
pub const MIN_BLOB_LEN: usize = 32;

/// What to do with bytes past the end implied by the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingBytes {
    /// Fail with [`MatchInfoError::Truncated`](crate::MatchInfoError::Truncated).
    #[default]
    Reject,
    /// Decode the well-formed prefix and ignore the rest.
    Ignore,
}

/// Options controlling how strictly a blob is validated.
///
/// The default matches what the FTS engine produces for `'pcnalx'`: a
/// 32-byte sanity floor and no trailing bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub min_len: usize,
    pub trailing_bytes: TrailingBytes,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            min_len: MIN_BLOB_LEN,
            trailing_bytes: TrailingBytes::Reject,
        }
    }
}

impl DecodeOptions {
    /// Lowers the sanity floor to the header size, so blobs describing zero
    /// phrases or very few columns can be decoded.
    pub fn header_floor() -> Self {
        Self::default().with_min_len(HEADER_LEN)
    }

    /// Sets the minimum accepted length. Values below [`HEADER_LEN`] are
    /// raised to it, since the header is always read.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(HEADER_LEN);
        self
    }

    pub fn with_trailing_bytes(mut self, policy: TrailingBytes) -> Self {
        self.trailing_bytes = policy;
        self
    }
}
