//! # Header & Offset Arithmetic
//!
//! The blob stores no offsets of its own. Every region boundary is derived
//! from the phrase and column counts in the header, so the header has to be
//! read in full before anything else in the buffer can be located.

use log::debug;

use crate::matchinfo::types::error::{MatchInfoError, Result};
use crate::matchinfo::types::options::{TrailingBytes, HEADER_LEN};
use crate::matchinfo::utils::{self, U32_WIDTH};

const PHRASE_COUNT_POSITION: usize = 0;
const COLUMN_COUNT_POSITION: usize = 4;
const ROW_COUNT_POSITION: usize = 8;
const AVERAGE_TOKEN_COUNTS_POSITION: usize = HEADER_LEN;

/// Integers per phrase/column cell: current row hits, total hits, matching rows.
pub const CELL_WIDTH: usize = 3;

/// Bytes occupied by one phrase/column cell.
pub const CELL_BYTES: usize = CELL_WIDTH * U32_WIDTH;

/// The three scalar fields at the start of every blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub phrase_count: u32,
    pub column_count: u32,
    pub row_count: u32,
}

impl Header {
    /// Reads the header from its fixed offsets.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Ok(Self {
            phrase_count: utils::read_u32_at(data, PHRASE_COUNT_POSITION)?,
            column_count: utils::read_u32_at(data, COLUMN_COUNT_POSITION)?,
            row_count: utils::read_u32_at(data, ROW_COUNT_POSITION)?,
        })
    }
}

/// Region boundaries derived from a [`Header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub phrase_count: usize,
    pub column_count: usize,
    pub token_counts_position: usize,
    pub phrase_data_position: usize,
    /// Exact length of a well-formed blob with this header.
    pub expected_len: u64,
}

/// The logical slot a cursor position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Region {
    AverageTokens(usize),
    RowTokens(usize),
    PhraseData { phrase: usize, column: usize },
}

impl Layout {
    /// Computes the layout for `header`.
    ///
    /// The arithmetic is done in `u64` with overflow checks. A header whose
    /// sizes do not fit is reported as `Truncated` against `found`, since no
    /// real buffer can be that long.
    ///
    /// Phrases over zero columns are rejected the same way: such a header
    /// claims phrase data that no blob can carry, and the phrase count would
    /// otherwise size the output without any bound from the buffer.
    pub fn from_header(header: &Header, found: usize) -> Result<Self> {
        let p = u64::from(header.phrase_count);
        let c = u64::from(header.column_count);
        let width = U32_WIDTH as u64;

        if p > 0 && c == 0 {
            debug!("Header declares {} phrases over zero columns", p);
            return Err(MatchInfoError::Truncated {
                expected: u64::MAX,
                found,
            });
        }

        let expected_len = (|| {
            let token_region = c.checked_mul(width)?;
            let phrase_region = p.checked_mul(c)?.checked_mul(CELL_BYTES as u64)?;
            (HEADER_LEN as u64)
                .checked_add(token_region.checked_mul(2)?)?
                .checked_add(phrase_region)
        })()
        .ok_or(MatchInfoError::Truncated {
            expected: u64::MAX,
            found,
        })?;

        // Anything longer than the address space can't match a real buffer.
        let overflow = || MatchInfoError::Truncated { expected: expected_len, found };
        let phrase_count = usize::try_from(p).map_err(|_| overflow())?;
        let column_count = usize::try_from(c).map_err(|_| overflow())?;
        usize::try_from(expected_len).map_err(|_| overflow())?;

        let token_counts_position = AVERAGE_TOKEN_COUNTS_POSITION + column_count * U32_WIDTH;
        let phrase_data_position = token_counts_position + column_count * U32_WIDTH;

        Ok(Self {
            phrase_count,
            column_count,
            token_counts_position,
            phrase_data_position,
            expected_len,
        })
    }

    /// Validates `len` against the exact-size invariant and returns the
    /// number of bytes the walk should cover.
    pub fn check(&self, len: usize, policy: TrailingBytes) -> Result<usize> {
        let found = len as u64;
        let truncated = MatchInfoError::Truncated {
            expected: self.expected_len,
            found: len,
        };
        if found < self.expected_len {
            debug!(
                "Blob shorter than header implies: expected {} bytes, found {}",
                self.expected_len, len
            );
            return Err(truncated);
        }
        if found > self.expected_len {
            match policy {
                TrailingBytes::Reject => {
                    debug!("Blob has {} trailing bytes, rejecting", found - self.expected_len);
                    return Err(truncated);
                }
                TrailingBytes::Ignore => {
                    debug!("Ignoring {} trailing bytes", found - self.expected_len);
                }
            }
        }
        // `from_header` already proved expected_len fits in usize.
        Ok(self.expected_len as usize)
    }

    /// Classifies a cursor position (at or past the header) into the slot
    /// it fills.
    pub(crate) fn locate(&self, cursor: usize) -> Region {
        if cursor < self.token_counts_position {
            Region::AverageTokens((cursor - AVERAGE_TOKEN_COUNTS_POSITION) / U32_WIDTH)
        } else if cursor < self.phrase_data_position {
            Region::RowTokens((cursor - self.token_counts_position) / U32_WIDTH)
        } else {
            let position = (cursor - self.phrase_data_position) / U32_WIDTH;
            Region::PhraseData {
                phrase: position / (self.column_count * CELL_WIDTH),
                column: (position / CELL_WIDTH) % self.column_count,
            }
        }
    }

    /// Number of bytes the cursor advances after filling `region`.
    pub(crate) fn step(region: Region) -> usize {
        match region {
            Region::AverageTokens(_) | Region::RowTokens(_) => U32_WIDTH,
            Region::PhraseData { .. } => CELL_BYTES,
        }
    }
}
