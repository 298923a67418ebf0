//! # Blob Decoding
//!
//! Turns a raw `matchinfo('pcnalx')` blob into [`DecodedStats`]. Decoding
//! runs in two phases:
//! 1.  **Header**: read the three fixed-offset scalars and derive the
//!     [`Layout`] from them. The buffer length is checked against the exact
//!     size the header implies before anything is allocated.
//! 2.  **Walk**: step a cursor through the remaining bytes, 4 bytes at a
//!     time through the token count regions and 12 bytes at a time through
//!     the phrase data, writing each value into its pre-sized slot.

use log::{debug, trace};

use crate::matchinfo::types::error::{MatchInfoError, Result};
use crate::matchinfo::types::models::{ColumnTermStats, DecodedStats, PhraseStats};
use crate::matchinfo::types::options::{DecodeOptions, HEADER_LEN};
use crate::matchinfo::utils;

use super::layout::{Header, Layout, Region};

/// Decodes `raw` using `options`.
pub fn decode_with(raw: &[u8], options: &DecodeOptions) -> Result<DecodedStats> {
    let min = options.min_len.max(HEADER_LEN);
    if raw.len() < min {
        debug!("Rejecting blob of {} bytes (minimum {})", raw.len(), min);
        return Err(MatchInfoError::TooShort { len: raw.len(), min });
    }

    let header = Header::parse(raw)?;
    let layout = Layout::from_header(&header, raw.len())?;
    trace!(
        "Decoding matchinfo: phrases={}, columns={}, rows={}, token_counts@{}, phrase_data@{}",
        header.phrase_count,
        header.column_count,
        header.row_count,
        layout.token_counts_position,
        layout.phrase_data_position
    );

    let walk_len = layout.check(raw.len(), options.trailing_bytes)?;
    let data = &raw[..walk_len];

    let mut average_token_counts = vec![0u32; layout.column_count].into_boxed_slice();
    let mut current_row_token_counts = vec![0u32; layout.column_count].into_boxed_slice();
    let mut phrase_stats: Box<[PhraseStats]> = (0..layout.phrase_count)
        .map(|_| PhraseStats {
            column_stats: vec![ColumnTermStats::default(); layout.column_count].into_boxed_slice(),
        })
        .collect();

    let mut written = 0usize;
    let mut cursor = HEADER_LEN;
    while cursor < data.len() {
        let region = layout.locate(cursor);
        match region {
            Region::AverageTokens(column) => {
                average_token_counts[column] = utils::read_u32_at(data, cursor)?;
            }
            Region::RowTokens(column) => {
                current_row_token_counts[column] = utils::read_u32_at(data, cursor)?;
            }
            Region::PhraseData { phrase, column } => {
                let [current, total, matching] = utils::read_u32s_at::<3>(data, cursor)?;
                phrase_stats[phrase].column_stats[column] = ColumnTermStats {
                    current_row_term_frequency: current,
                    total_term_frequency: total,
                    matching_row_count: matching,
                };
            }
        }
        written += 1;
        cursor += Layout::step(region);
    }

    debug_assert_eq!(
        written,
        2 * layout.column_count + layout.phrase_count * layout.column_count,
        "every slot is written exactly once"
    );

    Ok(DecodedStats {
        phrase_count: header.phrase_count,
        column_count: header.column_count,
        row_count: header.row_count,
        average_token_counts,
        current_row_token_counts,
        phrase_stats,
    })
}
