//! Core data structures populated by the matchinfo decoder.
//!
//! This module defines the decoded statistics for a single search-result row:
//! - Header scalars (phrase, column and row counts)
//! - Per-column token counts (table average and current row)
//! - Per-phrase, per-column term statistics
//!
//! All arrays are boxed slices sized from the blob header at construction
//! time; nothing here can grow or be mutated after decoding.

use super::error::Result;

/// Format string to pass to the FTS `matchinfo()` auxiliary function.
///
/// The decoder expects exactly this layout: phrase count (`p`), column count
/// (`c`), row count (`n`), average token counts (`a`), current row token
/// counts (`l`) and the per-phrase/per-column hit triples (`x`).
pub const MATCHINFO_FORMAT: &str = "pcnalx";

/// Statistics for one phrase within one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnTermStats {
    /// Occurrences of the phrase in this column of the current row.
    pub current_row_term_frequency: u32,
    /// Occurrences of the phrase in this column across all rows.
    pub total_term_frequency: u32,
    /// Number of rows whose column contains the phrase at least once.
    pub matching_row_count: u32,
}

/// Statistics for one phrase of the query, one entry per table column.
///
/// Phrases are indexed by their position in the query, not by their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseStats {
    pub column_stats: Box<[ColumnTermStats]>,
}

impl PhraseStats {
    /// Returns the statistics for `column`, or `None` if out of range.
    pub fn column(&self, column: usize) -> Option<&ColumnTermStats> {
        self.column_stats.get(column)
    }
}

/// Fully decoded matchinfo blob for a single search-result row.
///
/// Owned by the caller; it keeps no reference to the buffer it was decoded
/// from, so the raw bytes may be dropped immediately after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStats {
    pub phrase_count: u32,
    pub column_count: u32,
    pub row_count: u32,
    /// Average token count per column across all rows (`column_count` entries).
    pub average_token_counts: Box<[u32]>,
    /// Token count per column for the current row (`column_count` entries).
    pub current_row_token_counts: Box<[u32]>,
    /// One entry per query phrase (`phrase_count` entries).
    pub phrase_stats: Box<[PhraseStats]>,
}

impl DecodedStats {
    /// Returns the statistics of the phrase at `index` in query order.
    pub fn phrase(&self, index: usize) -> Option<&PhraseStats> {
        self.phrase_stats.get(index)
    }

    /// Returns the statistics of `phrase` within `column`.
    pub fn column_stats(&self, phrase: usize, column: usize) -> Option<&ColumnTermStats> {
        self.phrase(phrase).and_then(|p| p.column(column))
    }

    /// Iterates over every `(phrase_index, column_index, stats)` triple in
    /// phrase-major, column-minor order, the same order as the blob.
    pub fn iter_column_stats(&self) -> impl Iterator<Item = (usize, usize, &ColumnTermStats)> + '_ {
        self.phrase_stats.iter().enumerate().flat_map(|(phrase, stats)| {
            stats
                .column_stats
                .iter()
                .enumerate()
                .map(move |(column, cts)| (phrase, column, cts))
        })
    }
}

/// A dictionary search-result row as returned by the FTS query.
///
/// Only `raw_match_info` is consumed by the decoder; the remaining fields are
/// carried through for the ranking and display layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRow {
    pub id: i64,
    pub word: String,
    pub definition: String,
    /// Id of the root entry this word derives from.
    pub root_word_id: i64,
    pub is_root: bool,
    /// Raw output of `matchinfo(table, 'pcnalx')`.
    pub raw_match_info: Vec<u8>,
    /// Raw output of the FTS `offsets()` function, passed through untouched.
    pub offsets: String,
}

impl SearchRow {
    /// Decodes this row's matchinfo blob with the default options.
    pub fn match_info(&self) -> Result<DecodedStats> {
        crate::matchinfo::decode(&self.raw_match_info)
    }
}
