//! # matchinfo-reader
//!
//! Decoder for the statistics blob returned by the full-text-search
//! `matchinfo(table, 'pcnalx')` auxiliary function.
//!
//! The decoded [`DecodedStats`] carries per-column token counts and
//! per-phrase hit statistics for one result row, ready to be fed into a
//! ranking function.
//!
//! ```
//! # use matchinfo_reader::decode;
//! let words: [u32; 8] = [1, 1, 5, 3, 2, 1, 4, 2];
//! let raw: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
//! let stats = decode(&raw).unwrap();
//! assert_eq!(stats.row_count, 5);
//! assert_eq!(stats.phrase_stats[0].column_stats[0].total_term_frequency, 4);
//! ```
pub mod matchinfo;

// Re-export the main types for convenience
pub use matchinfo::{
    decode,
    decode_with,
    DecodeError,
    DecodeOptions,
    MatchInfoError,
    Result,
    TrailingBytes,
    MATCHINFO_FORMAT,
    types::models::{
        ColumnTermStats,
        DecodedStats,
        PhraseStats,
        SearchRow,
    },
};
