//! Blob parsing layer for matchinfo statistics.
//!
//! # Module Organization
//!
//! - [`layout`]: Reads the fixed header and derives region offsets from it
//! - [`decoder`]: Walks the blob and fills the fixed-size output
//!
//! # Architecture
//!
//! ```text
//! Blob Structure (all fields little-endian u32):
//! ┌──────────────────────┐
//! │  Header (p, c, n)    │ ← layout::Header::parse()
//! ├──────────────────────┤
//! │  Avg tokens   [c]    │
//! ├──────────────────────┤ ← Layout::token_counts_position
//! │  Row tokens   [c]    │
//! ├──────────────────────┤ ← Layout::phrase_data_position
//! │  Phrase data  [p*c]  │ ← decoder::decode_with()
//! │  (3 u32 per cell,    │
//! │   phrase-major)      │
//! └──────────────────────┘
//! ```

pub mod decoder;
pub mod layout;
