//! Foundational data structures, error types, and decode options.

pub mod error;
pub mod models;
pub mod options;
