//! Input helpers.
//!
//! - CSV ingest + row accounting (`ingest`)

pub mod ingest;

pub use ingest::*;
