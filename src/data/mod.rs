//! Synthetic user-profile data generation.

pub mod sample;

pub use sample::*;
