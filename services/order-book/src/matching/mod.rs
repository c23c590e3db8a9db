//! Matching logic module
//!
//! Implements the crossing rule and fill generation for price-time matching

pub mod crossing;
pub mod executor;

pub use crossing::can_match;
pub use executor::FillExecutor;
