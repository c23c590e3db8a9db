//! Types library for the ask-side order book
//!
//! This library provides the value types shared by the book, the matching
//! logic and the batch driver.
//!
//! # Modules
//! - `ids`: Order identifiers
//! - `numeric`: Exact decimal prices and integer quantities
//! - `order`: Order terms, side and operation tags
//! - `fill`: Immutable fill records produced by matching
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod fill;
pub mod errors;
