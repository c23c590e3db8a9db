//! Order Book Service
//!
//! Single-instrument book of resting sell orders that matches incoming buy
//! orders under price-time priority.
//!
//! **Key Invariants:**
//! - Resting asks sorted by price ascending, then arrival
//! - Only sell orders with remaining quantity rest in the book
//! - Resting order ids are unique
//! - Remaining quantity never increases and never goes negative
//! - An incoming buy never rests; its unfilled remainder is dropped

pub mod book;
pub mod matching;
pub mod engine;
pub mod error;
pub mod events;
pub mod snapshot;
pub mod driver;
pub mod config;

pub use engine::{BookConfig, OrderBook};
pub use error::BookError;
pub use events::ProcessOutcome;
pub use snapshot::BookSnapshot;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
