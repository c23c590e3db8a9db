//! Order book infrastructure module
//!
//! Contains price levels and the ask book.

pub mod price_level;
pub mod ask_book;

pub use price_level::PriceLevel;
pub use ask_book::AskBook;
