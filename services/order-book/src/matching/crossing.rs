//! Crossing detection logic
//!
//! Determines when an incoming bid may trade against a resting ask

use types::numeric::Price;

/// Check if a bid and ask can match at given prices
///
/// For a buy order to match with a sell order the buy limit must be at or
/// above the ask. Price priority is a hard stop: the first ask above the
/// limit ends matching.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}
