//! Fill records
//!
//! A fill is an immutable snapshot of one resting order being consumed by an
//! incoming buy. It is detached from the live book entry, so later matches
//! never change what an earlier call reported.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One resting order touched by a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub sequence: u64, // Per-book monotonic sequence

    // Order references
    pub resting_order_id: OrderId,
    pub incoming_order_id: OrderId,

    // Fill details (execution at the resting order's price)
    pub price: Price,
    pub quantity: Quantity,

    /// Resting order's remaining quantity after this fill
    pub resting_remaining: Quantity,

    /// Incoming order's timestamp
    pub executed_at: i64,
}

impl Fill {
    /// Create a new fill record
    pub fn new(
        sequence: u64,
        resting_order_id: OrderId,
        incoming_order_id: OrderId,
        price: Price,
        quantity: Quantity,
        resting_remaining: Quantity,
        executed_at: i64,
    ) -> Self {
        Self {
            sequence,
            resting_order_id,
            incoming_order_id,
            price,
            quantity,
            resting_remaining,
            executed_at,
        }
    }

    /// True when the fill consumed the resting order entirely
    pub fn is_complete(&self) -> bool {
        self.resting_remaining == 0
    }

    /// Notional value of the fill
    pub fn notional(&self) -> rust_decimal::Decimal {
        self.price.as_decimal() * rust_decimal::Decimal::from(self.quantity)
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fill(seq: {}, resting: {}, price: {}, qty: {}, left: {})",
            self.sequence, self.resting_order_id, self.price, self.quantity, self.resting_remaining
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_fill(resting_remaining: Quantity) -> Fill {
        Fill::new(
            1,
            OrderId::new(2),
            OrderId::new(5),
            Price::from_u64(2),
            3,
            resting_remaining,
            5,
        )
    }

    #[test]
    fn test_fill_complete() {
        assert!(sample_fill(0).is_complete());
        assert!(!sample_fill(1).is_complete());
    }

    #[test]
    fn test_fill_notional() {
        assert_eq!(sample_fill(1).notional(), Decimal::from(6));
    }

    #[test]
    fn test_fill_display() {
        assert_eq!(
            sample_fill(1).to_string(),
            "Fill(seq: 1, resting: 2, price: 2, qty: 3, left: 1)"
        );
    }

    #[test]
    fn test_fill_serialization() {
        let fill = sample_fill(1);
        let json = serde_json::to_string(&fill).unwrap();
        let deserialized: Fill = serde_json::from_str(&json).unwrap();
        assert_eq!(fill, deserialized);
    }
}
