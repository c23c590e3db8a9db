//! Point-in-time view of the resting book
//!
//! Owned copy of the resting orders in price-time order, detached from the
//! live book.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::numeric::Quantity;
use types::order::Order;

/// Resting orders in ascending (price, arrival) order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub orders: Vec<Order>,
    /// Sequence the next fill will carry
    pub next_fill_sequence: u64,
}

impl BookSnapshot {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Sum of remaining quantities across the book
    pub fn total_quantity(&self) -> Quantity {
        self.orders.iter().map(|o| o.remaining_quantity).sum()
    }

    /// Resting order ids in book order
    pub fn ids(&self) -> Vec<u64> {
        self.orders.iter().map(|o| o.id.as_u64()).collect()
    }
}

/// Renders `Order(..) -> Order(..) -> None`
impl fmt::Display for BookSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for order in &self.orders {
            write!(f, "{} -> ", order)?;
        }
        write!(f, "None")
    }
}
