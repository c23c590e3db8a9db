//! Outcomes reported by the dispatch entry point
//!
//! One value per processed `(order, operation)` pair. Serializable so the
//! driver can emit them in JSON mode.

use serde::{Deserialize, Serialize};
use types::fill::Fill;
use types::ids::OrderId;
use types::numeric::Quantity;
use types::order::Order;

/// Result of processing one `(order, operation)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessOutcome {
    /// Sell order now resting
    Inserted { order_id: OrderId },
    /// Cancel processed; `removed` is None when the id was not resting
    Canceled {
        order_id: OrderId,
        removed: Option<Order>,
    },
    /// Buy order matched; fills in the order the resting orders were touched
    Matched { order_id: OrderId, fills: Vec<Fill> },
    /// Absent order or unrecognized operation tag
    Ignored,
}

impl ProcessOutcome {
    /// Fills produced, empty for anything but a match
    pub fn fills(&self) -> &[Fill] {
        match self {
            ProcessOutcome::Matched { fills, .. } => fills,
            _ => &[],
        }
    }

    /// Total quantity taken from the book
    pub fn filled_quantity(&self) -> Quantity {
        self.fills().iter().map(|fill| fill.quantity).sum()
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, ProcessOutcome::Ignored)
    }
}
