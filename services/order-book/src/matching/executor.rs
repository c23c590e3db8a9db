//! Fill generation
//!
//! Turns one step of a match into an immutable `Fill` record

use types::fill::Fill;
use types::numeric::{Price, Quantity};
use types::order::Order;

/// Fill executor with sequence generation
#[derive(Debug, Clone)]
pub struct FillExecutor {
    sequence_counter: u64,
}

impl FillExecutor {
    /// Create a new executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Sequence number the next fill will carry
    pub fn peek_sequence(&self) -> u64 {
        self.sequence_counter
    }

    /// Record a fill of `quantity` against a resting order
    ///
    /// `resting` is the resting order as it stands after the fill; the
    /// execution price is the resting order's price.
    pub fn execute_fill(
        &mut self,
        resting: &Order,
        incoming: &Order,
        price: Price,
        quantity: Quantity,
    ) -> Fill {
        let sequence = self.next_sequence();

        Fill::new(
            sequence,
            resting.id,
            incoming.id,
            price,
            quantity,
            resting.remaining_quantity,
            incoming.timestamp,
        )
    }
}

impl Default for FillExecutor {
    fn default() -> Self {
        Self::new(1)
    }
}
