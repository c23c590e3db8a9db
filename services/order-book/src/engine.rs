//! Order book core
//!
//! Owns the resting asks and is the only mutation surface: insert, cancel,
//! match and the tag-based dispatch on top of them. Every call either
//! fails before touching the book or leaves it sorted by (price, arrival).

use tracing::{debug, warn};
use types::fill::Fill;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Operation, Order, Side};

use crate::book::AskBook;
use crate::error::BookError;
use crate::events::ProcessOutcome;
use crate::matching::{crossing, executor::FillExecutor};
use crate::snapshot::BookSnapshot;

/// Configuration for an order book
#[derive(Debug, Clone)]
pub struct BookConfig {
    /// Reject unrecognized operation tags instead of ignoring them
    pub strict_operations: bool,
    /// Sequence number of the first fill
    pub starting_sequence: u64,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            strict_operations: false,
            starting_sequence: 1,
        }
    }
}

/// Single-instrument book of resting sell orders
#[derive(Debug, Clone)]
pub struct OrderBook {
    asks: AskBook,
    /// Fill executor with sequence generation
    executor: FillExecutor,
    config: BookConfig,
}

impl OrderBook {
    /// Create an empty book with default configuration
    pub fn new() -> Self {
        Self::with_config(BookConfig::default())
    }

    pub fn with_config(config: BookConfig) -> Self {
        Self {
            asks: AskBook::new(),
            executor: FillExecutor::new(config.starting_sequence),
            config,
        }
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Rest a sell order behind every order already at its price
    ///
    /// Fails without touching the book when the order is not a sell, has a
    /// bad remaining quantity, reuses the id of a resting order, or would
    /// overflow the total quantity of its level.
    pub fn insert(&mut self, order: Order) -> Result<(), BookError> {
        order.ensure_side(Side::SELL)?;

        if order.remaining_quantity == 0 {
            return Err(BookError::ZeroQuantity(order.id));
        }
        if !order.check_invariant() {
            return Err(BookError::InvalidQuantity {
                order_id: order.id,
                quantity: order.quantity,
                remaining: order.remaining_quantity,
            });
        }
        if self.asks.contains(&order.id) {
            return Err(BookError::DuplicateOrderId(order.id));
        }
        if self
            .asks
            .level_quantity(&order.price)
            .checked_add(order.remaining_quantity)
            .is_none()
        {
            return Err(BookError::QuantityOverflow {
                order_id: order.id,
                price: order.price,
            });
        }

        debug!(
            order_id = %order.id,
            price = %order.price,
            quantity = order.remaining_quantity,
            "Resting sell order"
        );
        self.asks.insert(order);
        Ok(())
    }

    /// Remove a resting order by id
    ///
    /// A missing id is a no-op and returns None.
    pub fn cancel(&mut self, order_id: OrderId) -> Option<Order> {
        let removed = self.asks.remove(&order_id);

        match &removed {
            Some(order) => debug!(
                order_id = %order_id,
                price = %order.price,
                remaining = order.remaining_quantity,
                "Canceled resting order"
            ),
            None => debug!(order_id = %order_id, "Cancel for order not in book"),
        }
        removed
    }

    /// Match an incoming buy against the book
    ///
    /// Consumes the cheapest, then oldest, asks while the buy has quantity
    /// left and the best ask is within its limit. Whatever the book cannot
    /// fill is dropped; the buy never rests.
    pub fn match_order(&mut self, order: Order) -> Result<Vec<Fill>, BookError> {
        order.ensure_side(Side::BUY)?;

        let mut incoming = order;
        let mut fills = Vec::new();

        while incoming.remaining_quantity > 0 {
            let Some((ask_price, ask_level)) = self.asks.best_ask_level_mut() else {
                break;
            };

            // Price priority is a hard stop
            if !crossing::can_match(incoming.price, ask_price) {
                break;
            }

            let Some(front) = ask_level.peek_front() else {
                break;
            };
            let match_qty = front.remaining_quantity.min(incoming.remaining_quantity);

            let Some(resting) = ask_level.fill_front(match_qty) else {
                break;
            };
            let level_exhausted = ask_level.is_empty();

            incoming.add_fill(match_qty);

            if resting.is_filled() {
                self.asks.unindex(&resting.id);
            }
            if level_exhausted {
                self.asks.remove_level(&ask_price);
            }

            let fill = self
                .executor
                .execute_fill(&resting, &incoming, ask_price, match_qty);
            debug!(
                sequence = fill.sequence,
                resting_order_id = %fill.resting_order_id,
                price = %fill.price,
                quantity = fill.quantity,
                resting_remaining = fill.resting_remaining,
                "Filled resting order"
            );
            fills.push(fill);
        }

        if incoming.remaining_quantity > 0 {
            debug!(
                order_id = %incoming.id,
                unfilled = incoming.remaining_quantity,
                "Dropping unfilled remainder of buy order"
            );
        }

        Ok(fills)
    }

    /// Route an already parsed operation
    pub fn apply(&mut self, order: Order, operation: Operation) -> Result<ProcessOutcome, BookError> {
        let order_id = order.id;

        match operation {
            Operation::Insert => {
                self.insert(order)?;
                Ok(ProcessOutcome::Inserted { order_id })
            }
            Operation::Cancel => Ok(ProcessOutcome::Canceled {
                order_id,
                removed: self.cancel(order_id),
            }),
            Operation::Match => {
                let fills = self.match_order(order)?;
                Ok(ProcessOutcome::Matched { order_id, fills })
            }
        }
    }

    /// Dispatch an `(order, operation tag)` pair
    ///
    /// An absent order is ignored. An unrecognized tag is ignored too,
    /// unless the book was configured with `strict_operations`.
    pub fn process(&mut self, order: Option<Order>, operation: &str) -> Result<ProcessOutcome, BookError> {
        let Some(order) = order else {
            debug!(operation, "No order supplied, ignoring");
            return Ok(ProcessOutcome::Ignored);
        };

        let operation = match operation.parse::<Operation>() {
            Ok(operation) => operation,
            Err(err) if self.config.strict_operations => return Err(err.into()),
            Err(_) => {
                warn!(order_id = %order.id, operation, "Ignoring unrecognized operation");
                return Ok(ProcessOutcome::Ignored);
            }
        };

        self.apply(order, operation)
    }

    /// Resting orders in price-time order
    pub fn resting_orders(&self) -> impl Iterator<Item = &Order> {
        self.asks.iter()
    }

    /// Owned copy of the resting orders
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            orders: self.asks.iter().cloned().collect(),
            next_fill_sequence: self.executor.peek_sequence(),
        }
    }

    /// Look up a resting order
    pub fn get(&self, order_id: OrderId) -> Option<&Order> {
        self.asks.get(&order_id)
    }

    /// Lowest ask with the total quantity resting there
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best_ask()
    }

    /// Aggregated quantity of the best `depth` price levels
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.asks.depth_snapshot(depth)
    }

    pub fn len(&self) -> usize {
        self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty()
    }

    pub fn level_count(&self) -> usize {
        self.asks.level_count()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
