//! Order types
//!
//! An order carries immutable terms (id, price, quantity, side, timestamp)
//! plus a single mutable field, the remaining quantity.

use crate::errors::OrderError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }

    /// Build a side from an "is buy" flag
    pub fn from_is_buy(is_buy: bool) -> Self {
        if is_buy {
            Side::BUY
        } else {
            Side::SELL
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, Side::BUY)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::BUY => write!(f, "BUY"),
            Side::SELL => write!(f, "SELL"),
        }
    }
}

/// Operation tag accompanying an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Rest a sell order in the book
    Insert,
    /// Remove a resting order by id
    Cancel,
    /// Match a buy order against the book
    Match,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Cancel => "cancel",
            Operation::Match => "match",
        }
    }
}

impl FromStr for Operation {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insert" => Ok(Operation::Insert),
            "cancel" => Ok(Operation::Cancel),
            "match" => Ok(Operation::Match),
            _ => Err(OrderError::UnknownOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A limit order
///
/// `remaining_quantity` starts at `quantity` and only ever decreases.
/// Every other field is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    pub remaining_quantity: Quantity,
    pub side: Side,
    pub timestamp: i64,
}

impl Order {
    /// Create a new, unfilled order
    pub fn new(id: OrderId, price: Price, quantity: Quantity, side: Side, timestamp: i64) -> Self {
        Self {
            id,
            price,
            quantity,
            remaining_quantity: quantity,
            side,
            timestamp,
        }
    }

    /// Shorthand for a sell order
    pub fn sell(id: u64, price: Price, quantity: Quantity, timestamp: i64) -> Self {
        Self::new(OrderId::new(id), price, quantity, Side::SELL, timestamp)
    }

    /// Shorthand for a buy order
    pub fn buy(id: u64, price: Price, quantity: Quantity, timestamp: i64) -> Self {
        Self::new(OrderId::new(id), price, quantity, Side::BUY, timestamp)
    }

    /// Fail with `InvalidSide` unless the order is on `expected`
    pub fn ensure_side(&self, expected: Side) -> Result<(), OrderError> {
        if self.side != expected {
            return Err(OrderError::InvalidSide {
                expected,
                actual: self.side,
            });
        }
        Ok(())
    }

    /// Check quantity invariant: remaining never exceeds the original size
    pub fn check_invariant(&self) -> bool {
        self.remaining_quantity <= self.quantity
    }

    /// Quantity already filled
    pub fn filled_quantity(&self) -> Quantity {
        self.quantity - self.remaining_quantity
    }

    /// Check if order is completely filled
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Reduce the remaining quantity by a fill
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity
    pub fn add_fill(&mut self, fill_quantity: Quantity) {
        assert!(
            fill_quantity <= self.remaining_quantity,
            "Fill would exceed remaining quantity"
        );

        self.remaining_quantity -= fill_quantity;
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(id: {}, price: {}, qty: {}, isBuy: {}, time: {})",
            self.id,
            self.price,
            self.remaining_quantity,
            self.side.is_buy(),
            self.timestamp
        )
    }
}
