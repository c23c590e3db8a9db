//! Book errors
//!
//! Every variant is raised before the book is touched, so a failed call
//! leaves the resting orders exactly as they were.

use thiserror::Error;
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Wrong side for the operation, or an unknown tag in strict mode
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Order {0} is already resting")]
    DuplicateOrderId(OrderId),

    #[error("Order {0} has no remaining quantity to rest")]
    ZeroQuantity(OrderId),

    #[error("Order {order_id} has remaining {remaining} above its quantity {quantity}")]
    InvalidQuantity {
        order_id: OrderId,
        quantity: Quantity,
        remaining: Quantity,
    },

    /// Resting the order would push its level total past `Quantity::MAX`
    #[error("Order {order_id} overflows the quantity resting at {price}")]
    QuantityOverflow { order_id: OrderId, price: Price },
}

impl BookError {
    /// True for the wrong-side error raised by insert and match
    pub fn is_invalid_side(&self) -> bool {
        matches!(self, BookError::Order(OrderError::InvalidSide { .. }))
    }
}
