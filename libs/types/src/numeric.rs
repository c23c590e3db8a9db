//! Exact numeric types for prices and quantities
//!
//! Prices use rust_decimal so that both integer test inputs ("10") and
//! decimal ones ("10.25") compare exactly. Quantities are whole units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::OrderError;

/// Order size in whole units
pub type Quantity = u64;

/// Limit price
///
/// Totally ordered, so it can key the price levels of the book directly.
/// Negative prices are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price, rejecting negative values
    pub fn try_new(value: Decimal) -> Result<Self, OrderError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(OrderError::InvalidPrice(value.to_string()));
        }
        Ok(Self(value.normalize()))
    }

    /// Create a price from a whole number
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| OrderError::InvalidPrice(s.to_string()))?;
        Self::try_new(value)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = OrderError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_ordering() {
        assert!(Price::from_u64(1) < Price::from_u64(2));
        assert!(Price::from_str("1.5").unwrap() < Price::from_u64(2));
        assert!(Price::from_str("10").unwrap() > Price::from_str("9.99").unwrap());
    }

    #[test]
    fn test_price_equal_scale_insensitive() {
        // "2" and "2.00" must land on the same price level
        assert_eq!(Price::from_str("2").unwrap(), Price::from_str("2.00").unwrap());
    }

    #[test]
    fn test_price_rejects_negative() {
        let err = Price::from_str("-1").unwrap_err();
        assert_eq!(err, OrderError::InvalidPrice("-1".to_string()));
    }

    #[test]
    fn test_price_rejects_garbage() {
        assert!(Price::from_str("ten").is_err());
    }

    #[test]
    fn test_price_display_normalized() {
        assert_eq!(Price::from_str("3.50").unwrap().to_string(), "3.5");
        assert_eq!(Price::from_u64(10).to_string(), "10");
    }

    #[test]
    fn test_price_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_str("1.25").unwrap()).unwrap();
        assert_eq!(json, "\"1.25\"");
    }

    #[test]
    fn test_price_deserialize_validates() {
        let price: Price = serde_json::from_str("\"2.50\"").unwrap();
        assert_eq!(price, Price::from_str("2.5").unwrap());
        assert_eq!(price.to_string(), "2.5");

        assert!(serde_json::from_str::<Price>("\"-1\"").is_err());
    }
}
