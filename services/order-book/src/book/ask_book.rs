//! Ask (sell-side) order book
//!
//! Maintains resting sell orders sorted by price ascending (best ask first).
//! Uses BTreeMap for deterministic iteration order, with an id index so a
//! cancel goes straight to the level holding the order.

use std::collections::{BTreeMap, HashMap};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Ask (sell) side order book
///
/// Orders are sorted by price ascending, so the lowest ask is first.
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    /// Price levels sorted ascending (lowest price first)
    levels: BTreeMap<Price, PriceLevel>,
    /// Resting order id -> price of its level
    index: HashMap<OrderId, Price>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an order at the back of its price level
    ///
    /// The caller guarantees the id is not already resting.
    pub fn insert(&mut self, order: Order) {
        debug_assert!(!self.index.contains_key(&order.id));

        self.index.insert(order.id, order.price);
        self.levels
            .entry(order.price)
            .or_insert_with(PriceLevel::new)
            .push_back(order);
    }

    /// Remove an order from the ask book
    ///
    /// Returns the removed order, or None if the id is not resting
    pub fn remove(&mut self, order_id: &OrderId) -> Option<Order> {
        let price = self.index.remove(order_id)?;
        let level = self.levels.get_mut(&price)?;
        let order = level.remove(order_id)?;

        // Remove empty price levels to keep book clean
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(order)
    }

    /// Look up a resting order by id
    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        let price = self.index.get(order_id)?;
        self.levels.get(price)?.get(order_id)
    }

    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.index.contains_key(order_id)
    }

    /// Get the best ask (lowest price) with its total quantity
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        // BTreeMap iter is ascending, so first() gives us lowest price
        self.levels
            .first_key_value()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Total remaining quantity resting at `price`, zero for an empty level
    pub fn level_quantity(&self, price: &Price) -> Quantity {
        self.levels.get(price).map_or(0, PriceLevel::total_quantity)
    }

    /// Get mutable reference to the best ask level
    pub(crate) fn best_ask_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels.iter_mut().next().map(|(price, level)| (*price, level))
    }

    /// Drop an exhausted level
    pub(crate) fn remove_level(&mut self, price: &Price) {
        if let Some(level) = self.levels.get(price) {
            if level.is_empty() {
                self.levels.remove(price);
            }
        }
    }

    /// Forget the index entry of an order consumed by matching
    pub(crate) fn unindex(&mut self, order_id: &OrderId) {
        self.index.remove(order_id);
    }

    /// Get depth snapshot (top N price levels)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .take(depth)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Iterate all resting orders in price-time order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.levels.values().flat_map(PriceLevel::iter)
    }

    /// Check if the ask book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Get the total number of resting orders
    pub fn len(&self) -> usize {
        self.index.len()
    }
}
