//! End-to-end scenarios for the order book
//!
//! Covers the reference walk-through (build a book, sweep it with a buy),
//! cancel of an unknown id, matching an empty book, and replaying the
//! bundled test-case files through the driver.

use order_book::config::DriverConfig;
use order_book::driver::Driver;
use order_book::{BookError, OrderBook, ProcessOutcome};
use std::str::FromStr;
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

fn sell(id: u64, price: u64, qty: Quantity, time: i64) -> Order {
    Order::sell(id, Price::from_u64(price), qty, time)
}

fn buy(id: u64, price: u64, qty: Quantity, time: i64) -> Order {
    Order::buy(id, Price::from_u64(price), qty, time)
}

/// (id, price, remaining) in book order
fn rows(book: &OrderBook) -> Vec<(u64, Price, Quantity)> {
    book.resting_orders()
        .map(|o| (o.id.as_u64(), o.price, o.remaining_quantity))
        .collect()
}

fn scenario_a() -> OrderBook {
    let mut book = OrderBook::new();
    book.insert(sell(1, 10, 5, 1)).unwrap();
    book.insert(sell(2, 2, 4, 2)).unwrap();
    book.insert(sell(3, 1, 6, 3)).unwrap();
    book.insert(sell(4, 1, 1, 4)).unwrap();
    book
}

#[test]
fn test_scenario_a_insert_ordering() {
    let book = scenario_a();

    assert_eq!(
        rows(&book),
        vec![
            (3, Price::from_u64(1), 6),
            (4, Price::from_u64(1), 1),
            (2, Price::from_u64(2), 4),
            (1, Price::from_u64(10), 5),
        ]
    );
}

#[test]
fn test_scenario_b_sweep_with_partial_fill() {
    let mut book = scenario_a();

    let fills = book.match_order(buy(5, 3, 10, 5)).unwrap();

    let taken: Vec<(u64, Quantity)> = fills
        .iter()
        .map(|f| (f.resting_order_id.as_u64(), f.quantity))
        .collect();
    assert_eq!(taken, vec![(3, 6), (4, 1), (2, 3)]);
    assert!(fills[0].is_complete());
    assert!(fills[1].is_complete());
    assert!(!fills[2].is_complete());

    // id1 at 10 is above the limit of 3 and never reached
    assert_eq!(
        rows(&book),
        vec![(2, Price::from_u64(2), 1), (1, Price::from_u64(10), 5)]
    );
    let untouched = book.get(OrderId::new(1)).unwrap();
    assert_eq!(untouched.remaining_quantity, untouched.quantity);
}

#[test]
fn test_scenario_c_cancel_unknown_id() {
    let mut book = scenario_a();
    let before = book.snapshot();

    let outcome = book.process(Some(sell(99, 0, 0, 9)), "cancel").unwrap();

    assert_eq!(
        outcome,
        ProcessOutcome::Canceled {
            order_id: OrderId::new(99),
            removed: None
        }
    );
    assert_eq!(book.snapshot(), before);
}

#[test]
fn test_scenario_d_match_empty_book() {
    let mut book = OrderBook::new();

    let fills = book.match_order(buy(1, 100, 10, 1)).unwrap();

    assert!(fills.is_empty());
    assert!(book.is_empty());
    assert_eq!(book.snapshot().to_string(), "None");
}

#[test]
fn test_buy_remainder_never_rests() {
    let mut book = scenario_a();

    book.match_order(buy(5, 100, 1_000, 5)).unwrap();

    assert!(book.is_empty());
    assert!(book.resting_orders().all(|o| o.side == Side::SELL));
}

#[test]
fn test_wrong_side_errors_leave_book_intact() {
    let mut book = scenario_a();
    let before = book.snapshot();

    let insert_err = book.insert(buy(8, 1, 1, 8)).unwrap_err();
    let match_err = book.match_order(sell(9, 100, 100, 9)).unwrap_err();

    assert_eq!(
        insert_err,
        BookError::Order(OrderError::InvalidSide {
            expected: Side::SELL,
            actual: Side::BUY
        })
    );
    assert_eq!(
        match_err,
        BookError::Order(OrderError::InvalidSide {
            expected: Side::BUY,
            actual: Side::SELL
        })
    );
    assert_eq!(book.snapshot(), before);
}

#[test]
fn test_decimal_prices_share_levels() {
    let mut book = OrderBook::new();
    book.insert(Order::sell(1, Price::from_str("2.50").unwrap(), 1, 1)).unwrap();
    book.insert(Order::sell(2, Price::from_str("2.5").unwrap(), 1, 2)).unwrap();
    book.insert(Order::sell(3, Price::from_str("2.49").unwrap(), 1, 3)).unwrap();

    assert_eq!(book.level_count(), 2);
    let ids: Vec<u64> = book.resting_orders().map(|o| o.id.as_u64()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

fn replay(input: &str) -> String {
    let mut driver = Driver::new(OrderBook::new(), DriverConfig::default());
    let mut out = Vec::new();
    driver.run(input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_replay_price_time_priority_file() {
    let output = replay(include_str!("../resources/price_time_priority.txt"));
    assert_eq!(output, "2 2 4 1 False 2\n1 10 5 5 False 1\n");
}

#[test]
fn test_replay_cancel_and_refill_file() {
    let output = replay(include_str!("../resources/cancel_and_refill.txt"));
    assert_eq!(output, "1 5 3 2 False 1\n7 6 4 4 False 7\n");
}
