//! Batch test-case driver
//!
//! Reads test cases, feeds each `(order, operation)` pair to the book and
//! renders the book. Input layout:
//!
//! ```text
//! 3
//! 1 10 5 False 1 insert
//! 2 2 4 False 2 insert
//! 5 3 10 True 5 match
//! ```
//!
//! The first line is the number of cases; each case is
//! `id price quantity is_buy time operation`.

use serde::Serialize;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, warn};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Operation, Order, Side};

use crate::config::{DriverConfig, OutputFormat};
use crate::engine::OrderBook;
use crate::error::BookError;
use crate::events::ProcessOutcome;
use crate::snapshot::BookSnapshot;

const FIELDS: [&str; 6] = ["id", "price", "quantity", "is_buy", "time", "operation"];

/// Errors in the test-case input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("missing test case count")]
    MissingCount,

    #[error("invalid test case count: {0}")]
    InvalidCount(String),

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid {field} `{value}`")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("expected {expected} test cases, found {found}")]
    TruncatedInput { expected: usize, found: usize },
}

/// Errors that stop a driver run
#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("line {line}: {source}")]
    Rejected { line: usize, source: BookError },

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based line number in the input
    pub line: usize,
    pub order: Order,
    pub operation: String,
}

/// Counters for a driver run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub ignored: usize,
    pub rejected: usize,
    pub fills: usize,
    /// Saturates at `Quantity::MAX`
    pub filled_quantity: Quantity,
}

/// Parse an "is buy" token
///
/// Accepts the usual truthy/falsy spellings, case-insensitively.
pub fn parse_bool(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn field<'a>(
    tokens: &[&'a str],
    index: usize,
    line: usize,
) -> Result<&'a str, InputError> {
    tokens.get(index).copied().ok_or(InputError::MissingField {
        line,
        field: FIELDS[index],
    })
}

fn invalid(line: usize, index: usize, value: &str) -> InputError {
    InputError::InvalidField {
        line,
        field: FIELDS[index],
        value: value.to_string(),
    }
}

/// Parse a single test case line
///
/// A `cancel` only needs its id; the other fields may hold placeholders
/// and fall back to defaults when they do not parse.
pub fn parse_case(line: usize, text: &str) -> Result<TestCase, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let raw = field(&tokens, 0, line)?;
    let id: OrderId = raw.parse().map_err(|_| invalid(line, 0, raw))?;

    let operation = field(&tokens, 5, line)?.to_string();

    let order = if operation == Operation::Cancel.as_str() {
        Order::new(
            id,
            tokens[1].parse().unwrap_or_else(|_| Price::zero()),
            tokens[2].parse().unwrap_or_default(),
            parse_bool(tokens[3]).map_or(Side::SELL, Side::from_is_buy),
            tokens[4].parse().unwrap_or_default(),
        )
    } else {
        let raw = field(&tokens, 1, line)?;
        let price: Price = raw.parse().map_err(|_| invalid(line, 1, raw))?;

        let raw = field(&tokens, 2, line)?;
        let quantity: Quantity = raw.parse().map_err(|_| invalid(line, 2, raw))?;

        let raw = field(&tokens, 3, line)?;
        let is_buy = parse_bool(raw).ok_or_else(|| invalid(line, 3, raw))?;

        let raw = field(&tokens, 4, line)?;
        let timestamp: i64 = raw.parse().map_err(|_| invalid(line, 4, raw))?;

        Order::new(id, price, quantity, Side::from_is_buy(is_buy), timestamp)
    };

    Ok(TestCase {
        line,
        order,
        operation,
    })
}

/// Parse the whole input: a count line followed by that many cases
///
/// Blank lines are skipped; lines after the last counted case are ignored.
pub fn parse_cases(input: &str) -> Result<Vec<TestCase>, InputError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty());

    let (_, count_text) = lines.next().ok_or(InputError::MissingCount)?;
    let expected: usize = count_text
        .parse()
        .map_err(|_| InputError::InvalidCount(count_text.to_string()))?;

    let cases = lines
        .take(expected)
        .map(|(line, text)| parse_case(line, text))
        .collect::<Result<Vec<_>, _>>()?;

    if cases.len() < expected {
        return Err(InputError::TruncatedInput {
            expected,
            found: cases.len(),
        });
    }
    Ok(cases)
}

#[derive(Serialize)]
struct TraceRecord<'a> {
    line: usize,
    operation: &'a str,
    outcome: &'a ProcessOutcome,
    book: &'a BookSnapshot,
}

/// Replays test cases against a book
pub struct Driver {
    book: OrderBook,
    config: DriverConfig,
}

impl Driver {
    pub fn new(book: OrderBook, config: DriverConfig) -> Self {
        Self { book, config }
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Parse `input`, process every case and write the final book to `out`
    pub fn run<W: Write>(&mut self, input: &str, out: &mut W) -> Result<RunSummary, DriverError> {
        let cases = parse_cases(input)?;
        info!(cases = cases.len(), "Replaying test cases");

        let summary = self.process_cases(&cases, out)?;
        self.write_final_state(out)?;

        info!(
            processed = summary.processed,
            ignored = summary.ignored,
            rejected = summary.rejected,
            fills = summary.fills,
            resting = self.book.len(),
            "Replay complete"
        );
        Ok(summary)
    }

    /// Process already parsed cases, tracing the book when configured
    pub fn process_cases<W: Write>(
        &mut self,
        cases: &[TestCase],
        out: &mut W,
    ) -> Result<RunSummary, DriverError> {
        let mut summary = RunSummary::default();

        for case in cases {
            let outcome = match self.book.process(Some(case.order.clone()), &case.operation) {
                Ok(outcome) => outcome,
                Err(source) if self.config.fail_fast => {
                    return Err(DriverError::Rejected {
                        line: case.line,
                        source,
                    });
                }
                Err(err) => {
                    warn!(line = case.line, error = %err, "Rejected test case");
                    summary.rejected += 1;
                    continue;
                }
            };

            summary.processed += 1;
            if outcome.is_ignored() {
                summary.ignored += 1;
            }
            summary.fills += outcome.fills().len();
            summary.filled_quantity = summary.filled_quantity.saturating_add(outcome.filled_quantity());
            debug!(line = case.line, operation = %case.operation, ?outcome, "Processed test case");

            if self.config.trace {
                self.write_trace(case, &outcome, out)?;
            }
        }

        Ok(summary)
    }

    fn write_trace<W: Write>(
        &self,
        case: &TestCase,
        outcome: &ProcessOutcome,
        out: &mut W,
    ) -> Result<(), DriverError> {
        let snapshot = self.book.snapshot();

        match self.config.format {
            OutputFormat::Text => writeln!(out, "Orderbook: {}", snapshot)?,
            OutputFormat::Json => {
                let record = TraceRecord {
                    line: case.line,
                    operation: &case.operation,
                    outcome,
                    book: &snapshot,
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Write the resting book in the configured format
    pub fn write_final_state<W: Write>(&self, out: &mut W) -> Result<(), DriverError> {
        match self.config.format {
            OutputFormat::Text => render_rows(&self.book.snapshot(), out)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &self.book.snapshot())?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// One line per resting order: `id price quantity remaining is_buy time`
pub fn render_rows<W: Write>(snapshot: &BookSnapshot, out: &mut W) -> std::io::Result<()> {
    for order in &snapshot.orders {
        writeln!(
            out,
            "{} {} {} {} {} {}",
            order.id,
            order.price,
            order.quantity,
            order.remaining_quantity,
            if order.side.is_buy() { "True" } else { "False" },
            order.timestamp
        )?;
    }
    Ok(())
}
