//! Command line and runtime configuration
//!
//! `Cli` is what the binary parses; it is split into the `BookConfig` the
//! book needs and the `DriverConfig` the batch driver needs.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::engine::BookConfig;

/// How the driver writes the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One order per line: `id price quantity remaining is_buy time`
    #[default]
    Text,
    /// JSON snapshot
    Json,
}

/// Configuration for the batch driver
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    pub format: OutputFormat,
    /// Render the book after every processed case
    pub trace: bool,
    /// Stop at the first case the book rejects
    pub fail_fast: bool,
}

/// Ask-side order book test-case runner
#[derive(Parser, Debug, Clone)]
#[command(name = "order-book")]
#[command(version)]
#[command(about = "Replay order book test cases and print the resulting book", long_about = None)]
pub struct Cli {
    /// Test case file; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Output format for the book
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the book after every operation
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Treat unrecognized operation tags as errors
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Abort on the first rejected test case
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Log level, used when RUST_LOG is not set
    #[arg(short = 'l', long, default_value = "warn", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,
}

impl Cli {
    pub fn book_config(&self) -> BookConfig {
        BookConfig {
            strict_operations: self.strict,
            ..BookConfig::default()
        }
    }

    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            format: self.format,
            trace: self.trace,
            fail_fast: self.fail_fast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["order-book"]).unwrap();

        assert!(cli.input.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.trace);
        assert!(!cli.book_config().strict_operations);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "order-book",
            "cases.txt",
            "--format",
            "json",
            "--trace",
            "--strict",
            "--fail-fast",
            "-l",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("cases.txt")));
        assert!(cli.book_config().strict_operations);

        let driver = cli.driver_config();
        assert_eq!(driver.format, OutputFormat::Json);
        assert!(driver.trace);
        assert!(driver.fail_fast);
    }

    #[test]
    fn test_cli_rejects_bad_log_level() {
        assert!(Cli::try_parse_from(["order-book", "-l", "loud"]).is_err());
    }
}
