use anyhow::Context;
use clap::Parser;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

use order_book::config::Cli;
use order_book::driver::Driver;
use order_book::OrderBook;

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the book
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(version = order_book::SERVICE_VERSION, input = ?cli.input, "Starting order book replay");

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let mut driver = Driver::new(OrderBook::with_config(cli.book_config()), cli.driver_config());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver.run(&input, &mut out)?;
    out.flush()?;

    Ok(())
}
