//! Benchmark runner that prints the strategy report.
//!
//! Usage:
//!   cargo run --release -p paged-list-bench
//!   cargo run --release -p paged-list-bench -- --people 10000 --page-number 5 --format json
//!
//! Every flag can also be set through its `PAGED_LIST_*` environment variable
//! or a `.env` file in the working directory.

use clap::Parser;
use paged_list_bench::config::{BenchConfig, OutputFormat};
use paged_list_bench::logging::initialize_logger;
use paged_list_bench::report::{render_json, render_text};
use paged_list_bench::runner::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = BenchConfig::parse();
    initialize_logger(config.log_level)?;

    log::info!(
        "benchmarking {} strategies over {} people, page {} of size {}",
        config.strategies.len(),
        config.people,
        config.page_number,
        config.page_size
    );

    let results = run(&config).await?;

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&results)),
        OutputFormat::Json => println!("{}", render_json(&results)?),
    }

    Ok(())
}
