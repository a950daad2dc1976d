use clap::{Parser, ValueEnum};
use paged_list_api::{PageRequest, PagingResult};
use paged_list_db::repository::paging_strategy::PagingStrategy;
use paged_list_sqlite::sqlite_repositories::DEFAULT_DATABASE_URL;

/// Report layout written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Benchmark settings, read from flags, the environment and `.env`
#[derive(Debug, Clone, Parser)]
#[command(
    name = "paged-list-bench",
    version,
    about = "Compare strategies for loading one page of a SQLite collection"
)]
pub struct BenchConfig {
    /// Number of generated people to insert before timing
    #[arg(long, env = "PAGED_LIST_PEOPLE", default_value_t = 1000)]
    pub people: usize,

    /// One-based page to load
    #[arg(long, env = "PAGED_LIST_PAGE_NUMBER", default_value_t = 1)]
    pub page_number: usize,

    /// Maximum number of people per page
    #[arg(long, env = "PAGED_LIST_PAGE_SIZE", default_value_t = 100)]
    pub page_size: usize,

    /// Strategies to time, comma separated
    #[arg(
        long,
        env = "PAGED_LIST_STRATEGIES",
        value_delimiter = ',',
        default_values_t = PagingStrategy::ALL.to_vec()
    )]
    pub strategies: Vec<PagingStrategy>,

    /// Untimed loads per strategy before sampling
    #[arg(long, env = "PAGED_LIST_WARMUP", default_value_t = 1)]
    pub warmup: u32,

    /// Timed loads per strategy
    #[arg(
        long,
        env = "PAGED_LIST_ITERATIONS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub iterations: u32,

    /// SQLite connection string
    #[arg(long, env = "PAGED_LIST_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Pool size; the concurrent strategy needs at least two
    #[arg(
        long,
        env = "PAGED_LIST_MAX_CONNECTIONS",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Seed for the data generator, random when omitted
    #[arg(long, env = "PAGED_LIST_SEED")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, env = "PAGED_LIST_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level, overridden per module by RUST_LOG
    #[arg(long, env = "PAGED_LIST_LOG_LEVEL", default_value = "warn")]
    pub log_level: log::LevelFilter,
}

impl BenchConfig {
    /// The page every strategy loads
    pub fn page_request(&self) -> PagingResult<PageRequest> {
        PageRequest::new(self.page_number, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::try_parse_from(["paged-list-bench"]).unwrap();
        assert_eq!(config.people, 1000);
        assert_eq!(config.page_number, 1);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.strategies, PagingStrategy::ALL.to_vec());
        assert_eq!(config.iterations, 10);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_strategy_list() {
        let config = BenchConfig::try_parse_from([
            "paged-list-bench",
            "--strategies",
            "batched,sequential",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(
            config.strategies,
            vec![PagingStrategy::Batched, PagingStrategy::Sequential]
        );
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_strategy_and_zero_iterations() {
        assert!(BenchConfig::try_parse_from(["paged-list-bench", "--strategies", "future"]).is_err());
        assert!(BenchConfig::try_parse_from(["paged-list-bench", "--iterations", "0"]).is_err());
    }

    #[test]
    fn test_page_request_validation() {
        let config =
            BenchConfig::try_parse_from(["paged-list-bench", "--page-number", "0"]).unwrap();
        assert!(config.page_request().is_err());
    }
}
