use log::LevelFilter;

/// Install the process-wide logger
///
/// Library crates log through `tracing`, whose records are forwarded to the
/// `log` facade and printed here on stderr. `RUST_LOG` refines `level` per
/// module.
pub fn initialize_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init()
}
