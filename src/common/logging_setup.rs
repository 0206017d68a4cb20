use env_logger::{Builder, Target};
use log::LevelFilter;
use crate::config_loader::MasterConfig;

pub fn initialize_logging(config: Option<&MasterConfig>, cli_matches: &clap::ArgMatches) {
    let mut builder = Builder::new();
    // stdout carries results only
    builder.target(Target::Stderr);

    let log_level_str = resolve_level(config, cli_matches.get_flag("debug"));
    builder.filter_level(parse_level_filter(&log_level_str));

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}

/// Log level from CLI, then config, then default.
fn resolve_level(config: Option<&MasterConfig>, debug_flag: bool) -> String {
    if debug_flag {
        return "debug".to_string();
    }
    config
        .and_then(|c| c.app_settings.log_level.clone())
        .unwrap_or_else(|| "warn".to_string())
}

fn parse_level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        s => {
            eprintln!("Unrecognized log level '{}', defaulting to info.", s);
            LevelFilter::Info
        }
    }
}
