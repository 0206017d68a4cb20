use crate::config_loader::MasterConfig;
use crate::core::timestamp_scanner::{self, OutputFormat, TimestampScanner};
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

pub fn handle_timestamps_cli<W: Write>(master_config: &MasterConfig, args: &ArgMatches, out: &mut W) -> Result<()> {
    let op_start_time = Instant::now();
    let directory = args
        .get_one::<String>("directory")
        .map(PathBuf::from)
        .context("Missing required argument 'directory'")?;

    let format = match args.get_one::<String>("format") {
        Some(name) => name.parse::<OutputFormat>()?,
        None => master_config.app_settings.timestamp_format,
    };
    info!("🕒 Extracting timestamps from '{}' (format: {})...", directory.display(), format);

    let scanner = TimestampScanner::new().context("Failed to compile timestamp pattern")?;
    let matched = timestamp_scanner::scan_directory(&directory, &scanner, format, out)?;

    info!("✅ Extracted {} timestamps in {:?}.", matched, op_start_time.elapsed());
    Ok(())
}
