use crate::common::float_format::format_float;
use crate::config_loader::MasterConfig;
use crate::core::range_stepper::RangeParams;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Writes each value of the range on its own line. Returns the line count.
///
/// Nothing is written when the range is rejected up front. A step that
/// stops advancing partway fails after the values already written.
pub fn write_steps<W: Write>(params: &RangeParams, out: &mut W) -> Result<usize> {
    let describe = || format!("Cannot step from {} to {} in {} classes", params.start, params.stop, params.classes);
    let steps = params.steps().with_context(describe)?;

    let mut count = 0;
    for value in steps {
        let value = value.with_context(describe)?;
        writeln!(out, "{}", format_float(value)).context("Failed to write output line")?;
        out.flush().context("Failed to flush output")?;
        count += 1;
    }
    Ok(count)
}

pub fn range_params_from_args(master_config: &MasterConfig, args: &ArgMatches) -> Result<RangeParams> {
    let start = *args.get_one::<f64>("start").context("Missing required argument 'start'")?;
    let stop = *args.get_one::<f64>("stop").context("Missing required argument 'stop'")?;
    let classes = match args.get_one::<i64>("classes") {
        Some(classes) => {
            debug!("  Classes specified via CLI: {}", classes);
            *classes
        }
        None => {
            debug!("  Using configured default classes: {}", master_config.app_settings.default_classes);
            master_config.app_settings.default_classes
        }
    };
    Ok(RangeParams::new(start, stop, classes))
}

pub fn handle_steps_cli<W: Write>(master_config: &MasterConfig, args: &ArgMatches, out: &mut W) -> Result<()> {
    let op_start_time = Instant::now();
    let params = range_params_from_args(master_config, args)?;
    info!("📏 Stepping from {} to {} in {} classes...", params.start, params.stop, params.classes);

    let count = write_steps(&params, out)?;
    info!("✅ Printed {} values in {:?}.", count, op_start_time.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;
    use crate::errors::AppError;

    fn run(argv: &[&str], config: &MasterConfig) -> Result<String> {
        let matches = build_cli().try_get_matches_from(argv)?;
        let (_, sub) = matches.subcommand().unwrap();
        let mut out = Vec::new();
        handle_steps_cli(config, sub, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_python_style_floats() {
        let out = run(&["capkit", "steps", "0", "10", "--classes", "5"], &MasterConfig::default()).unwrap();
        assert_eq!(out, "0.0\n2.0\n4.0\n6.0\n8.0\n");
    }

    #[test]
    fn classes_default_comes_from_config() {
        let mut config = MasterConfig::default();
        config.app_settings.default_classes = 2;
        let out = run(&["capkit", "steps", "1", "2"], &config).unwrap();
        assert_eq!(out, "1.0\n1.5\n");
    }

    #[test]
    fn negative_bounds_parse() {
        let out = run(&["capkit", "steps", "-1", "1", "--classes", "2"], &MasterConfig::default()).unwrap();
        assert_eq!(out, "-1.0\n0.0\n");
    }

    #[test]
    fn zero_classes_writes_nothing_and_fails() {
        let params = RangeParams::new(0.0, 10.0, 0);
        let mut out = Vec::new();
        let err = write_steps(&params, &mut out).unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::DivisionByZero)));
        assert!(out.is_empty());
    }
}
