use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};
use log::debug;
use std::time::Instant;
use crate::core::timestamp_scanner::OutputFormat;

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    let start_time = Instant::now();
    let cmd = Command::new("capkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Capkit Developers")
        .about("Helper utilities for the capture project: range stepping and timestamp extraction.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .global(true)
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("steps")
                .about("Prints evenly spaced values from START up to (not including) STOP")
                .arg(Arg::new("start").value_name("START").required(true).allow_negative_numbers(true).help("First value of the range").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("stop").value_name("STOP").required(true).allow_negative_numbers(true).help("Exclusive upper bound of the range").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("classes").long("classes").value_name("N").allow_negative_numbers(true).help("Number of equal subdivisions (default: 20, or application.default_classes)").value_parser(clap::value_parser!(i64)).action(ArgAction::Set))
        )
        .subcommand(
            Command::new("timestamps")
                .about("Prints the 'Timestamp:' value of every file in DIRECTORY, in file name order")
                .arg(Arg::new("directory").value_name("DIRECTORY").required(true).help("Directory to search through").action(ArgAction::Set))
                .arg(Arg::new("format").long("format").value_name("FORMAT").help("Output shape: 'path' prints '<path>,<value>,', 'value' prints '<value>,'").value_parser(PossibleValuesParser::new(OutputFormat::NAMES)).action(ArgAction::Set))
        );
    debug!("✅ CLI interface built in {:?}", start_time.elapsed());
    cmd
}
