use capkit::common::logging_setup;
use capkit::{cli, config_loader, operations};
use capkit::config_loader::MasterConfig;
use log::{info, error, debug};
use anyhow::{Result, bail};
use std::io;
use std::time::Instant;

fn main() -> Result<()> {
    let main_start_time = Instant::now();
    let matches = cli::build_cli().get_matches();

    // Without --config the built-in defaults apply; an explicit path must load.
    let master_config = match matches.get_one::<String>("config") {
        Some(config_path) => match config_loader::load_config(config_path) {
            Ok(cfg) => {
                logging_setup::initialize_logging(Some(&cfg), &matches);
                cfg
            }
            Err(e) => {
                logging_setup::initialize_logging(None, &matches);
                error!("❌ Failed to load configuration from '{}': {:#}. Exiting.", config_path, e);
                return Err(e);
            }
        },
        None => {
            let cfg = MasterConfig::default();
            logging_setup::initialize_logging(Some(&cfg), &matches);
            debug!("No configuration file given, using defaults.");
            cfg
        }
    };

    let Some((operation_name, sub_matches)) = matches.subcommand() else {
        bail!("No subcommand provided.");
    };
    debug!("🎬 Dispatching to subcommand: {}", operation_name);
    let op_start_time = Instant::now();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let op_result: Result<()> = match operation_name {
        "steps" => operations::steps_op::handle_steps_cli(&master_config, sub_matches, &mut out),
        "timestamps" => operations::timestamps_op::handle_timestamps_cli(&master_config, sub_matches, &mut out),
        other => bail!("Subcommand '{}' not implemented.", other),
    };

    if let Err(e) = op_result {
        error!("❌ Operation '{}' failed after {:?}: {:#}", operation_name, op_start_time.elapsed(), e);
        return Err(e);
    }
    info!("✅ Operation '{}' completed successfully in {:?}.", operation_name, op_start_time.elapsed());

    info!("🏁 Capkit finished in {:?}.", main_start_time.elapsed());
    Ok(())
}
