use serde::Deserialize;
use std::fs;
use crate::app_config::ApplicationConfig;
use anyhow::{Result, Context, bail};
use log::{debug, info};
use std::time::Instant;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MasterConfig {
    #[serde(rename = "application", default)]
    pub app_settings: ApplicationConfig,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'. 📖", path))?;
    debug!("Read config file in {:?}", start_time.elapsed());

    let config = parse_config(&config_str)
        .with_context(|| format!("Failed to load configuration from '{}'. 💔", path))?;

    info!("✅ Successfully loaded and validated configuration from '{}' in {:?}", path, start_time.elapsed());
    Ok(config)
}

/// Parses and validates YAML configuration text.
///
/// An empty document yields the defaults.
pub fn parse_config(config_str: &str) -> Result<MasterConfig> {
    let parse_start_time = Instant::now();
    let config: MasterConfig = if config_str.trim().is_empty() {
        MasterConfig::default()
    } else {
        serde_yaml::from_str(config_str).context("Failed to parse YAML configuration")?
    };
    debug!("Parsed YAML in {:?}", parse_start_time.elapsed());

    validate_master_config(&config).context("Master configuration validation failed 👎")?;
    Ok(config)
}

fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");
    if config.app_settings.default_classes == 0 {
        bail!("❌ Application default_classes cannot be 0.");
    }
    if let Some(level) = &config.app_settings.log_level {
        if level.trim().is_empty() {
            bail!("❌ Application log_level cannot be empty when set.");
        }
    }
    debug!("👍 Master configuration validated.");
    Ok(())
}
