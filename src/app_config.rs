use serde::Deserialize;
use crate::core::timestamp_scanner::OutputFormat;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApplicationConfig {
    pub log_level: Option<String>, // CLI --debug takes precedence
    pub default_classes: i64, // Subdivisions used when `steps --classes` is omitted
    pub timestamp_format: OutputFormat, // "path" or "value"
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            log_level: None,
            default_classes: 20,
            timestamp_format: OutputFormat::Path,
        }
    }
}
