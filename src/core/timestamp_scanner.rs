use crate::common::file_utils;
use crate::errors::AppError;
use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

/// Literal anchor searched for in every scanned file.
pub const TIMESTAMP_MARKER: &str = "Timestamp:";

// `\s+` may cross line breaks; the capture stops at the end of its line.
fn timestamp_pattern() -> String {
    format!(r"{}\s+(.*)", regex::escape(TIMESTAMP_MARKER))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<full_path>,<captured_text>,`
    #[default]
    Path,
    /// `<captured_text>,`
    Value,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["path", "value"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Path => "path",
            OutputFormat::Value => "value",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(OutputFormat::Path),
            "value" => Ok(OutputFormat::Value),
            other => Err(AppError::Config(format!(
                "unknown timestamp format '{}' (expected one of: {})",
                other,
                OutputFormat::NAMES.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampRecord {
    pub file_name: PathBuf,
    pub timestamp_value: String,
}

impl TimestampRecord {
    /// Writes the comma-terminated output line, newline included.
    ///
    /// The path is written as its raw bytes so non-UTF-8 names still name
    /// the real file.
    pub fn write_line<W: Write>(&self, format: OutputFormat, out: &mut W) -> io::Result<()> {
        if format == OutputFormat::Path {
            out.write_all(self.file_name.as_os_str().as_encoded_bytes())?;
            out.write_all(b",")?;
        }
        writeln!(out, "{},", self.timestamp_value)
    }
}

#[derive(Debug, Clone)]
pub struct TimestampScanner {
    pattern: Regex,
}

impl TimestampScanner {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(TimestampScanner { pattern: Regex::new(&timestamp_pattern())? })
    }

    /// Returns the text captured after the first marker, if any.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn scan_file(&self, file_path: &Path) -> Result<Option<TimestampRecord>, AppError> {
        let contents = file_utils::read_text_file(file_path)?;
        Ok(self.extract(&contents).map(|value| TimestampRecord {
            file_name: file_path.to_path_buf(),
            timestamp_value: value.to_string(),
        }))
    }
}

/// Scans every direct entry of `dir_path` in name order and writes one line
/// per file containing the marker. Returns the number of lines written.
///
/// The first unreadable entry aborts the scan; lines already written stay
/// written.
pub fn scan_directory<W: Write>(
    dir_path: &Path,
    scanner: &TimestampScanner,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let scan_start_time = Instant::now();
    let entries = file_utils::list_sorted_entries(dir_path)
        .with_context(|| format!("Failed to list directory '{}'", dir_path.display()))?;

    let mut matched = 0;
    for file_path in &entries {
        let record = scanner
            .scan_file(file_path)
            .with_context(|| format!("Failed to scan '{}'", file_path.display()))?;

        match record {
            Some(record) => {
                debug!("🔎 '{}' -> '{}'", file_path.display(), record.timestamp_value);
                record.write_line(format, out).context("Failed to write output line")?;
                out.flush().context("Failed to flush output")?;
                matched += 1;
            }
            None => debug!("No {} marker in '{}', skipping.", TIMESTAMP_MARKER, file_path.display()),
        }
    }

    info!(
        "📋 Scanned {} entries in '{}', {} matched, in {:?}",
        entries.len(), dir_path.display(), matched, scan_start_time.elapsed()
    );
    Ok(matched)
}
