//! # Configuration Management
//!
//! Configuration structures for loading a season and emitting luck reports.

use crate::error::{LuckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default input file name
pub const DEFAULT_INPUT_FILE: &str = "fantasy_luck_data.csv";

/// Main configuration for a luck run
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LuckConfig {
    /// Input configuration
    pub input: InputConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the matchup CSV
    pub path: PathBuf,
    /// Field delimiter
    pub delimiter: char,
    /// Whether the first row is a header
    pub has_headers: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_INPUT_FILE), delimiter: ',', has_headers: true }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving chart and report files
    pub dir: PathBuf,
    /// Write text chart files
    pub write_charts: bool,
    /// Write the JSON report
    pub write_report: bool,
    /// Print colored charts to stdout
    pub print_charts: bool,
    /// Width in characters of the longest bar
    pub bar_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            write_charts: true,
            write_report: true,
            print_charts: true,
            bar_width: 40,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

const LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

impl InputConfig {
    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(LuckError::config(format!("delimiter {:?} is not ASCII", self.delimiter)))
        }
    }
}

impl LuckConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LuckError::io(path, e))?;
        let config: LuckConfig = toml::from_str(&content)
            .map_err(|e| LuckError::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| LuckError::config(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| LuckError::io(path, e))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.input.delimiter_byte()?;
        if self.output.bar_width == 0 {
            return Err(LuckError::config("output.bar_width must be greater than zero"));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(LuckError::config(format!(
                "unknown logging.format {:?}, expected one of {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
