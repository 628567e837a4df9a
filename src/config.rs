//! Configuration loading for the toy robot.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! [table]
//! length = 5
//! width = 5
//!
//! [report]
//! file = "reports/run.log"
//!
//! [logging]
//! level = "info"
//! ```

use crate::error::Result;
use crate::report::ReportSink;
use crate::table::Table;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Table dimensions
#[derive(Clone, Debug, Deserialize)]
pub struct TableConfig {
    /// Cells along x (default: 5)
    #[serde(default = "default_dimension")]
    pub length: i32,

    /// Cells along y (default: 5)
    #[serde(default = "default_dimension")]
    pub width: i32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            length: default_dimension(),
            width: default_dimension(),
        }
    }
}

impl TableConfig {
    pub fn build(&self) -> Result<Table> {
        Table::new(self.length, self.width)
    }
}

/// Report output
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReportConfig {
    /// Append reports to this file instead of stdout
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl ReportConfig {
    pub fn sink(&self) -> ReportSink {
        ReportSink::from(self.file.clone())
    }
}

/// Logging configuration
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_dimension() -> i32 {
    5
}
fn default_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
