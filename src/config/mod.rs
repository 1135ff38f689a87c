//! Configuration module
//!
//! Handles loading and managing configuration.

pub mod env;
pub mod file;

use serde::{Deserialize, Serialize};

use crate::models::FormatEntry;
use crate::resolver::{FormatResolver, ResolverError};

pub use env::EnvConfig;
pub use file::ConfigFile;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Default output format
    pub output_format: String,

    /// Colorize table output
    pub colorize: bool,

    /// Additional formats registered alongside the built-in ones
    pub formats: Vec<FormatEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_format: "table".to_string(),
            colorize: true,
            formats: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Apply environment overrides
    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(level) = &env.log_level {
            self.log_level = level.clone();
        }
        if let Some(format) = &env.format {
            self.output_format = format.clone();
        }
        if env.no_color == Some(true) {
            self.colorize = false;
        }
    }

    /// Build a resolver from the built-in formats plus configured ones
    pub fn build_resolver(&self) -> Result<FormatResolver, ResolverError> {
        FormatResolver::builder()
            .with_entries(self.formats.iter().cloned())
            .build()
    }
}
