//! Configuration system for the LS8 simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline machine constants (start PC, stack base).
//! 2. **Structures:** Hierarchical config for general, stack and statistics settings.
//! 3. **Loading:** JSON parsing from a string or file.
//!
//! Every field has a default, so a config file only needs the keys it changes.
//! The CLI uses `Config::default()` unless `--config` is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the simulator.
mod defaults {
    /// Address execution starts at.
    pub const START_PC: u8 = 0;

    /// Initial stack pointer; also the upper bound a pop may not cross.
    pub const RESET_SP: u8 = crate::common::constants::STACK_RESET;
}

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root simulator configuration.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "stack": { "reset_sp": 240 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.stack.reset_sp, 240);
/// assert!(!config.stats.enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Stack placement
    #[serde(default)]
    pub stack: StackConfig,
    /// Statistics reporting
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the JSON is malformed or has wrongly typed fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print a trace line to stderr before every instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u8 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Stack configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StackConfig {
    /// Value loaded into `R7` at reset. The stack is empty when `SP` equals this
    /// value, and popping an empty stack faults.
    #[serde(default = "StackConfig::default_reset_sp")]
    pub reset_sp: u8,
}

impl StackConfig {
    /// Returns the default reset stack pointer (`0xF4`).
    const fn default_reset_sp() -> u8 {
        defaults::RESET_SP
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            reset_sp: defaults::RESET_SP,
        }
    }
}

/// Statistics reporting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatsConfig {
    /// Print the statistics report after the run
    #[serde(default)]
    pub enabled: bool,
}
