//! Debug Configuration Module
//!
//! Reads debugging settings from environment variables:
//!
//! - `NATURAL_NUMBER_DEBUG`: enable debug output (`1`, `true`, `yes`, `on`)
//! - `NATURAL_NUMBER_VERBOSE`: enable verbose output as well
//! - `NATURAL_NUMBER_LOG`: `EnvFilter` directive, overrides the level derived
//!   from the two flags above

use std::env;

/// Environment variable enabling debug output
pub const DEBUG_VAR: &str = "NATURAL_NUMBER_DEBUG";
/// Environment variable enabling verbose output
pub const VERBOSE_VAR: &str = "NATURAL_NUMBER_VERBOSE";
/// Environment variable holding an explicit log filter
pub const LOG_VAR: &str = "NATURAL_NUMBER_LOG";

/// Debugging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Debug output enabled
    pub enabled: bool,
    /// Verbose output enabled
    pub verbose: bool,
    /// `EnvFilter` directive for the subscriber
    pub filter: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            verbose: false,
            filter: "warn".to_string(),
        }
    }
}

impl DebugConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose = lookup(VERBOSE_VAR).is_some_and(|v| parse_flag(&v));
        let enabled = verbose || lookup(DEBUG_VAR).is_some_and(|v| parse_flag(&v));

        let filter = lookup(LOG_VAR)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| {
                if verbose {
                    "trace".to_string()
                } else if enabled {
                    "debug".to_string()
                } else {
                    "warn".to_string()
                }
            });

        Self {
            enabled,
            verbose,
            filter,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
