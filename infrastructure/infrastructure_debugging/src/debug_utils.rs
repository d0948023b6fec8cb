//! Debug Utilities Module
//!
//! Provides debugging utility functions.
//!
//! This module provides infrastructure for debugging:
//! - Debug output utilities, gated by a global debug state
//! - Subscriber installation for the `tracing` events emitted by the
//!   entity and use case layers
//! - Natural number display including the backing representation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use entities_natural_number::NaturalNumber;
use thiserror::Error;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use crate::config::DebugConfig;

/// Global debug state
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static VERBOSE_DEBUG: AtomicBool = AtomicBool::new(false);
static SUBSCRIBER: OnceLock<Result<(), DebugError>> = OnceLock::new();

/// Debug utilities for debugging operations
pub struct DebugUtils;

impl DebugUtils {
    /// Enable debug output
    ///
    /// When enabled, debug output functions will produce output.
    /// When disabled, debug output is suppressed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// DebugUtils::enable();
    /// DebugUtils::debug_output("This will be logged");
    /// DebugUtils::disable();
    /// DebugUtils::debug_output("This will be suppressed");
    /// ```
    pub fn enable() {
        DEBUG_ENABLED.store(true, Ordering::Release);
    }

    /// Disable debug output
    pub fn disable() {
        DEBUG_ENABLED.store(false, Ordering::Release);
    }

    /// Check if debug output is enabled
    pub fn is_enabled() -> bool {
        DEBUG_ENABLED.load(Ordering::Acquire)
    }

    /// Enable verbose debug output
    ///
    /// Verbose mode provides more detailed debug information.
    pub fn enable_verbose() {
        VERBOSE_DEBUG.store(true, Ordering::Release);
    }

    /// Disable verbose debug output
    pub fn disable_verbose() {
        VERBOSE_DEBUG.store(false, Ordering::Release);
    }

    /// Check if verbose debug is enabled
    pub fn is_verbose() -> bool {
        VERBOSE_DEBUG.load(Ordering::Acquire)
    }

    /// Apply a configuration to the global debug state
    pub fn apply(config: &DebugConfig) {
        if config.enabled {
            Self::enable();
        } else {
            Self::disable();
        }
        if config.verbose {
            Self::enable_verbose();
        } else {
            Self::disable_verbose();
        }
    }

    /// Install the global `tracing` subscriber for `config`
    ///
    /// Installation runs at most once per process, even under concurrent
    /// callers; later calls only update the debug state and report the
    /// outcome of the first installation.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Subscriber installed, now or by an earlier call
    /// * `Err(DebugError)` - Invalid filter, or another subscriber is already set
    pub fn init_subscriber(config: &DebugConfig) -> Result<(), DebugError> {
        let filter = EnvFilter::try_new(&config.filter)
            .map_err(|e| DebugError::InvalidFilter(e.to_string()))?;
        Self::apply(config);
        SUBSCRIBER
            .get_or_init(|| {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(|e| DebugError::SubscriberInit(e.to_string()))?;
                debug!(filter = %config.filter, "natural number logging initialized");
                Ok(())
            })
            .clone()
    }

    /// Read [`DebugConfig`] from the environment and install the subscriber
    pub fn init_from_env() -> Result<(), DebugError> {
        Self::init_subscriber(&DebugConfig::from_env())
    }

    /// Output a debug message
    ///
    /// The message is emitted as a `tracing` debug event if debug output is enabled.
    pub fn debug_output(message: &str) {
        if Self::is_enabled() {
            debug!("{}", message);
        }
    }

    /// Output a verbose debug message
    ///
    /// Only outputs if both debug and verbose modes are enabled.
    pub fn verbose_output(message: &str) {
        if Self::is_enabled() && Self::is_verbose() {
            trace!("{}", message);
        }
    }

    /// Render a natural number with its backing representation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_natural_number::NaturalNumber1L;
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// let n = NaturalNumber1L::from_u64(13);
    /// assert_eq!(DebugUtils::number_to_string(&n), "13 (compact)");
    /// ```
    pub fn number_to_string(number: &dyn NaturalNumber) -> String {
        let value = match number.to_word() {
            Some(word) => word.to_string(),
            None => number.to_digits().to_string(),
        };
        if Self::is_verbose() {
            format!(
                "{} ({}, {} digits)",
                value,
                number.representation(),
                number.to_digits().len()
            )
        } else {
            format!("{} ({})", value, number.representation())
        }
    }

    /// Display a natural number as a debug event
    pub fn display_number(number: &dyn NaturalNumber) {
        if Self::is_enabled() {
            debug!(number = %Self::number_to_string(number), "natural number");
        }
    }
}

/// Debug operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebugError {
    /// Filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
    /// A global subscriber could not be installed
    #[error("Subscriber initialization failed: {0}")]
    SubscriberInit(String),
}
