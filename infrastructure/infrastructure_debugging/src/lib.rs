//! Infrastructure Layer: Debugging
//!
//! Provides debugging utilities for the natural number layers.
//!
//! This crate provides infrastructure for debugging:
//! - Debug state management (enable, disable, verbose)
//! - Logging setup: a `tracing-subscriber` fmt subscriber driven by an `EnvFilter`
//! - Configuration read from the environment ([`DebugConfig`])
//! - Display of natural numbers together with their backing representation

pub mod config;
pub mod debug_utils;

pub use config::DebugConfig;
pub use debug_utils::{DebugError, DebugUtils};
