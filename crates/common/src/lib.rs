//! JumpGauge Common Utilities
//!
//! Shared infrastructure for all JumpGauge crates:
//! - Error types and result aliases
//! - Frame timing utilities
//! - Tracing/logging initialization
//! - Configuration loading

pub mod config;
pub mod error;
pub mod logging;
pub mod timing;

pub use config::*;
pub use error::*;
pub use timing::*;
