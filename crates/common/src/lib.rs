//! Toolfield Common Utilities
//!
//! Shared infrastructure for all Toolfield crates:
//! - Error types and result aliases
//! - Frame clock and pacing utilities for the animation loop
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
