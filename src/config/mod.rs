//! Configuration module for search capture
//!
//! This module provides the `CaptureConfig` struct and its type-safe builder
//! for configuring a capture run with validation and sensible defaults.

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::{CaptureConfigBuilder, WithQuery};
pub use types::CaptureConfig;
