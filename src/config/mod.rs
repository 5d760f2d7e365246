//! Configuration model for peaclock.
//!
//! This module defines the Config struct seeded with built-in defaults,
//! YAML config-file discovery and parsing (hyphenated keys are normalized to
//! underscored keys before deserialization), and CLI override application.
//! Precedence is defaults < config file < command line, for every option.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{Config, Overrides};
pub use operations::{ConfigSource, discover};
pub use types::{BarcodeKit, DEFAULT_CONFIGFILE};
