//! PEAClock configuration resolver.
//!
//! Gathers settings from command-line arguments, a YAML configuration file,
//! and built-in defaults; merges them with CLI-wins precedence; validates
//! read directories, barcode files, and species reference data; materializes
//! output and temporary directories; and hands a fully resolved
//! configuration to the external workflow engine.
//!
//! Every fatal condition is a typed [`error::PeaclockError`] propagated to
//! the caller; the library never terminates the process.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod paths;
pub mod resolve;
pub mod style;
pub mod validate;
pub mod workflow;
