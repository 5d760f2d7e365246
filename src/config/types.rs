//! Configuration types and defaults for peaclock.
//!
//! This module defines the barcode-kit enum, constants, and default value
//! functions used by the Config struct.

use crate::error::{PeaclockError, Result};

/// Config file looked for in the working directory when none is given.
pub const DEFAULT_CONFIGFILE: &str = "config.yaml";

/// Barcode kit used when demultiplexing reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarcodeKit {
    /// Native barcoding kit (default).
    #[default]
    Native,
    /// PCR barcoding kit.
    Pcr,
    /// Rapid barcoding kit.
    Rapid,
    /// All supported kits.
    All,
}

impl BarcodeKit {
    /// Parse a barcode kit name, case-insensitively.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "native" => Some(Self::Native),
            "pcr" => Some(Self::Pcr),
            "rapid" => Some(Self::Rapid),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Parse a barcode kit name, failing with the list of valid choices.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            PeaclockError::Validation(format!(
                "please enter a valid barcode kit: one of\n\t- native\n\t- pcr\n\t- rapid\n\t- all\n(got '{s}')"
            ))
        })
    }

    /// The normalized lowercase name recorded as `barcode_set`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Pcr => "pcr",
            Self::Rapid => "rapid",
            Self::All => "all",
        }
    }
}

// Default value functions for serde
pub(crate) fn default_output_prefix() -> String {
    "peaclock".to_string()
}
pub(crate) fn default_species() -> String {
    "apodemus".to_string()
}
pub(crate) fn default_barcode_kit() -> String {
    "native".to_string()
}
pub(crate) fn default_allowed_species() -> Vec<String> {
    vec![
        "apodemus".to_string(),
        "mus".to_string(),
        "phalacrocorax".to_string(),
    ]
}
pub(crate) fn default_true() -> bool {
    true
}
