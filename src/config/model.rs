//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;
use std::path::PathBuf;

/// User-settable configuration for a peaclock run.
///
/// This struct represents the merge of built-in defaults, the YAML config
/// file, and CLI overrides. Unknown fields in the YAML are ignored so a
/// config file shared with the workflow engine parses cleanly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Run settings
    // =========================================================================
    /// Write all intermediate files into the output directory.
    pub no_temp: bool,

    /// Run the guppy_barcoder demultiplexing check before the pipeline.
    pub demultiplex: bool,

    /// Directory containing the guppy_barcoder binary.
    pub path_to_guppy: Option<PathBuf>,

    /// Prefix for output file names; a run date is appended at resolution.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Overwrite pipeline outputs from a previous run.
    #[serde(default = "default_true")]
    pub force: bool,

    // =========================================================================
    // Species settings
    // =========================================================================
    /// Species whose bundled reference data drives the analysis.
    #[serde(default = "default_species")]
    pub species: String,

    /// Species with bundled reference data.
    #[serde(default = "default_allowed_species")]
    pub allowed_species: Vec<String>,

    // =========================================================================
    // Input settings
    // =========================================================================
    /// Barcode kit name; validated against the supported set.
    #[serde(alias = "barcodes", default = "default_barcode_kit")]
    pub barcode_kit: String,

    /// Explicit output directory (otherwise one is synthesized per run).
    pub outdir: Option<PathBuf>,

    /// Parent directory for the run's temporary directory.
    pub tempdir: Option<PathBuf>,

    /// Directory holding basecalled fastq reads, relative to the config file.
    #[serde(alias = "read_dir")]
    pub read_path: Option<PathBuf>,

    /// CSV of sample barcodes, relative to the config file.
    pub barcodes_csv: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_temp: false,
            demultiplex: false,
            path_to_guppy: None,
            output_prefix: default_output_prefix(),
            force: default_true(),
            species: default_species(),
            allowed_species: default_allowed_species(),
            barcode_kit: default_barcode_kit(),
            outdir: None,
            tempdir: None,
            read_path: None,
            barcodes_csv: None,
        }
    }
}

/// CLI values that overwrite config-file values when supplied.
///
/// Options whose base directory differs between CLI and config file (outdir,
/// tempdir, read dir, barcodes csv) are not merged here; the resolution steps
/// take them directly so each source resolves against the right directory.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output_prefix: Option<String>,
    pub species: Option<String>,
    pub barcode_kit: Option<String>,
    pub path_to_guppy: Option<PathBuf>,
    pub no_temp: bool,
    pub demultiplex: bool,
}

impl Config {
    /// Apply CLI overrides on top of defaults and config-file values.
    ///
    /// Flags only overwrite when set; a flag left off the command line keeps
    /// whatever the config file said.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(output_prefix) = &overrides.output_prefix {
            self.output_prefix = output_prefix.clone();
        }
        if let Some(species) = &overrides.species {
            self.species = species.clone();
        }
        if let Some(barcode_kit) = &overrides.barcode_kit {
            self.barcode_kit = barcode_kit.clone();
        }
        if let Some(path_to_guppy) = &overrides.path_to_guppy {
            self.path_to_guppy = Some(path_to_guppy.clone());
        }
        if overrides.no_temp {
            self.no_temp = true;
        }
        if overrides.demultiplex {
            self.demultiplex = true;
        }
    }
}
