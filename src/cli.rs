//! CLI argument parsing for peaclock.
//!
//! Uses clap derive macros. The tool has a single operation, so the options
//! are flat; every option here can also come from the YAML config file, and
//! a command-line value always wins.

use crate::config::Overrides;
use clap::Parser;
use std::path::PathBuf;

/// PEAClock: resolve the configuration for an epigenetic clock pipeline run.
///
/// Settings are merged from built-in defaults, an optional YAML config file,
/// and these options; inputs are validated and the output and temp
/// directories are created before the configuration is handed to the
/// workflow engine.
#[derive(Parser, Debug, Default)]
#[command(name = "peaclock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file (default: config.yaml in the working directory).
    #[arg(short = 'c', long)]
    pub configfile: Option<PathBuf>,

    /// Output directory (default: a per-run timestamped directory).
    #[arg(short = 'o', long)]
    pub outdir: Option<PathBuf>,

    /// Prefix for output file names; the run date is appended.
    #[arg(long)]
    pub output_prefix: Option<String>,

    /// Parent directory for the run's temporary directory.
    #[arg(long)]
    pub tempdir: Option<PathBuf>,

    /// Write all intermediate files into the output directory.
    #[arg(long)]
    pub no_temp: bool,

    /// Check guppy_barcoder and demultiplex reads before the run.
    #[arg(long)]
    pub demultiplex: bool,

    /// Directory containing the guppy_barcoder binary.
    #[arg(long)]
    pub path_to_guppy: Option<PathBuf>,

    /// Species whose bundled reference data to use.
    #[arg(short = 's', long)]
    pub species: Option<String>,

    /// Directory of basecalled fastq reads.
    #[arg(short = 'i', long = "read-dir")]
    pub read_dir: Option<PathBuf>,

    /// CSV listing sample barcodes (requires a `barcode` column).
    #[arg(short = 'b', long)]
    pub barcodes_csv: Option<PathBuf>,

    /// Barcode kit: native, pcr, rapid, or all.
    #[arg(short = 'k', long)]
    pub barcode_kit: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The options merged into the config with CLI-wins precedence.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            output_prefix: self.output_prefix.clone(),
            species: self.species.clone(),
            barcode_kit: self.barcode_kit.clone(),
            path_to_guppy: self.path_to_guppy.clone(),
            no_temp: self.no_temp,
            demultiplex: self.demultiplex,
        }
    }
}
