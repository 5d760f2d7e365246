//! The resolution sequence.
//!
//! A fixed pipeline of steps: load defaults, locate and parse the config
//! file, merge CLI overrides, resolve bundled species data and read-length
//! bounds, validate inputs, probe the demultiplexer if requested, locate the
//! workflow definition, then materialize the output and temp directories.
//! Validation runs before anything is created on disk, so a failed run
//! leaves no directories behind. The result is a [`Resolution`] handed to
//! the workflow engine.

pub mod outdir;
pub mod read_length;
pub mod species;
pub mod tempdir;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::config::{self, BarcodeKit, Config};
use crate::error::Result;
use crate::style;
use crate::validate::{BarcodeList, barcodes, guppy, reads};
use crate::workflow;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use self::tempdir::TempSpace;

/// The fully resolved configuration for one pipeline run.
///
/// Everything the workflow engine needs: merged settings, materialized
/// directories, species reference paths, length bounds, and validated
/// inputs. The temp-space guard lives here, so a process-allocated temp
/// directory survives until the resolution is dropped at the end of the run.
#[derive(Debug)]
pub struct Resolution {
    /// Merged settings (defaults < config file < command line).
    pub config: Config,
    /// The config file that was read, if any.
    pub configfile: Option<PathBuf>,
    /// Directory containing the config file.
    pub path_to_config: PathBuf,

    /// Absolute output directory (created).
    pub outdir: PathBuf,
    /// Output directory relative to the working directory.
    pub rel_outdir: PathBuf,
    /// Output file prefix with the run date appended.
    pub output_prefix: String,
    /// Where intermediate files go.
    pub tempdir: TempSpace,

    /// Substitution matrix shared across species.
    pub matrix_file: PathBuf,
    /// CpG site table for the selected species.
    pub cpg_sites: PathBuf,
    /// Gene reference FASTA for the selected species.
    pub genes: PathBuf,
    /// Primer sequence table for the selected species.
    pub primer_sequences: PathBuf,
    /// Length of the shortest reference gene.
    pub min_length: u64,
    /// Length of the longest reference gene, padded.
    pub max_length: u64,

    /// Directory of basecalled fastq reads.
    pub read_path: PathBuf,
    /// Validated barcodes from the run's CSV.
    pub barcode_list: BarcodeList,
    /// Normalized barcode kit.
    pub barcode_set: BarcodeKit,
    /// Probed guppy_barcoder binary, when demultiplexing is enabled.
    pub guppy_barcoder: Option<PathBuf>,

    /// The workflow definition handed to the engine.
    pub snakefile: PathBuf,
}

/// Run the full resolution sequence.
///
/// `now` pins the run timestamp used for directory naming and the dated
/// output prefix.
pub fn resolve(cli: &Cli, cwd: &Path, now: DateTime<Local>) -> Result<Resolution> {
    let source = config::discover(cli.configfile.as_deref(), cwd)?;
    let mut config = source.config;
    config.apply_overrides(&cli.overrides());

    let barcode_set = BarcodeKit::parse(&config.barcode_kit)?;

    // Validate every input before touching the file system, so a bad run
    // leaves no half-made directories behind.
    let install_root = species::install_root();
    let data = species::resolve(&config, &install_root.join("data"))?;
    let bounds = read_length::bounds(&data.genes)?;

    let read_path = reads::resolve_read_path(
        cli.read_dir.as_deref(),
        cwd,
        &source.path_to_config,
        &config,
    )?;
    let barcode_list = barcodes::resolve_barcodes(
        cli.barcodes_csv.as_deref(),
        cwd,
        &source.path_to_config,
        &config,
    )?;
    let guppy_barcoder = guppy::check_demultiplexer(cwd, &config)?;
    let snakefile = workflow::find_workflow_file(&install_root)?;

    let out = outdir::resolve(cli.outdir.as_deref(), cwd, &config, now)?;
    config.output_prefix = out.output_prefix.clone();

    let tempdir = tempdir::resolve(cli.tempdir.as_deref(), cli.no_temp, cwd, &config, &out.outdir)?;

    Ok(Resolution {
        config,
        configfile: source.configfile,
        path_to_config: source.path_to_config,
        outdir: out.outdir,
        rel_outdir: out.rel_outdir,
        output_prefix: out.output_prefix,
        tempdir,
        matrix_file: data.matrix_file,
        cpg_sites: data.cpg_sites,
        genes: data.genes,
        primer_sequences: data.primer_sequences,
        min_length: bounds.min_length,
        max_length: bounds.max_length,
        read_path,
        barcode_list,
        barcode_set,
        guppy_barcoder,
        snakefile,
    })
}

impl Resolution {
    /// Print the hand-off summary for the workflow engine.
    pub fn report(&self) {
        println!("{}", style::bold_underline("Resolved configuration"));
        if let Some(configfile) = &self.configfile {
            println!("  config file: {}", configfile.display());
        }
        println!("  species: {}", self.config.species);
        println!("  output prefix: {}", self.output_prefix);
        println!("  output dir: {}", self.outdir.display());
        println!("  output dir (relative): {}", self.rel_outdir.display());
        println!("  temp dir: {}", self.tempdir.path().display());
        println!("  read path: {}", self.read_path.display());
        println!("  barcode kit: {}", self.barcode_set.as_str());
        if let Some(csv_path) = &self.barcode_list.csv_path {
            println!("  barcodes csv: {}", csv_path.display());
            println!("  barcodes: {}", self.barcode_list.joined);
        }
        if let Some(guppy_barcoder) = &self.guppy_barcoder {
            println!("  demultiplexer: {}", guppy_barcoder.display());
        }
        println!("  substitution matrix: {}", self.matrix_file.display());
        println!("  cpg sites: {}", self.cpg_sites.display());
        println!("  gene reference: {}", self.genes.display());
        println!("  primer sequences: {}", self.primer_sequences.display());
        println!(
            "  read length bounds: {}..{}",
            self.min_length, self.max_length
        );
        println!("  workflow: {}", self.snakefile.display());
    }
}
