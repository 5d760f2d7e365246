//! Tests for directory, species-data, and read-length resolution.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::PeaclockError;
use crate::resolve::{outdir, read_length, species, tempdir};
use chrono::{Duration, Local, TimeZone};
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixed_time(ms: i64) -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 8, 23, 14, 30, 21).unwrap() + Duration::milliseconds(ms)
}

// =========================================================================
// Output directory
// =========================================================================

#[test]
fn synthesized_outdirs_differ_per_timestamp_and_are_created() {
    let dir = TempDir::new().unwrap();
    let config = Config::default();

    let first = outdir::resolve(None, dir.path(), &config, fixed_time(123)).unwrap();
    let second = outdir::resolve(None, dir.path(), &config, fixed_time(456)).unwrap();

    assert_ne!(first.outdir, second.outdir);
    assert!(first.outdir.is_dir());
    assert!(second.outdir.is_dir());
    assert!(
        first
            .outdir
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("peaclock_apodemus_2026-08-23-")
    );
}

#[test]
fn outdir_creation_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let config = Config::default();

    let first = outdir::resolve(None, dir.path(), &config, fixed_time(0)).unwrap();
    let second = outdir::resolve(None, dir.path(), &config, fixed_time(0)).unwrap();
    assert_eq!(first.outdir, second.outdir);
}

#[test]
fn explicit_outdir_is_resolved_against_cwd() {
    let dir = TempDir::new().unwrap();
    let config = Config::default();

    let out = outdir::resolve(
        Some(Path::new("results")),
        dir.path(),
        &config,
        fixed_time(0),
    )
    .unwrap();
    assert_eq!(out.outdir, dir.path().join("results"));
    assert_eq!(out.rel_outdir, Path::new("./results"));
    assert!(out.outdir.is_dir());
}

#[test]
fn output_prefix_gets_the_run_date_without_compounding() {
    let dir = TempDir::new().unwrap();

    let config = Config::default();
    let out = outdir::resolve(None, dir.path(), &config, fixed_time(0)).unwrap();
    assert_eq!(out.output_prefix, "peaclock_2026-08-23");

    // A prefix from a previous dated run is stripped before dating again.
    let config = Config {
        output_prefix: "peaclock_2025-01-30".to_string(),
        ..Config::default()
    };
    let out = outdir::resolve(None, dir.path(), &config, fixed_time(0)).unwrap();
    assert_eq!(out.output_prefix, "peaclock_2026-08-23");
    assert!(
        out.outdir
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("peaclock_apodemus_")
    );
}

// =========================================================================
// Temp directory
// =========================================================================

#[test]
fn no_temp_uses_the_output_directory_itself() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("run_out");
    std::fs::create_dir(&out).unwrap();

    let space = tempdir::resolve(None, true, dir.path(), &Config::default(), &out).unwrap();
    assert_eq!(space.path(), out);
    assert!(!space.is_managed());

    // The config flag works the same way as the CLI flag.
    let config = Config {
        no_temp: true,
        ..Config::default()
    };
    let space = tempdir::resolve(None, false, dir.path(), &config, &out).unwrap();
    assert_eq!(space.path(), out);
}

#[test]
fn explicit_tempdir_gets_a_unique_subdirectory() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("run_out");
    std::fs::create_dir(&out).unwrap();

    let space = tempdir::resolve(
        Some(Path::new("scratch")),
        false,
        dir.path(),
        &Config::default(),
        &out,
    )
    .unwrap();
    assert!(space.is_managed());
    assert!(space.path().starts_with(dir.path().join("scratch")));
    assert!(space.path().is_dir());
}

#[test]
fn config_tempdir_is_used_when_no_argument_is_given() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("run_out");
    std::fs::create_dir(&out).unwrap();

    let config = Config {
        tempdir: Some(PathBuf::from("cfg_scratch")),
        ..Config::default()
    };
    let space = tempdir::resolve(None, false, dir.path(), &config, &out).unwrap();
    assert!(space.path().starts_with(dir.path().join("cfg_scratch")));
}

#[test]
fn process_allocated_tempdir_lives_until_the_space_is_dropped() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("run_out");
    std::fs::create_dir(&out).unwrap();

    let space = tempdir::resolve(None, false, dir.path(), &Config::default(), &out).unwrap();
    assert!(space.is_managed());
    let path = space.path().to_path_buf();
    assert!(path.is_dir());
    drop(space);
    assert!(!path.exists());
}

// =========================================================================
// Species data
// =========================================================================

#[test]
fn apodemus_resolves_all_reference_paths() {
    let data_dir = Path::new("/opt/peaclock/data");
    let data = species::resolve(&Config::default(), data_dir).unwrap();

    assert_eq!(data.matrix_file, data_dir.join("substitution_matrix.txt"));
    assert_eq!(data.cpg_sites, data_dir.join("apodemus/cpg_sites.csv"));
    assert_eq!(data.genes, data_dir.join("apodemus/genes.fasta"));
    assert_eq!(
        data.primer_sequences,
        data_dir.join("apodemus/primer_sequences.csv")
    );
}

#[test]
fn unknown_species_is_fatal_and_names_the_alternatives() {
    let config = Config {
        species: "cat".to_string(),
        ..Config::default()
    };
    let err = species::resolve(&config, Path::new("/opt/peaclock/data")).unwrap_err();
    assert!(matches!(err, PeaclockError::Validation(_)));
    let message = err.to_string();
    assert!(message.contains("cat"));
    assert!(message.contains("apodemus"));
    assert!(message.contains("phalacrocorax"));
}

// =========================================================================
// Read-length bounds
// =========================================================================

#[test]
fn bounds_come_from_shortest_and_padded_longest() {
    let dir = TempDir::new().unwrap();
    let genes = dir.path().join("genes.fasta");
    std::fs::write(
        &genes,
        format!(">short\n{}\n>long\n{}\n", "A".repeat(180), "C".repeat(220)),
    )
    .unwrap();

    let bounds = read_length::bounds(&genes).unwrap();
    assert_eq!(bounds.min_length, 180);
    assert_eq!(bounds.max_length, 420);
}

#[test]
fn missing_gene_reference_is_fatal() {
    let err = read_length::bounds(Path::new("/nonexistent/genes.fasta")).unwrap_err();
    assert!(matches!(err, PeaclockError::MissingResource(_)));
}

#[test]
fn empty_gene_reference_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let genes = dir.path().join("genes.fasta");
    std::fs::write(&genes, "").unwrap();

    let err = read_length::bounds(&genes).unwrap_err();
    assert!(matches!(err, PeaclockError::Validation(_)));
}

// =========================================================================
// Full sequence
// =========================================================================

/// Lay out an install root with species data and a Snakefile.
fn write_install_root(root: &Path) {
    let apodemus = root.join("data").join("apodemus");
    std::fs::create_dir_all(&apodemus).unwrap();
    std::fs::write(root.join("data/substitution_matrix.txt"), "A C G T\n").unwrap();
    std::fs::write(apodemus.join("cpg_sites.csv"), "gene,position(1-based)\nTET2,102\n").unwrap();
    std::fs::write(
        apodemus.join("genes.fasta"),
        format!(">tet2\n{}\n>aspa\n{}\n", "A".repeat(180), "C".repeat(220)),
    )
    .unwrap();
    std::fs::write(apodemus.join("primer_sequences.csv"), "name,sequence\np1,ACGT\n").unwrap();
    std::fs::create_dir_all(root.join("scripts")).unwrap();
    std::fs::write(root.join("scripts/Snakefile"), "rule all:\n").unwrap();
}

#[test]
#[serial]
fn full_resolution_produces_a_complete_handoff() {
    let install = TempDir::new().unwrap();
    write_install_root(install.path());
    // SAFETY: serialized test; no other thread touches the environment.
    unsafe { std::env::set_var("PEACLOCK_DATA", install.path()) };

    let cwd = TempDir::new().unwrap();
    std::fs::write(
        cwd.path().join("config.yaml"),
        "species: apodemus\nread-dir: reads\nbarcodes-csv: barcodes.csv\n",
    )
    .unwrap();
    std::fs::create_dir(cwd.path().join("reads")).unwrap();
    std::fs::write(cwd.path().join("reads/run.fastq"), "@r\nACGT\n+\nIIII\n").unwrap();
    std::fs::write(cwd.path().join("barcodes.csv"), "barcode\nNB01\nNB02\n").unwrap();

    let cli = Cli {
        no_temp: true,
        ..Cli::default()
    };
    let resolution = crate::resolve::resolve(&cli, cwd.path(), fixed_time(0)).unwrap();

    unsafe { std::env::remove_var("PEACLOCK_DATA") };

    assert_eq!(resolution.config.species, "apodemus");
    assert_eq!(resolution.min_length, 180);
    assert_eq!(resolution.max_length, 420);
    assert_eq!(resolution.tempdir.path(), resolution.outdir);
    assert_eq!(resolution.read_path, cwd.path().join("reads"));
    assert_eq!(resolution.barcode_list.joined, "NB01,NB02");
    assert_eq!(resolution.snakefile, install.path().join("scripts/Snakefile"));
    assert!(resolution.outdir.is_dir());
}

#[test]
#[serial]
fn failed_validation_creates_no_directories() {
    let install = TempDir::new().unwrap();
    write_install_root(install.path());
    // SAFETY: serialized test; no other thread touches the environment.
    unsafe { std::env::set_var("PEACLOCK_DATA", install.path()) };

    let cwd = TempDir::new().unwrap();
    std::fs::create_dir(cwd.path().join("reads")).unwrap();
    std::fs::write(cwd.path().join("reads/run.fastq"), "@r\nACGT\n+\nIIII\n").unwrap();
    // Header is `name`, not `barcode`.
    std::fs::write(cwd.path().join("barcodes.csv"), "name\nNB01\n").unwrap();

    let cli = Cli {
        read_dir: Some(PathBuf::from("reads")),
        barcodes_csv: Some(PathBuf::from("barcodes.csv")),
        ..Cli::default()
    };
    let err = crate::resolve::resolve(&cli, cwd.path(), fixed_time(0)).unwrap_err();

    unsafe { std::env::remove_var("PEACLOCK_DATA") };

    assert!(matches!(err, PeaclockError::Validation(_)));
    // No output directory was synthesized for the failed run.
    let leftovers: Vec<_> = std::fs::read_dir(cwd.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir() && entry.file_name() != "reads")
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
#[serial]
fn cli_species_overrides_the_config_file() {
    let install = TempDir::new().unwrap();
    write_install_root(install.path());
    let mus = install.path().join("data").join("mus");
    std::fs::create_dir_all(&mus).unwrap();
    std::fs::write(
        mus.join("genes.fasta"),
        format!(">g\n{}\n", "G".repeat(200)),
    )
    .unwrap();
    std::fs::write(mus.join("cpg_sites.csv"), "gene,position(1-based)\n").unwrap();
    std::fs::write(mus.join("primer_sequences.csv"), "name,sequence\n").unwrap();
    // SAFETY: serialized test; no other thread touches the environment.
    unsafe { std::env::set_var("PEACLOCK_DATA", install.path()) };

    let cwd = TempDir::new().unwrap();
    std::fs::write(cwd.path().join("config.yaml"), "species: apodemus\n").unwrap();
    std::fs::create_dir(cwd.path().join("reads")).unwrap();
    std::fs::write(cwd.path().join("reads/run.fq"), "@r\nACGT\n+\nIIII\n").unwrap();

    let cli = Cli {
        species: Some("mus".to_string()),
        read_dir: Some(PathBuf::from("reads")),
        no_temp: true,
        ..Cli::default()
    };
    let resolution = crate::resolve::resolve(&cli, cwd.path(), fixed_time(0)).unwrap();

    unsafe { std::env::remove_var("PEACLOCK_DATA") };

    assert_eq!(resolution.config.species, "mus");
    assert_eq!(resolution.min_length, 200);
    assert_eq!(resolution.max_length, 400);
    assert!(resolution.genes.ends_with("mus/genes.fasta"));
}
