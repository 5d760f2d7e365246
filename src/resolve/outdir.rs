//! Output directory resolution.
//!
//! With an explicit `--outdir` the directory is used as given (tilde-expanded
//! and resolved against the working directory). Otherwise one is synthesized
//! from the output prefix, the species, and a millisecond run timestamp, so
//! each run lands in its own directory. Creation is idempotent either way.

use crate::config::Config;
use crate::error::{PeaclockError, Result};
use crate::paths::resolve_from;
use crate::style;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Resolved output locations for a run.
#[derive(Debug, Clone)]
pub struct OutDirs {
    /// Absolute output directory, created if absent.
    pub outdir: PathBuf,
    /// Output directory relative to the working directory.
    pub rel_outdir: PathBuf,
    /// Output file prefix with the run date appended.
    pub output_prefix: String,
}

/// Resolve and create the output directory.
///
/// `now` is passed in rather than read from the clock so callers (and tests)
/// control the run timestamp.
pub fn resolve(
    outdir_arg: Option<&Path>,
    cwd: &Path,
    config: &Config,
    now: DateTime<Local>,
) -> Result<OutDirs> {
    let explicit = outdir_arg.or(config.outdir.as_deref());

    let outdir = match explicit {
        Some(dir) => resolve_from(cwd, dir),
        None => {
            let prefix = strip_run_date(&config.output_prefix);
            let stamp = run_timestamp(now);
            cwd.join(format!("{prefix}_{}_{stamp}", config.species))
        }
    };

    // Re-strip before dating so repeated runs don't compound timestamps.
    let output_prefix = format!(
        "{}_{}",
        strip_run_date(&config.output_prefix),
        now.format("%Y-%m-%d")
    );

    std::fs::create_dir_all(&outdir).map_err(|e| {
        PeaclockError::MissingResource(format!(
            "cannot create output directory {}: {}",
            outdir.display(),
            e
        ))
    })?;

    let rel_outdir = match outdir.strip_prefix(cwd) {
        Ok(rel) => Path::new(".").join(rel),
        Err(_) => outdir.clone(),
    };

    println!("{} {}", style::green("Output dir:"), outdir.display());

    Ok(OutDirs {
        outdir,
        rel_outdir,
        output_prefix,
    })
}

/// Millisecond-precision timestamp with `:` and `.` removed and `T`
/// replaced by `-` (e.g. `2026-08-23-143021123`).
fn run_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d-%H%M%S%3f").to_string()
}

/// Drop a trailing `_20…` segment from a prefix, so a prefix that already
/// carries a run date does not accumulate another one.
fn strip_run_date(prefix: &str) -> String {
    let parts: Vec<&str> = prefix.split('_').collect();
    match parts.split_last() {
        Some((last, rest)) if last.starts_with("20") => rest.join("_"),
        _ => prefix.to_string(),
    }
}
