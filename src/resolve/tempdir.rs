//! Temporary directory resolution.
//!
//! Priority, highest first: `--no-temp` (flag or config) uses the output
//! directory itself; an explicit `--tempdir` or a config `tempdir` gets a
//! uniquely named subdirectory created under it; otherwise a directory is
//! allocated in the system temp location. A process-allocated directory is
//! removed when its guard drops, so the guard travels with the resolution
//! and lives until the pipeline run is finished.

use crate::config::Config;
use crate::error::{PeaclockError, Result};
use crate::paths::resolve_from;
use crate::style;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Where intermediate files go, holding the guard for any directory this
/// process allocated.
#[derive(Debug)]
pub struct TempSpace {
    path: PathBuf,
    guard: Option<TempDir>,
}

impl TempSpace {
    fn persistent(path: PathBuf) -> Self {
        Self { path, guard: None }
    }

    fn managed(guard: TempDir) -> Self {
        Self {
            path: guard.path().to_path_buf(),
            guard: Some(guard),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when this process allocated the directory and will remove it on
    /// drop.
    pub fn is_managed(&self) -> bool {
        self.guard.is_some()
    }
}

/// Resolve the temp space for a run.
pub fn resolve(
    tempdir_arg: Option<&Path>,
    no_temp_arg: bool,
    cwd: &Path,
    config: &Config,
    outdir: &Path,
) -> Result<TempSpace> {
    if no_temp_arg || config.no_temp {
        println!(
            "{} all intermediate files will be written to {}",
            style::green("--no-temp:"),
            outdir.display()
        );
        return Ok(TempSpace::persistent(outdir.to_path_buf()));
    }

    let parent = tempdir_arg
        .map(|dir| resolve_from(cwd, dir))
        .or_else(|| config.tempdir.as_deref().map(|dir| resolve_from(cwd, dir)));

    match parent {
        Some(parent) => {
            std::fs::create_dir_all(&parent).map_err(|e| {
                PeaclockError::MissingResource(format!(
                    "cannot create temp directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
            let guard = tempfile::Builder::new()
                .prefix("peaclock_")
                .tempdir_in(&parent)
                .map_err(|e| {
                    PeaclockError::MissingResource(format!(
                        "cannot allocate temp directory under {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            Ok(TempSpace::managed(guard))
        }
        None => {
            let guard = tempfile::tempdir().map_err(|e| {
                PeaclockError::MissingResource(format!("cannot allocate temp directory: {e}"))
            })?;
            Ok(TempSpace::managed(guard))
        }
    }
}
