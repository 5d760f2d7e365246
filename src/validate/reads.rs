//! Basecalled read-path validation.

use crate::config::Config;
use crate::error::{PeaclockError, Result};
use crate::paths::resolve_from;
use std::path::{Path, PathBuf};

/// Resolve the directory of basecalled reads.
///
/// An explicit `--read-dir` is resolved against the working directory and
/// must exist. A `read_path` from the config file is resolved against the
/// config file's directory and must contain at least one fastq file
/// (searched recursively). One of the two must be supplied.
pub fn resolve_read_path(
    read_dir_arg: Option<&Path>,
    cwd: &Path,
    path_to_config: &Path,
    config: &Config,
) -> Result<PathBuf> {
    if let Some(arg) = read_dir_arg {
        let read_path = resolve_from(cwd, arg);
        if !read_path.exists() {
            return Err(PeaclockError::MissingResource(format!(
                "cannot find reads at {}",
                read_path.display()
            )));
        }
        return Ok(read_path);
    }

    if let Some(config_path) = &config.read_path {
        let read_path = resolve_from(path_to_config, config_path);
        let fq_files = count_fastq_files(&read_path)?;
        if fq_files == 0 {
            return Err(PeaclockError::Validation(format!(
                "cannot find fastq files at {}; please check your `--read-dir`",
                read_path.display()
            )));
        }
        println!("Found {fq_files} fastq files in the input directory");
        return Ok(read_path);
    }

    Err(PeaclockError::MissingResource(
        "`--read-dir` needed: please input the path to the fastq read files \
         either in the config file or via the command line"
            .to_string(),
    ))
}

/// Count `.fastq`/`.fq` files under `dir`, recursively, case-insensitively.
fn count_fastq_files(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        PeaclockError::MissingResource(format!("cannot find reads at {}: {}", dir.display(), e))
    })?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| {
            PeaclockError::MissingResource(format!(
                "cannot read entry under {}: {}",
                dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if path.is_dir() {
            count += count_fastq_files(&path)?;
        } else if is_fastq(&path) {
            count += 1;
        }
    }
    Ok(count)
}

fn is_fastq(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            ext == "fastq" || ext == "fq"
        })
}
