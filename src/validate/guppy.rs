//! Demultiplexing tool check.
//!
//! When demultiplexing is requested, the configured guppy directory must
//! contain a runnable `guppy_barcoder`. The binary is invoked once as a
//! readiness probe with its output discarded; the real demultiplexing
//! arguments are the workflow engine's business.

use crate::config::Config;
use crate::error::{PeaclockError, Result};
use crate::paths::resolve_from;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Check that the demultiplexer is available when demultiplexing is enabled.
///
/// Returns the path to the probed binary, or `None` when demultiplexing is
/// off.
pub fn check_demultiplexer(cwd: &Path, config: &Config) -> Result<Option<PathBuf>> {
    if !config.demultiplex {
        return Ok(None);
    }

    let Some(guppy_dir) = &config.path_to_guppy else {
        return Err(PeaclockError::MissingResource(
            "please provide the path to guppy_barcoder or demultiplex reads in MinKNOW".to_string(),
        ));
    };

    let binary = resolve_from(cwd, guppy_dir).join("guppy_barcoder");
    let status = Command::new(&binary)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(PeaclockError::MissingResource(format!(
                "cannot find guppy_barcoder at {}",
                binary.display()
            )))
        }
        Err(e) => Err(PeaclockError::Tool(format!(
            "guppy_barcoder at {} failed to start: {}",
            binary.display(),
            e
        ))),
        Ok(status) if !status.success() => Err(PeaclockError::Tool(format!(
            "guppy_barcoder at {} fails to run ({})",
            binary.display(),
            status
        ))),
        Ok(_) => Ok(Some(binary)),
    }
}
