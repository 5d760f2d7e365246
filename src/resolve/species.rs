//! Bundled species reference data.
//!
//! Each supported species ships a directory of reference files under the
//! install's `data/` tree; the substitution matrix is shared across species.

use crate::config::Config;
use crate::error::{PeaclockError, Result};
use std::path::{Path, PathBuf};

/// Resolved reference file paths for one species.
#[derive(Debug, Clone)]
pub struct SpeciesData {
    /// Substitution matrix shared across species.
    pub matrix_file: PathBuf,
    /// CpG site table for the selected species.
    pub cpg_sites: PathBuf,
    /// Gene reference FASTA for the selected species.
    pub genes: PathBuf,
    /// Primer sequence table for the selected species.
    pub primer_sequences: PathBuf,
}

/// Root of the bundled install tree (`data/` and `scripts/` live under it).
///
/// `PEACLOCK_DATA` overrides everything; otherwise the directory holding the
/// executable is used when it carries a `data/` tree, falling back to the
/// crate root for development checkouts.
pub fn install_root() -> PathBuf {
    if let Ok(root) = std::env::var("PEACLOCK_DATA") {
        return PathBuf::from(root);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            if dir.join("data").is_dir() {
                return dir.to_path_buf();
            }
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Resolve the bundled reference files for the configured species.
///
/// The species must be one of `allowed_species`; anything else is a fatal
/// validation error naming the alternatives.
pub fn resolve(config: &Config, data_dir: &Path) -> Result<SpeciesData> {
    let species = &config.species;
    if !config.allowed_species.iter().any(|s| s == species) {
        return Err(PeaclockError::Validation(format!(
            "species '{}' is not configured in PEAClock; please select one of: {}",
            species,
            config.allowed_species.join(", ")
        )));
    }

    let species_dir = data_dir.join(species);
    Ok(SpeciesData {
        matrix_file: data_dir.join("substitution_matrix.txt"),
        cpg_sites: species_dir.join("cpg_sites.csv"),
        genes: species_dir.join("genes.fasta"),
        primer_sequences: species_dir.join("primer_sequences.csv"),
    })
}
