//! Hand-off to the workflow engine.
//!
//! The resolver itself runs no pipeline steps; it locates the bundled
//! workflow definition and prepares the CpG report header the engine's
//! output stage expects.

use crate::error::{PeaclockError, Result};
use std::path::{Path, PathBuf};

/// Locate the bundled Snakemake workflow definition.
pub fn find_workflow_file(install_root: &Path) -> Result<PathBuf> {
    let snakefile = install_root.join("scripts").join("Snakefile");
    if !snakefile.is_file() {
        return Err(PeaclockError::MissingResource(format!(
            "cannot find Snakefile at {}; check the installation",
            snakefile.display()
        )));
    }
    Ok(snakefile)
}

/// Build the CSV header for the per-sample CpG report.
///
/// Reads the species' `cpg_sites.csv` (columns `gene` and
/// `position(1-based)`) and produces `sample,<gene>_<position>,…` with gene
/// names lowercased.
pub fn cpg_header(cpg_csv: &Path) -> Result<String> {
    let mut reader = csv::Reader::from_path(cpg_csv).map_err(|e| {
        PeaclockError::Parse(format!(
            "failed to read cpg sites at '{}': {}",
            cpg_csv.display(),
            e
        ))
    })?;

    let headers = reader.headers().map_err(|e| {
        PeaclockError::Parse(format!(
            "failed to read cpg sites at '{}': {}",
            cpg_csv.display(),
            e
        ))
    })?;
    let gene_column = headers.iter().position(|h| h == "gene");
    let position_column = headers.iter().position(|h| h == "position(1-based)");
    let (Some(gene_column), Some(position_column)) = (gene_column, position_column) else {
        return Err(PeaclockError::Validation(format!(
            "cpg sites file '{}' must have `gene` and `position(1-based)` columns",
            cpg_csv.display()
        )));
    };

    let mut fields = vec!["sample".to_string()];
    for record in reader.records() {
        let record = record.map_err(|e| {
            PeaclockError::Parse(format!(
                "failed to read cpg sites at '{}': {}",
                cpg_csv.display(),
                e
            ))
        })?;
        let gene = record.get(gene_column).unwrap_or("").to_lowercase();
        let position = record.get(position_column).unwrap_or("");
        fields.push(format!("{gene}_{position}"));
    }
    Ok(fields.join(","))
}
