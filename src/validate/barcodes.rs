//! Barcode CSV validation.

use crate::config::Config;
use crate::error::{PeaclockError, Result};
use crate::paths::resolve_from;
use crate::style;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Barcode identifiers like `NB01` or `BC12`.
static BARCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(NB|BC)\d+$").expect("barcode regex is valid"));

/// Validated barcodes from the run's CSV, in file order.
#[derive(Debug, Clone, Default)]
pub struct BarcodeList {
    /// The CSV the barcodes were read from, if one was supplied.
    pub csv_path: Option<PathBuf>,
    /// Validated barcode identifiers, in file order.
    pub barcodes: Vec<String>,
    /// The identifiers joined with commas, for the workflow engine.
    pub joined: String,
}

/// Resolve and validate the barcodes CSV.
///
/// An explicit `--barcodes-csv` is resolved against the working directory; a
/// config-file path is resolved against the config file's directory. Either
/// way the file must exist, carry a `barcode` header column, and every row's
/// barcode must look like `NB01`/`BC01`. Supplying no CSV at all is not an
/// error: the run proceeds with an empty barcode set.
pub fn resolve_barcodes(
    barcodes_csv_arg: Option<&Path>,
    cwd: &Path,
    path_to_config: &Path,
    config: &Config,
) -> Result<BarcodeList> {
    let csv_path = match (barcodes_csv_arg, &config.barcodes_csv) {
        (Some(arg), _) => Some(resolve_from(cwd, arg)),
        (None, Some(config_path)) => Some(resolve_from(path_to_config, config_path)),
        (None, None) => None,
    };

    let Some(csv_path) = csv_path else {
        println!("{}", style::green("No barcodes csv file input"));
        return Ok(BarcodeList::default());
    };

    if !csv_path.exists() {
        return Err(PeaclockError::MissingResource(format!(
            "cannot find barcodes csv at {}",
            csv_path.display()
        )));
    }

    println!("Input barcodes csv file: {}", csv_path.display());
    let barcodes = read_barcodes(&csv_path)?;
    println!("{} barcodes read in from file", barcodes.len());
    for barcode in &barcodes {
        println!("  - {barcode}");
    }

    let joined = barcodes.join(",");
    Ok(BarcodeList {
        csv_path: Some(csv_path),
        barcodes,
        joined,
    })
}

fn read_barcodes(csv_path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(csv_path).map_err(|e| {
        PeaclockError::Parse(format!(
            "failed to read barcodes csv '{}': {}",
            csv_path.display(),
            e
        ))
    })?;

    let headers = reader.headers().map_err(|e| {
        PeaclockError::Parse(format!(
            "failed to read barcodes csv '{}': {}",
            csv_path.display(),
            e
        ))
    })?;
    let Some(barcode_column) = headers.iter().position(|h| h == "barcode") else {
        return Err(PeaclockError::Validation(
            "barcode file missing header field `barcode`".to_string(),
        ));
    };

    let mut barcodes = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            PeaclockError::Parse(format!(
                "failed to read barcodes csv '{}': {}",
                csv_path.display(),
                e
            ))
        })?;
        let barcode = record.get(barcode_column).unwrap_or("").trim();
        if !BARCODE_RE.is_match(barcode) {
            return Err(PeaclockError::Validation(format!(
                "please provide barcodes in the format `NB01` or `BC01` (got '{barcode}')"
            )));
        }
        barcodes.push(barcode.to_string());
    }
    Ok(barcodes)
}
