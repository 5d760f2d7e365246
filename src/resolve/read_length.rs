//! Read-length bounds from the gene reference FASTA.

use crate::error::{PeaclockError, Result};
use bio::io::fasta;
use std::path::Path;

/// Padding added to the longest reference sequence to get `max_length`.
pub const MAX_LENGTH_PAD: u64 = 200;

/// Length filter bounds for the downstream pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Length of the shortest reference sequence.
    pub min_length: u64,
    /// Length of the longest reference sequence, plus the pad.
    pub max_length: u64,
}

/// Scan the gene reference and derive the min/max read-length bounds.
pub fn bounds(genes: &Path) -> Result<LengthBounds> {
    let reader = fasta::Reader::from_file(genes).map_err(|e| {
        PeaclockError::MissingResource(format!(
            "cannot read gene reference at {}: {}",
            genes.display(),
            e
        ))
    })?;

    let mut shortest: Option<u64> = None;
    let mut longest: Option<u64> = None;
    for record in reader.records() {
        let record = record.map_err(|e| {
            PeaclockError::Parse(format!(
                "malformed gene reference at {}: {}",
                genes.display(),
                e
            ))
        })?;
        let len = record.seq().len() as u64;
        shortest = Some(shortest.map_or(len, |s| s.min(len)));
        longest = Some(longest.map_or(len, |l| l.max(len)));
    }

    match (shortest, longest) {
        (Some(min_length), Some(longest)) => Ok(LengthBounds {
            min_length,
            max_length: longest + MAX_LENGTH_PAD,
        }),
        _ => Err(PeaclockError::Validation(format!(
            "no sequences found in gene reference at {}",
            genes.display()
        ))),
    }
}
