//! Input validation for the resolver.
//!
//! Each check is fatal on failure: read directories must exist and contain
//! fastq files, barcode CSVs must carry a `barcode` column with well-formed
//! values, and an enabled demultiplexing step must have a runnable
//! guppy_barcoder.

pub mod barcodes;
pub mod guppy;
pub mod reads;


pub use barcodes::BarcodeList;
