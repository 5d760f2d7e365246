//! Exit code constants for the peaclock CLI.
//!
//! Every fatal resolution failure maps to one of these codes:
//! - 0: Success
//! - 1: Missing resource (config file, reads, barcodes csv, guppy binary)
//! - 2: Validation failure (bad species, barcode syntax, empty read dir)
//! - 3: Parse failure (malformed YAML or CSV)
//! - 4: External tool failure (guppy_barcoder probe)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Missing resource: a referenced file, directory, or binary does not exist.
pub const MISSING_RESOURCE: i32 = 1;

/// Validation failure: a supplied value is outside the accepted set.
pub const VALIDATION_FAILURE: i32 = 2;

/// Parse failure: a config or barcodes file could not be parsed.
pub const PARSE_FAILURE: i32 = 3;

/// External tool failure: the demultiplexer probe did not run cleanly.
pub const TOOL_FAILURE: i32 = 4;
