//! Constants describing the Node Records export layout.

// =============================================================================
// Block Layout
// =============================================================================

/// Text that opens every block boundary row (the repeated header row)
pub const BLOCK_MARKER: &str = "Time";

// =============================================================================
// Column Layout
// =============================================================================

/// Timestamp column shared by both banks
pub const TIME_COLUMN: &str = "Time";

/// Channel measurement prefixes, in output order within one channel index
pub const CHANNEL_PREFIXES: &[&str] = &["Exp", "Prim", "Sec"];

/// Number of numbered channels per prefix
pub const CHANNEL_COUNT: usize = 60;

// =============================================================================
// Output
// =============================================================================

/// Suffix appended to the input file stem for the cleaned output
pub const OUTPUT_SUFFIX: &str = "_CLEAN";

/// Extension used when the input path carries none
pub const DEFAULT_EXTENSION: &str = "csv";

/// Field delimiter for both input and output files
pub const DEFAULT_DELIMITER: u8 = b',';

/// Maximum number of mismatching row indices kept in an alignment report
pub const MAX_REPORTED_MISMATCHES: usize = 10;
