//! Configuration management and validation.
//!
//! Describes the export layout (block marker, channel naming) and how the
//! two banks are aligned when they are joined by row position.

use crate::constants::{
    BLOCK_MARKER, CHANNEL_COUNT, CHANNEL_PREFIXES, DEFAULT_DELIMITER, OUTPUT_SUFFIX, TIME_COLUMN,
};
use crate::error::{ReshapeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How bank B rows are matched against bank A rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlignmentPolicy {
    /// Pair rows by position; discrepancies are logged and nulls fill gaps
    #[default]
    Positional,
    /// Pair rows by position but fail on any row count or `Time` discrepancy
    Strict,
}

/// Configuration for reshaping a Node Records export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReshapeConfig {
    /// Prefix of the first cell that marks a block boundary row
    pub block_marker: String,

    /// Name of the timestamp column kept from bank A
    pub time_column: String,

    /// Number of numbered channels per prefix
    pub channel_count: usize,

    /// Channel prefixes, in output order within one channel index
    pub channel_prefixes: Vec<String>,

    /// Row alignment policy for the bank combiner
    pub alignment: AlignmentPolicy,

    /// Absolute tolerance for numeric `Time` comparison
    pub time_tolerance: f64,

    /// Suffix appended to the input file stem for the cleaned output
    pub output_suffix: String,

    /// Field delimiter for reading and writing
    pub delimiter: u8,

    /// Accept rows with more fields than the header by truncating them
    pub truncate_ragged_lines: bool,
}

impl Default for ReshapeConfig {
    fn default() -> Self {
        Self {
            block_marker: BLOCK_MARKER.to_string(),
            time_column: TIME_COLUMN.to_string(),
            channel_count: CHANNEL_COUNT,
            channel_prefixes: CHANNEL_PREFIXES.iter().map(|p| p.to_string()).collect(),
            alignment: AlignmentPolicy::Positional,
            time_tolerance: 0.0,
            output_suffix: OUTPUT_SUFFIX.to_string(),
            delimiter: DEFAULT_DELIMITER,
            truncate_ragged_lines: false,
        }
    }
}

impl ReshapeConfig {
    /// Set the number of channels per prefix
    pub fn with_channel_count(mut self, channel_count: usize) -> Self {
        self.channel_count = channel_count;
        self
    }

    /// Replace the channel prefixes
    pub fn with_channel_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channel_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the alignment policy
    pub fn with_alignment(mut self, alignment: AlignmentPolicy) -> Self {
        self.alignment = alignment;
        self
    }

    /// Fail on any misalignment between the banks
    pub fn strict(self) -> Self {
        self.with_alignment(AlignmentPolicy::Strict)
    }

    /// Set the numeric tolerance used when comparing `Time` values
    pub fn with_time_tolerance(mut self, tolerance: f64) -> Self {
        self.time_tolerance = tolerance;
        self
    }

    /// Set the output file suffix
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Accept rows that have more fields than the header, dropping the extra cells
    pub fn with_ragged_lines(mut self) -> Self {
        self.truncate_ragged_lines = true;
        self
    }

    /// Check the configuration for values the reshaper cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.block_marker.is_empty() {
            return Err(ReshapeError::configuration("block marker must not be empty"));
        }
        if self.time_column.is_empty() {
            return Err(ReshapeError::configuration("time column must not be empty"));
        }
        if self.channel_count == 0 {
            return Err(ReshapeError::configuration(
                "channel count must be at least 1",
            ));
        }
        if self.channel_prefixes.is_empty() {
            return Err(ReshapeError::configuration(
                "at least one channel prefix is required",
            ));
        }

        let mut seen = HashSet::new();
        for prefix in &self.channel_prefixes {
            if prefix.is_empty() {
                return Err(ReshapeError::configuration(
                    "channel prefixes must not be empty",
                ));
            }
            if !seen.insert(prefix.as_str()) {
                return Err(ReshapeError::configuration(format!(
                    "duplicate channel prefix '{}'",
                    prefix
                )));
            }
        }

        if !self.time_tolerance.is_finite() || self.time_tolerance < 0.0 {
            return Err(ReshapeError::configuration(format!(
                "time tolerance must be a finite non-negative number, got {}",
                self.time_tolerance
            )));
        }
        if self.output_suffix.is_empty() {
            return Err(ReshapeError::configuration(
                "output suffix must not be empty",
            ));
        }

        Ok(())
    }
}
