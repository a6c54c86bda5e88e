//! Core data structures for Node Records reshaping.
//!
//! Defines the two instrument banks, block row ranges, and the reports
//! produced alongside the combined table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument bank a block of rows belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    A,
    B,
}

impl Bank {
    /// Letter prepended to this bank's channel column names
    pub fn letter(&self) -> &'static str {
        match self {
            Bank::A => "A",
            Bank::B => "B",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Half-open row range `[start, end)` of the raw table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of comparing bank A and bank B row by row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub bank_a_rows: usize,
    pub bank_b_rows: usize,
    /// Rows (within the overlap) whose `Time` values disagree
    pub time_mismatches: usize,
    /// First few mismatching row positions, in ascending order
    pub mismatch_rows: Vec<usize>,
}

impl AlignmentReport {
    pub fn row_counts_match(&self) -> bool {
        self.bank_a_rows == self.bank_b_rows
    }

    /// Rows of bank A that receive null bank B channels
    pub fn padded_rows(&self) -> usize {
        self.bank_a_rows.saturating_sub(self.bank_b_rows)
    }

    /// Surplus bank B rows dropped by the positional join
    pub fn dropped_rows(&self) -> usize {
        self.bank_b_rows.saturating_sub(self.bank_a_rows)
    }

    pub fn is_aligned(&self) -> bool {
        self.row_counts_match() && self.time_mismatches == 0
    }

    /// Human readable summary of every discrepancy found
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.row_counts_match() {
            parts.push(format!(
                "bank A has {} rows but bank B has {}",
                self.bank_a_rows, self.bank_b_rows
            ));
        }
        if self.time_mismatches > 0 {
            let rows: Vec<String> = self.mismatch_rows.iter().map(|r| r.to_string()).collect();
            parts.push(format!(
                "{} rows have differing Time values (first at rows {})",
                self.time_mismatches,
                rows.join(", ")
            ));
        }
        if parts.is_empty() {
            "banks aligned".to_string()
        } else {
            parts.join("; ")
        }
    }
}

/// Summary of one reshape run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReshapeReport {
    pub blocks: Vec<BlockRange>,
    /// Source columns not carried into the output
    pub ignored_columns: Vec<String>,
    /// Ignored columns that look like channels outside the configured range
    pub ignored_channel_columns: usize,
    pub alignment: AlignmentReport,
    pub output_rows: usize,
    pub output_columns: usize,
}
