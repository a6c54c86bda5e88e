//! Error handling for Node Records reshaping.
//!
//! Every structural expectation the reshaper relies on has its own variant so a
//! failure names what was wrong with the export (block count, header row,
//! missing channel columns) instead of surfacing a bare indexing error.

use crate::models::Bank;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReshapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Malformed Node Records input: {reason}")]
    MalformedInput { reason: String },

    #[error("Schema mismatch in bank {bank}: missing columns [{}]", .missing.join(", "))]
    SchemaMismatch { bank: Bank, missing: Vec<String> },

    #[error("Bank {bank} has no data rows after column selection")]
    EmptyResult { bank: Bank },

    #[error("Bank alignment check failed: {details}")]
    AlignmentMismatch { details: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ReshapeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReshapeError>;
