//! Reading Node Records exports into an all-text table.
//!
//! Schema inference is disabled so every cell stays a string: boundary rows
//! restate the header text, which would otherwise break numeric inference.

use crate::config::ReshapeConfig;
use crate::error::{ReshapeError, Result};
use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

fn csv_options(config: &ReshapeConfig) -> CsvReadOptions {
    let separator = config.delimiter;
    let truncate_ragged_lines = config.truncate_ragged_lines;

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(move |options| {
            options
                .with_separator(separator)
                .with_truncate_ragged_lines(truncate_ragged_lines)
        })
}

/// Read an export from disk
pub fn read_records_file(path: &Path, config: &ReshapeConfig) -> Result<DataFrame> {
    if !path.exists() {
        return Err(ReshapeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let frame = csv_options(config)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        "Read {} rows x {} columns from {}",
        frame.height(),
        frame.width(),
        path.display()
    );

    Ok(frame)
}

/// Read an export from any in-memory or file-backed reader
pub fn read_records<R: MmapBytesReader>(reader: R, config: &ReshapeConfig) -> Result<DataFrame> {
    let frame = csv_options(config)
        .into_reader_with_file_handle(reader)
        .finish()?;

    debug!("Read {} rows x {} columns", frame.height(), frame.width());

    Ok(frame)
}
