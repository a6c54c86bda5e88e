//! Reshaping engine for Node Records exports.
//!
//! Runs the export through four stages: block splitting, bank extraction,
//! column selection with bank prefixes, and positional combination. The
//! stages are pure functions over polars frames; [`RecordReshaper`] wraps
//! them with file input and output.

pub mod combiner;
pub mod extractor;
pub mod reader;
pub mod selector;
pub mod splitter;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{
    combiner::combine_banks,
    extractor::extract_banks,
    reader::{read_records, read_records_file},
    selector::select_bank,
    splitter::split_blocks,
    writer::{derive_output_path, write_csv, write_csv_file},
};

use crate::config::ReshapeConfig;
use crate::error::{ReshapeError, Result};
use crate::models::{Bank, ReshapeReport};
use crate::schema::ChannelLayout;

use polars::io::mmap::MmapBytesReader;
use polars::prelude::DataFrame;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Combined table together with the report describing how it was built
#[derive(Debug, Clone)]
pub struct Reshaped {
    pub frame: DataFrame,
    pub report: ReshapeReport,
}

/// Reshape a raw export table into the combined bank A / bank B table.
///
/// Holds no state between calls, so independent tables can be reshaped
/// from several threads at once.
pub fn reshape(raw: &DataFrame, config: &ReshapeConfig) -> Result<Reshaped> {
    config.validate()?;
    run_pipeline(raw, config)
}

/// Pipeline body; `config` must already have passed `validate`
fn run_pipeline(raw: &DataFrame, config: &ReshapeConfig) -> Result<Reshaped> {
    let layout = ChannelLayout::from_config(config)?;

    let blocks = split_blocks(raw, &config.block_marker)?;
    let banks = extract_banks(raw, &blocks)?;

    let bank_a = select_bank(&banks.bank_a, &layout, Bank::A)?;
    let bank_b = select_bank(&banks.bank_b, &layout, Bank::B)?;

    let (frame, alignment) = combine_banks(&bank_a, &bank_b, &layout, config)?;

    let ignored_columns = layout.ignored_columns(raw);
    let ignored_channel_columns = ignored_columns
        .iter()
        .filter(|name| layout.parse_channel_column(name).is_some())
        .count();
    if ignored_channel_columns > 0 {
        debug!(
            "Ignoring {} channel columns beyond channel {}",
            ignored_channel_columns, config.channel_count
        );
    }

    let report = ReshapeReport {
        blocks,
        ignored_columns,
        ignored_channel_columns,
        alignment,
        output_rows: frame.height(),
        output_columns: frame.width(),
    };

    Ok(Reshaped { frame, report })
}

/// Cleans a Node Records export on construction and holds the result
#[derive(Debug, Clone)]
pub struct RecordReshaper {
    source_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    config: ReshapeConfig,
    combined: DataFrame,
    report: ReshapeReport,
}

impl RecordReshaper {
    /// Read and clean the export at `path` with the default layout
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(path, ReshapeConfig::default())
    }

    /// Read and clean the export at `path`
    pub fn with_config(path: impl Into<PathBuf>, config: ReshapeConfig) -> Result<Self> {
        let source_path = path.into();
        config.validate()?;

        let raw = read_records_file(&source_path, &config)?;
        let Reshaped { frame, report } = run_pipeline(&raw, &config)?;

        info!("Data from '{}' has been cleaned", source_path.display());

        Ok(Self {
            output_path: Some(derive_output_path(&source_path, &config.output_suffix)),
            source_path: Some(source_path),
            config,
            combined: frame,
            report,
        })
    }

    /// Clean an export supplied by a reader; the result has no derived output path
    pub fn from_reader<R: MmapBytesReader>(reader: R, config: ReshapeConfig) -> Result<Self> {
        config.validate()?;
        let raw = read_records(reader, &config)?;
        Self::from_validated_frame(&raw, config)
    }

    /// Clean an export that is already loaded as a table
    pub fn from_frame(raw: &DataFrame, config: ReshapeConfig) -> Result<Self> {
        config.validate()?;
        Self::from_validated_frame(raw, config)
    }

    fn from_validated_frame(raw: &DataFrame, config: ReshapeConfig) -> Result<Self> {
        let Reshaped { frame, report } = run_pipeline(raw, &config)?;

        Ok(Self {
            source_path: None,
            output_path: None,
            config,
            combined: frame,
            report,
        })
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Where [`save`](Self::save) writes, when the reshaper was built from a file
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn config(&self) -> &ReshapeConfig {
        &self.config
    }

    pub fn report(&self) -> &ReshapeReport {
        &self.report
    }

    /// The combined table
    pub fn to_dataframe(&self) -> &DataFrame {
        &self.combined
    }

    pub fn into_dataframe(self) -> DataFrame {
        self.combined
    }

    /// Write the combined table next to the source file and return its path
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.output_path.clone().ok_or_else(|| {
            ReshapeError::configuration(
                "no output path: reshaper was not built from a file, use save_to",
            )
        })?;

        self.save_to(&path)?;
        Ok(path)
    }

    /// Write the combined table to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        write_csv_file(&self.combined, path, self.config.delimiter)?;
        info!("Cleaned records saved in '{}'", path.display());
        Ok(())
    }

    /// Stream the combined table as delimited text
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        write_csv(&self.combined, writer, self.config.delimiter)
    }
}
