//! CSV output for the combined table.

use crate::constants::DEFAULT_EXTENSION;
use crate::error::Result;
use polars::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output path next to `input`: `dir/foo.csv` becomes `dir/foo{suffix}.csv`
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let extension = input
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let file_name = format!("{}{}.{}", stem, suffix, extension);

    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write `frame` as delimited text with a header row and no index column
pub fn write_csv<W: Write>(frame: &DataFrame, writer: W, delimiter: u8) -> Result<()> {
    // CsvWriter needs a mutable frame; the clone shares column buffers
    let mut frame = frame.clone();
    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(delimiter)
        .finish(&mut frame)?;
    Ok(())
}

/// Write `frame` to `path`, replacing any existing file
pub fn write_csv_file(frame: &DataFrame, path: &Path, delimiter: u8) -> Result<()> {
    let file = File::create(path)?;
    write_csv(frame, file, delimiter)?;

    debug!(
        "Wrote {} rows x {} columns to {}",
        frame.height(),
        frame.width(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("/data/run1/foo.csv"), "_CLEAN"),
            PathBuf::from("/data/run1/foo_CLEAN.csv")
        );
        assert_eq!(
            derive_output_path(Path::new("foo.csv"), "_CLEAN"),
            PathBuf::from("foo_CLEAN.csv")
        );
        assert_eq!(
            derive_output_path(Path::new("logs/node.records.txt"), "_CLEAN"),
            PathBuf::from("logs/node.records_CLEAN.txt")
        );
        assert_eq!(
            derive_output_path(Path::new("logs/export"), "_CLEAN"),
            PathBuf::from("logs/export_CLEAN.csv")
        );
    }

    #[test]
    fn test_nulls_written_as_empty_fields() {
        let frame = df!(
            "Time" => ["0.0", "0.5"],
            "BExp1" => [Some("b0"), None]
        )
        .unwrap();

        let mut buffer = Vec::new();
        write_csv(&frame, &mut buffer, b',').unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "Time,BExp1\n0.0,b0\n0.5,\n");
    }
}
