//! Block splitting for Node Records exports.
//!
//! A block starts at every row whose first cell begins with the block marker.
//! Row 0 is always a split point, so the first block spans from the top of
//! the table to the first marker row.

use crate::error::{ReshapeError, Result};
use crate::models::BlockRange;
use polars::prelude::*;
use tracing::debug;

/// Indices of every row whose first cell starts with `marker`
pub fn find_marker_rows(frame: &DataFrame, marker: &str) -> Result<Vec<usize>> {
    let first = frame
        .get_columns()
        .first()
        .ok_or_else(|| ReshapeError::malformed("input table has no columns"))?;

    let text = first.cast(&DataType::String)?;
    let cells = text.as_materialized_series().str()?;

    let rows = cells
        .into_iter()
        .enumerate()
        .filter_map(|(row, cell)| match cell {
            Some(value) if value.starts_with(marker) => Some(row),
            _ => None,
        })
        .collect();

    Ok(rows)
}

/// Split the table into consecutive row ranges at every marker row
pub fn split_blocks(frame: &DataFrame, marker: &str) -> Result<Vec<BlockRange>> {
    let mut split_points = vec![0];
    split_points.extend(find_marker_rows(frame, marker)?);

    let height = frame.height();
    let blocks: Vec<BlockRange> = split_points
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = split_points.get(i + 1).copied().unwrap_or(height);
            BlockRange::new(start, end)
        })
        .collect();

    debug!(
        "Split {} rows into {} blocks at {:?}",
        height,
        blocks.len(),
        split_points
    );

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_column(cells: &[Option<&str>]) -> DataFrame {
        let time = Series::new("Time".into(), cells);
        let value = Series::new("Exp1".into(), vec!["1"; cells.len()]);
        DataFrame::new(vec![time.into(), value.into()]).unwrap()
    }

    #[test]
    fn test_single_marker_yields_two_blocks() {
        let frame = first_column(&[
            Some("0.0"),
            Some("0.5"),
            Some("Time"),
            Some("0.0"),
            Some("0.5"),
        ]);

        let blocks = split_blocks(&frame, "Time").unwrap();
        assert_eq!(blocks, vec![BlockRange::new(0, 2), BlockRange::new(2, 5)]);
    }

    #[test]
    fn test_marker_matches_prefix() {
        let frame = first_column(&[Some("1"), Some("Time (s)"), Some("2")]);
        assert_eq!(find_marker_rows(&frame, "Time").unwrap(), vec![1]);
    }

    #[test]
    fn test_no_marker_yields_one_block() {
        let frame = first_column(&[Some("0.0"), Some("0.5")]);
        let blocks = split_blocks(&frame, "Time").unwrap();
        assert_eq!(blocks, vec![BlockRange::new(0, 2)]);
    }

    #[test]
    fn test_marker_on_first_row_produces_empty_leading_block() {
        let frame = first_column(&[Some("Time"), Some("0.0"), Some("Time"), Some("0.0")]);
        let blocks = split_blocks(&frame, "Time").unwrap();
        assert_eq!(
            blocks,
            vec![
                BlockRange::new(0, 0),
                BlockRange::new(0, 2),
                BlockRange::new(2, 4)
            ]
        );
    }

    #[test]
    fn test_null_cells_are_not_markers() {
        let frame = first_column(&[Some("0.0"), None, Some("Time"), None]);
        assert_eq!(find_marker_rows(&frame, "Time").unwrap(), vec![2]);
    }

    #[test]
    fn test_numeric_first_column_is_cast_to_text() {
        let frame = df!("Time" => [0.0f64, 0.5, 1.0], "Exp1" => ["1", "2", "3"]).unwrap();
        let blocks = split_blocks(&frame, "Time").unwrap();
        assert_eq!(blocks, vec![BlockRange::new(0, 3)]);
    }

    #[test]
    fn test_table_without_columns_is_malformed() {
        let frame = DataFrame::empty();
        assert!(matches!(
            split_blocks(&frame, "Time"),
            Err(ReshapeError::MalformedInput { .. })
        ));
    }
}
