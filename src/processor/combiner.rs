//! Positional combination of bank A and bank B.
//!
//! Row `k` of bank A is paired with row `k` of bank B regardless of their
//! `Time` values. The output always has bank A's row count: surplus bank B
//! rows are dropped and missing ones become nulls.

use crate::config::{AlignmentPolicy, ReshapeConfig};
use crate::constants::MAX_REPORTED_MISMATCHES;
use crate::error::{ReshapeError, Result};
use crate::models::{AlignmentReport, Bank};
use crate::schema::ChannelLayout;
use polars::prelude::*;
use tracing::{debug, warn};

/// Compare the time columns of both banks row by row over their overlap
pub fn check_alignment(
    bank_a: &DataFrame,
    bank_b: &DataFrame,
    time_column: &str,
    tolerance: f64,
) -> Result<AlignmentReport> {
    let a_time = bank_a.column(time_column)?.cast(&DataType::String)?;
    let b_time = bank_b.column(time_column)?.cast(&DataType::String)?;
    let a_cells = a_time.as_materialized_series().str()?;
    let b_cells = b_time.as_materialized_series().str()?;

    let mut report = AlignmentReport {
        bank_a_rows: bank_a.height(),
        bank_b_rows: bank_b.height(),
        ..Default::default()
    };

    for (row, (a, b)) in a_cells.into_iter().zip(b_cells).enumerate() {
        if !times_agree(a, b, tolerance) {
            report.time_mismatches += 1;
            if report.mismatch_rows.len() < MAX_REPORTED_MISMATCHES {
                report.mismatch_rows.push(row);
            }
        }
    }

    Ok(report)
}

/// Two time cells agree when their text matches or both parse to numbers within `tolerance`
fn times_agree(a: Option<&str>, b: Option<&str>, tolerance: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            let (a, b) = (a.trim(), b.trim());
            if a == b {
                return true;
            }
            match (a.parse::<f64>(), b.parse::<f64>()) {
                (Ok(x), Ok(y)) => (x - y).abs() <= tolerance,
                _ => false,
            }
        }
        _ => false,
    }
}

/// Join bank B's channels onto bank A by row position
pub fn combine_banks(
    bank_a: &DataFrame,
    bank_b: &DataFrame,
    layout: &ChannelLayout,
    config: &ReshapeConfig,
) -> Result<(DataFrame, AlignmentReport)> {
    let report = check_alignment(
        bank_a,
        bank_b,
        layout.time_column(),
        config.time_tolerance,
    )?;

    if !report.is_aligned() {
        match config.alignment {
            AlignmentPolicy::Strict => {
                return Err(ReshapeError::AlignmentMismatch {
                    details: report.describe(),
                });
            }
            AlignmentPolicy::Positional => {
                warn!("Banks joined by position despite misalignment: {}", report.describe());
            }
        }
    }

    let b_channels = bank_b.select(layout.renamed_channel_columns(Bank::B))?;
    let b_channels = fit_to_height(b_channels, bank_a.height())?;

    let combined = bank_a.hstack(b_channels.get_columns())?;

    debug!(
        "Combined banks into {} rows x {} columns",
        combined.height(),
        combined.width()
    );

    Ok((combined, report))
}

/// Truncate or null-pad `frame` so it has exactly `height` rows
fn fit_to_height(frame: DataFrame, height: usize) -> Result<DataFrame> {
    let current = frame.height();
    if current >= height {
        return Ok(frame.slice(0, height));
    }

    let padding: Vec<Column> = frame
        .get_columns()
        .iter()
        .map(|column| Column::full_null(column.name().clone(), height - current, column.dtype()))
        .collect();
    let padding = DataFrame::new(padding)?;

    Ok(frame.vstack(&padding)?)
}
