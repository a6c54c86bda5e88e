//! Column selection and bank-specific renaming.

use crate::error::{ReshapeError, Result};
use crate::models::Bank;
use crate::schema::ChannelLayout;
use polars::prelude::*;
use tracing::debug;

/// Project `frame` onto the time column and the layout's channels,
/// prefixing every channel name with the bank letter.
///
/// The result is a new frame; `frame` itself is never renamed in place.
pub fn select_bank(frame: &DataFrame, layout: &ChannelLayout, bank: Bank) -> Result<DataFrame> {
    let missing = layout.missing_columns(frame);
    if !missing.is_empty() {
        return Err(ReshapeError::SchemaMismatch { bank, missing });
    }

    let mut columns = Vec::with_capacity(layout.width() + 1);
    columns.push(frame.column(layout.time_column())?.clone());

    for (source, renamed) in layout
        .channel_columns()
        .iter()
        .zip(layout.renamed_channel_columns(bank))
    {
        let column = frame.column(source)?.clone().with_name(renamed.into());
        columns.push(column);
    }

    let selected = DataFrame::new(columns)?;
    if selected.height() == 0 {
        return Err(ReshapeError::EmptyResult { bank });
    }

    debug!(
        "Selected {} columns for bank {} ({} rows)",
        selected.width(),
        bank,
        selected.height()
    );

    Ok(selected)
}
