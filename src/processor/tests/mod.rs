//! Pipeline tests for the reshaping engine
//!
//! Tests the complete reshape using synthetic Node Records exports.


use crate::constants::CHANNEL_PREFIXES;
use polars::prelude::DataFrame;

/// Install a test-friendly subscriber so pipeline logs show up with `--nocapture`
pub fn init_test_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("node_records=debug"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_test_writer())
        .try_init();
}

/// Header row for an export with `channel_count` channels per prefix
pub fn header(channel_count: usize) -> Vec<String> {
    let mut columns = vec!["Time".to_string()];
    for index in 1..=channel_count {
        for prefix in CHANNEL_PREFIXES {
            columns.push(format!("{}{}", prefix, index));
        }
    }
    columns
}

/// Cell value encoding bank, row and source column, e.g. `a1:Prim2`
pub fn cell(bank: char, row: usize, column: &str) -> String {
    format!("{}{}:{}", bank, row, column)
}

fn data_rows(bank: char, times: &[&str], header: &[String]) -> Vec<String> {
    times
        .iter()
        .enumerate()
        .map(|(row, time)| {
            let mut cells = vec![time.to_string()];
            cells.extend(header[1..].iter().map(|column| cell(bank, row, column)));
            cells.join(",")
        })
        .collect()
}

/// Two-block export text: bank A rows, a repeated header row, then bank B rows
pub fn node_records_csv(channel_count: usize, a_times: &[&str], b_times: &[&str]) -> String {
    let header = header(channel_count);
    let header_line = header.join(",");

    let mut lines = vec![header_line.clone()];
    lines.extend(data_rows('a', a_times, &header));
    lines.push(header_line);
    lines.extend(data_rows('b', b_times, &header));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Text values of `column`, nulls as `None`
pub fn column_strings(frame: &DataFrame, column: &str) -> Vec<Option<String>> {
    frame
        .column(column)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

pub fn column_names(frame: &DataFrame) -> Vec<String> {
    frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}
