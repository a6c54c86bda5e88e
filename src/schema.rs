//! Channel column layout for Node Records exports.
//!
//! Channel names are generated by explicit enumeration: channel index outer,
//! prefix inner, so the default layout yields `Exp1, Prim1, Sec1, Exp2, ...`.

use crate::config::ReshapeConfig;
use crate::error::{ReshapeError, Result};
use crate::models::Bank;
use polars::prelude::DataFrame;
use regex::Regex;
use std::collections::HashSet;

/// A channel column name split into its prefix and 1-based index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelColumn {
    pub prefix: String,
    pub index: usize,
}

/// Column layout derived from a [`ReshapeConfig`]
#[derive(Debug, Clone)]
pub struct ChannelLayout {
    time_column: String,
    prefixes: Vec<String>,
    channel_count: usize,
    pattern: Regex,
}

impl ChannelLayout {
    pub fn from_config(config: &ReshapeConfig) -> Result<Self> {
        let alternatives: Vec<String> = config
            .channel_prefixes
            .iter()
            .map(|prefix| regex::escape(prefix))
            .collect();
        let pattern = Regex::new(&format!(r"^({})(\d+)$", alternatives.join("|"))).map_err(
            |e| ReshapeError::configuration(format!("invalid channel prefixes: {}", e)),
        )?;

        Ok(Self {
            time_column: config.time_column.clone(),
            prefixes: config.channel_prefixes.clone(),
            channel_count: config.channel_count,
            pattern,
        })
    }

    pub fn time_column(&self) -> &str {
        &self.time_column
    }

    /// Number of channel columns per bank
    pub fn width(&self) -> usize {
        self.prefixes.len() * self.channel_count
    }

    /// Source channel names in output order
    pub fn channel_columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.width());
        for index in 1..=self.channel_count {
            for prefix in &self.prefixes {
                columns.push(format!("{}{}", prefix, index));
            }
        }
        columns
    }

    /// Columns selected from each bank: the time column then every channel
    pub fn source_columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.width() + 1);
        columns.push(self.time_column.clone());
        columns.extend(self.channel_columns());
        columns
    }

    /// Channel names as they appear in the output for `bank`
    pub fn renamed_channel_columns(&self, bank: Bank) -> Vec<String> {
        self.channel_columns()
            .into_iter()
            .map(|name| format!("{}{}", bank.letter(), name))
            .collect()
    }

    /// Full output header: time, bank A channels, bank B channels
    pub fn output_columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(2 * self.width() + 1);
        columns.push(self.time_column.clone());
        columns.extend(self.renamed_channel_columns(Bank::A));
        columns.extend(self.renamed_channel_columns(Bank::B));
        columns
    }

    /// Recognise a `{prefix}{index}` column name, whether or not the index is in range
    pub fn parse_channel_column(&self, name: &str) -> Option<ChannelColumn> {
        let captures = self.pattern.captures(name)?;
        let index = captures.get(2)?.as_str().parse::<usize>().ok()?;
        Some(ChannelColumn {
            prefix: captures.get(1)?.as_str().to_string(),
            index,
        })
    }

    /// Selected source columns absent from `frame`, in layout order
    pub fn missing_columns(&self, frame: &DataFrame) -> Vec<String> {
        self.source_columns()
            .into_iter()
            .filter(|name| frame.get_column_index(name).is_none())
            .collect()
    }

    /// Columns of `frame` that the reshape discards
    pub fn ignored_columns(&self, frame: &DataFrame) -> Vec<String> {
        let selected: HashSet<String> = self.source_columns().into_iter().collect();
        frame
            .get_column_names()
            .into_iter()
            .filter(|name| !selected.contains(name.as_str()))
            .map(|name| name.to_string())
            .collect()
    }
}
