//! Node Records Reshaper Library
//!
//! Converts laboratory "Node Records" CSV exports, in which two instrument
//! banks (A and B) are logged one after the other with a repeated header row
//! between them, into one flat table with the banks side by side.
//!
//! This library provides tools for:
//! - Splitting an export into blocks at repeated `Time` header rows
//! - Selecting the `Exp`/`Prim`/`Sec` channel columns and prefixing them per bank
//! - Joining the banks by row position, with an optional strict alignment check
//! - Writing the combined table next to the input as `<name>_CLEAN.csv`
//!
//! ```no_run
//! use node_records::RecordReshaper;
//!
//! let reshaper = RecordReshaper::new("runs/node_records.csv")?;
//! let saved = reshaper.save()?;
//! println!("{} rows written to {}", reshaper.to_dataframe().height(), saved.display());
//! # Ok::<(), node_records::ReshapeError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;
pub mod schema;

// Re-export commonly used types
pub use config::{AlignmentPolicy, ReshapeConfig};
pub use error::{ReshapeError, Result};
pub use models::{AlignmentReport, Bank, BlockRange, ReshapeReport};
pub use processor::writer::derive_output_path;
pub use processor::{RecordReshaper, Reshaped, reshape};
pub use schema::ChannelLayout;
