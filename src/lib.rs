//! `csv-data-cleaning` is a small library for cleaning CSV files: it loads a CSV file into
//! an in-memory [`types::Table`], fills every missing cell with zero, and writes the table
//! back out as CSV.
//!
//! The primary entrypoint is [`pipeline::clean_csv_file`], which runs the whole
//! load/fill/save flow in one call. The individual stages are also available as plain
//! functions.
//!
//! ## What the pipeline does
//!
//! - **Load** ([`ingestion::load_csv_from_path`]): the first line of the file becomes the
//!   column names, every following line becomes one row. An empty field is loaded as
//!   [`types::Value::Missing`]; other fields are typed as integer, float, or string.
//! - **Fill** ([`processing::fill_missing`]): every missing cell is replaced with the
//!   integer value 0, in place. No per-column strategy, no type distinction.
//! - **Save** ([`export::save_csv_to_path`]): header line plus one line per row, fields
//!   comma-separated. Row identity is positional and is never written out.
//!
//! ## Quick example: clean a file
//!
//! ```no_run
//! use csv_data_cleaning::pipeline::{clean_csv_file, PipelineOptions};
//!
//! # fn main() -> Result<(), csv_data_cleaning::PipelineError> {
//! let stats = clean_csv_file("data.csv", "cleaned.csv", &PipelineOptions::default())?;
//! println!("rows={} cells_filled={}", stats.rows, stats.cells_filled);
//! # Ok(())
//! # }
//! ```
//!
//! ## Stage by stage
//!
//! ```no_run
//! use csv_data_cleaning::export::save_csv_to_path;
//! use csv_data_cleaning::ingestion::load_csv_from_path;
//! use csv_data_cleaning::processing::fill_missing;
//!
//! # fn main() -> Result<(), csv_data_cleaning::PipelineError> {
//! let mut table = load_csv_from_path("data.csv")?;
//! let filled = fill_missing(&mut table);
//! save_csv_to_path(&table, "cleaned.csv")?;
//! println!("replaced {filled} missing cells");
//! # Ok(())
//! # }
//! ```
//!
//! ## In-memory fill
//!
//! ```rust
//! use csv_data_cleaning::processing::fill_missing;
//! use csv_data_cleaning::types::{Table, Value};
//!
//! let mut table = Table::new(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![
//!         vec![Value::Int64(1), Value::Missing],
//!         vec![Value::Missing, Value::Int64(2)],
//!     ],
//! );
//!
//! assert_eq!(fill_missing(&mut table), 2);
//! assert_eq!(table.missing_count(), 0);
//! assert_eq!(table.rows[0], vec![Value::Int64(1), Value::Int64(0)]);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading into a [`types::Table`]
//! - [`processing`]: in-memory table transformations (fill)
//! - [`export`]: CSV saving
//! - [`pipeline`]: end-to-end entrypoint with observer hooks
//! - [`types`]: table + cell value types
//! - [`error`]: error types used across the pipeline
//!
//! ## Errors
//!
//! All fallible operations return [`PipelineResult`]. There are two kinds of failure:
//! [`PipelineError::FileAccess`] for paths that cannot be read or written, and
//! [`PipelineError::Parse`] for malformed delimited content (e.g. rows with inconsistent
//! field counts). Failures halt the pipeline and surface directly to the caller.

pub mod error;
pub mod export;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{PipelineError, PipelineResult};
