//! Loading entrypoints and implementations.
//!
//! The loader reads a comma-delimited text file into an in-memory [`crate::types::Table`],
//! taking column names from the first line. There is no format auto-detection: CSV is the
//! only supported input format.

pub mod csv;

pub use self::csv::{load_csv_from_path, load_csv_from_reader};
