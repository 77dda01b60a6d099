//! Saving entrypoints and implementations.
//!
//! The writer serializes an in-memory [`crate::types::Table`] back to comma-delimited text,
//! header line first. The output convention matches the loader's input convention, except
//! that a cleaned table no longer contains empty fields.

pub mod csv;

pub use self::csv::{save_csv_to_path, save_csv_to_writer};
