//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::Table`] values produced by loading.
//! It is intentionally simple and purely in-memory.
//!
//! Currently implemented:
//!
//! - [`fill_missing()`]: in-place replacement of missing cells with zero
//!
//! ## Example: fill missing cells
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
//! let filled = fill_missing(&mut table);
//! assert_eq!(filled, 2);
//! assert_eq!(table.missing_count(), 0);
//! assert_eq!(table.rows[0], vec![Value::Int64(1), Value::Int64(0)]);
//! ```

pub mod fill;

pub use fill::fill_missing;
