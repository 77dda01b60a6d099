//! Missing-value replacement for [`crate::types::Table`].

use crate::types::Table;

/// Replaces every missing cell in `table` with integer zero, in place, and returns the
/// number of cells that were replaced.
///
/// This is a convenience wrapper around [`Table::fill_missing`].
///
/// Replacement is unconditional and untyped: there is no per-column strategy and no
/// distinction between numeric and non-numeric columns. After the call the table contains
/// no missing markers. An empty table is valid input and is left unchanged.
pub fn fill_missing(table: &mut Table) -> usize {
    table.fill_missing()
}
