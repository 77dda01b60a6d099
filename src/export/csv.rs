//! CSV writing implementation.

use std::path::Path;

use crate::error::PipelineResult;
use crate::types::{Table, Value};

/// Serialize a [`Table`] to a CSV file at `path`, creating or overwriting it.
///
/// Output is a header line followed by one line per row, comma-separated. Row identity is
/// positional and is never written out.
pub fn save_csv_to_path(table: &Table, path: impl AsRef<Path>) -> PipelineResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    save_csv_to_writer(table, &mut wtr)?;
    wtr.flush()?;
    Ok(())
}

/// Write CSV data into an existing CSV writer.
///
/// The caller is responsible for flushing.
pub fn save_csv_to_writer<W: std::io::Write>(
    table: &Table,
    wtr: &mut csv::Writer<W>,
) -> PipelineResult<()> {
    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(render_field))?;
    }
    Ok(())
}

/// Render one cell as a CSV field. Missing cells become empty fields, so a table saved
/// without cleaning round-trips.
fn render_field(value: &Value) -> String {
    match value {
        Value::Missing => String::new(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Utf8(s) => s.clone(),
    }
}
