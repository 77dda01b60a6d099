//! CSV loading implementation.

use std::path::Path;

use crate::error::PipelineResult;
use crate::types::{Table, Value};

/// Load a CSV file into an in-memory [`Table`].
///
/// Rules:
///
/// - The first line is the header and becomes [`Table::columns`].
/// - Every following line is one row; fields are comma-separated.
/// - An empty field is loaded as [`Value::Missing`].
/// - All rows must have the same number of fields as the header.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> PipelineResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> PipelineResult<Table> {
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(infer_value).collect());
    }

    Ok(Table::new(columns, rows))
}

/// Cell typing without a schema: empty field -> missing, else integer, else float, else the
/// raw string verbatim (no trimming, so non-numeric fields round-trip byte-for-byte).
fn infer_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Missing;
    }
    if let Ok(v) = raw.parse::<i64>() {
        return Value::Int64(v);
    }
    if let Ok(v) = raw.parse::<f64>() {
        return Value::Float64(v);
    }
    Value::Utf8(raw.to_owned())
}
