use std::fs::File;
use std::path::Path;

use thiserror::Error;

use crate::model::metric::Metric;
use crate::model::row::Row;

/// Columns the aggregation contract depends on. Checked against the header
/// before any record is parsed, so a schema mismatch never produces a
/// partial result.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Entity",
    "Function",
    Metric::Applied.column(),
    Metric::Approved.column(),
    Metric::UniqueLcs.column(),
    Metric::AppPoints.column(),
    Metric::ApdPoints.column(),
    Metric::UniqueLcsPoints.column(),
];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing column: {column}")]
    MissingColumn { column: String },
    #[error("row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads the spreadsheet CSV export into typed rows. Columns beyond the
/// required set are ignored; a header-only file yields an empty vec.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, InputError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|name| name == required) {
            return Err(InputError::MissingColumn {
                column: required.to_string(),
            });
        }
    }

    let mut rows: Vec<Row> = Vec::new();
    for result in reader.deserialize::<Row>() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or(0);
                return Err(InputError::Row { line, source: err });
            }
        };
        if row.entity.is_empty() {
            tracing::warn!("record with empty Entity value; aggregated under the empty key");
        }
        rows.push(row);
    }

    tracing::info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
