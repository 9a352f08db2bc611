use std::path::Path;

use plotsense_model::{Row, Value};

use crate::error::{IngestError, Result};

/// Read a delimited file into rows, taking column names from the header.
///
/// Cells are trimmed; an empty cell becomes [`Value::Null`]. Everything else
/// stays text — deciding whether a column is numeric or temporal is the
/// classifier's concern, not the loader's.
pub fn read_csv_rows(path: &Path, delimiter: u8) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row = Row::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            let cell = cell.trim();
            let value = if cell.is_empty() {
                Value::Null
            } else {
                Value::Text(cell.to_owned())
            };
            row.insert(header, value);
        }
        rows.push(row);
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded delimited file");
    Ok(rows)
}
