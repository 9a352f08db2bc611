//! Stand-in tabular loaders for the PlotSense core.
//!
//! The analysis core only ever sees plain rows; these loaders turn CSV/TSV
//! and JSON files into that shape and nothing more. No schema validation
//! happens here by design: the column set is whatever the first row carries,
//! and typing the columns is the classifier's job.

#![deny(unsafe_code)]

mod csv_rows;
mod error;
mod json_rows;

use std::path::Path;

use plotsense_model::Row;

pub use crate::csv_rows::read_csv_rows;
pub use crate::error::{IngestError, Result};
pub use crate::json_rows::read_json_rows;

/// Load rows from `path`, dispatching on the file extension:
/// `.csv`, `.tsv`, or `.json` (a top-level array of flat objects).
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => read_csv_rows(path, b','),
        Some("tsv") => read_csv_rows(path, b'\t'),
        Some("json") => read_json_rows(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::load_rows;
    use crate::error::IngestError;

    #[test]
    fn unknown_extension_is_rejected() {
        let result = load_rows(Path::new("chart.xlsx"));
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }
}
