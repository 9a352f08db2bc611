use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use plotsense_model::Row;

use crate::error::{IngestError, Result};

/// Read a JSON file containing a top-level array of flat objects.
///
/// Scalars keep their JSON types (numbers, booleans, strings, null); nested
/// objects or arrays are rejected by deserialization since rows carry
/// scalars only.
pub fn read_json_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<Row> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded json file");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use plotsense_model::Value;

    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "plotsense-json-{}-{}-{name}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn keeps_scalar_types_and_key_order() {
        let path = temp_file(
            "typed.json",
            r#"[{"name":"a","count":3,"active":true,"note":null}]"#,
        );
        let rows = read_json_rows(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(rows.len(), 1);
        let columns: Vec<&str> = rows[0].columns().collect();
        assert_eq!(columns, vec!["name", "count", "active", "note"]);
        assert_eq!(rows[0].get("count"), Some(&Value::Number(3.0)));
        assert_eq!(rows[0].get("active"), Some(&Value::Bool(true)));
        assert_eq!(rows[0].get("note"), Some(&Value::Null));
    }

    #[test]
    fn nested_values_are_an_error() {
        let path = temp_file("nested.json", r#"[{"name":{"inner":1}}]"#);
        let result = read_json_rows(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(IngestError::Json { .. })));
    }
}
