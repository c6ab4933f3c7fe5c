use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CellValue, Listing, ListingTable, REQUIRED_COLUMNS};

/// Where the dashboard looks for its dataset on startup, relative to the
/// working directory.
pub const DEFAULT_DATA_PATH: &str = "data/data_scraping.csv";

/// Domain-level loading failures. I/O and parser errors are wrapped with
/// `anyhow` context instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {0} is not a JSON object")]
    NotAnObject(usize),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a listing table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with column names (the scraper's native output)
/// * `.json` – `[{ "title": ..., "city": ..., ...cols }, ...]`
pub fn load_file(path: &Path) -> Result<ListingTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

fn check_required_columns(column_names: &[String]) -> Result<(), LoadError> {
    for required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|c| c == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<ListingTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    check_required_columns(&headers)?;

    let mut listings = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut fields = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                continue;
            };
            fields.insert(col_name.clone(), guess_cell_type(value));
        }
        listings.push(Listing { fields });
    }

    Ok(ListingTable::from_listings(listings, headers))
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "title": "Villa with Pool", "city": "Ubud", "price": "Rp 1.500.000" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<ListingTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut listings = Vec::with_capacity(records.len());
    let mut column_names: Vec<String> = Vec::new();

    for (i, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or(LoadError::NotAnObject(i))?;

        let mut fields = BTreeMap::new();
        for (key, val) in obj {
            if !column_names.iter().any(|c| c == key) {
                column_names.push(key.clone());
            }
            fields.insert(key.clone(), json_to_cell(val));
        }
        listings.push(Listing { fields });
    }

    check_required_columns(&column_names)?;

    Ok(ListingTable::from_listings(listings, column_names))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_fixture(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn loads_csv_with_typed_cells() {
        let file = csv_fixture(
            "title,city,price,bathroom,property_links\n\
             Villa with Pool,Ubud,Rp 1.500.000,2,https://example.com/1\n\
             Guesthouse,Canggu,,1,https://example.com/2\n",
        );

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names[0], "title");
        assert_eq!(table.listings[0].title(), Some("Villa with Pool"));
        assert_eq!(
            table.listings[0].price(),
            Some(&CellValue::Text("Rp 1.500.000".to_string()))
        );
        assert_eq!(table.listings[0].bathroom(), Some(2.0));
        // empty price cell loads as null
        assert_eq!(table.listings[1].price(), None);
    }

    #[test]
    fn preserves_row_order() {
        let file = csv_fixture(
            "title,city,price,bathroom,property_links\n\
             c,Ubud,1,1,x\n\
             a,Ubud,2,1,y\n\
             b,Ubud,3,1,z\n",
        );

        let table = load_file(file.path()).unwrap();
        let titles: Vec<&str> = table.listings.iter().filter_map(|l| l.title()).collect();
        assert_eq!(titles, ["c", "a", "b"]);
    }

    #[test]
    fn rejects_missing_required_column() {
        let file = csv_fixture("title,city,bathroom,property_links\na,Ubud,1,x\n");

        let err = load_file(file.path()).unwrap_err();
        let load_err = err.downcast_ref::<LoadError>().unwrap();
        assert_eq!(load_err.to_string(), "missing required column 'price'");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_file(Path::new("listings.parquet")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn loads_json_records() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[
                {{"title": "Villa", "city": "Ubud", "price": "Rp 2.000.000", "bathroom": 2, "property_links": "x"}},
                {{"title": "Loft", "city": null, "price": 1500000, "bathroom": 1.5, "property_links": "y"}}
            ]"#
        )
        .unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.listings[1].city(), None);
        assert_eq!(table.listings[1].bathroom(), Some(1.5));
        assert_eq!(table.cities.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_file(Path::new("does/not/exist.csv")).is_err());
    }
}
