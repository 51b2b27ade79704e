use std::path::Path;
use std::sync::OnceLock;

use thiserror::Error;

use super::model::{Column, ColumnType, Row, Table, Value};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Relative path the dashboard reads its dataset from.
pub const DATA_PATH: &str = "pizza_sales.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read dataset at '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("malformed record {index} in '{path}': {source}")]
    Record {
        path: String,
        index: usize,
        #[source]
        source: csv::Error,
    },
}

/// Load the dataset from [`DATA_PATH`], parsing the file at most once per
/// process. Subsequent calls return the cached table.
pub fn load() -> Result<&'static Table, LoadError> {
    static CACHE: OnceLock<Table> = OnceLock::new();
    if let Some(table) = CACHE.get() {
        return Ok(table);
    }
    let table = read_csv(Path::new(DATA_PATH))?;
    Ok(CACHE.get_or_init(|| table))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse a delimited text file with a header row into a typed [`Table`].
///
/// Column types are inferred from the data: a column is `Integer` when every
/// non-empty cell parses as `i64`, `Float` when every non-empty cell parses as
/// `f64`, otherwise `Text`. Empty cells become `Value::Null` and do not
/// influence inference.
pub(crate) fn read_csv(path: &Path) -> Result<Table, LoadError> {
    let read_err = |source| LoadError::Read {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(read_err)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Record {
            path: path.display().to_string(),
            index,
            source,
        })?;
        records.push(record);
    }

    let types: Vec<ColumnType> = (0..headers.len())
        .map(|i| infer_column_type(records.iter().map(|r| r.get(i).unwrap_or(""))))
        .collect();

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .zip(types.iter())
                .enumerate()
                .map(|(i, (name, ty))| (name.clone(), parse_cell(record.get(i).unwrap_or(""), *ty)))
                .collect()
        })
        .collect();

    let columns = headers
        .into_iter()
        .zip(types)
        .map(|(name, ty)| Column { name, ty })
        .collect();

    Ok(Table { columns, rows })
}

/// Infer a column's type from all of its cells.
fn infer_column_type<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut any = false;
    let mut all_int = true;
    let mut all_float = true;

    for cell in cells {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        any = true;
        if all_int && cell.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && cell.parse::<f64>().is_err() {
            all_float = false;
        }
        if !all_float {
            break;
        }
    }

    if !any {
        ColumnType::Text
    } else if all_int {
        ColumnType::Integer
    } else if all_float {
        ColumnType::Float
    } else {
        ColumnType::Text
    }
}

fn parse_cell(cell: &str, ty: ColumnType) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match ty {
        ColumnType::Integer => trimmed
            .parse::<i64>()
            .map(Value::Integer)
            .unwrap_or(Value::Null),
        ColumnType::Float => trimmed
            .parse::<f64>()
            .map(Value::Float)
            .unwrap_or(Value::Null),
        ColumnType::Text => Value::Text(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Write `contents` to a unique temp file and hand its path to `f`.
    fn with_csv<T>(name: &str, contents: &str, f: impl FnOnce(&Path) -> T) -> T {
        let path: PathBuf =
            std::env::temp_dir().join(format!("pizza_dash_{}_{}.csv", name, std::process::id()));
        std::fs::write(&path, contents).expect("writing temp CSV");
        let out = f(&path);
        let _ = std::fs::remove_file(&path);
        out
    }

    #[test]
    fn infers_column_types_from_cells() {
        let csv = "order_id,item_price,pizza_name\n1,13.25,The Hawaiian Pizza\n2,16.0,The Thai Chicken Pizza\n";
        with_csv("types", csv, |path| {
            let table = read_csv(path).expect("load");
            assert_eq!(table.len(), 2);
            assert_eq!(table.column_type("order_id"), Some(ColumnType::Integer));
            assert_eq!(table.column_type("item_price"), Some(ColumnType::Float));
            assert_eq!(table.column_type("pizza_name"), Some(ColumnType::Text));
            assert_eq!(
                table.rows[0].get("item_price"),
                Some(&Value::Float(13.25))
            );
        });
    }

    #[test]
    fn malformed_numeric_cell_demotes_column_to_text() {
        let csv = "quantity\n1\ntwo\n3\n";
        with_csv("demote", csv, |path| {
            let table = read_csv(path).expect("load");
            assert_eq!(table.column_type("quantity"), Some(ColumnType::Text));
        });
    }

    #[test]
    fn empty_cells_become_null_without_breaking_inference() {
        let csv = "quantity\n1\n\n3\n";
        with_csv("nulls", csv, |path| {
            let table = read_csv(path).expect("load");
            assert_eq!(table.column_type("quantity"), Some(ColumnType::Integer));
            assert_eq!(table.rows[1].get("quantity"), Some(&Value::Null));
        });
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        with_csv("header_only", "a,b,c\n", |path| {
            let table = read_csv(path).expect("load");
            assert!(table.is_empty());
            assert_eq!(table.columns.len(), 3);
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_csv(Path::new("/nonexistent/pizza_sales.csv"));
        assert!(matches!(err, Err(LoadError::Read { .. })));
    }
}
