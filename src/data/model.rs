use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Value – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value.
/// Used as keys in `BTreeMap` / `BTreeSet` downstream, so `Value` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

// -- Manual Eq/Ord so Value (with its f64 variant) can live in BTreeSet --

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use Value::*;
        fn discriminant(v: &Value) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                Text(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            Value::Null => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v:.2}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Null => write!(f, "<null>"),
        }
    }
}

impl Value {
    /// Interpret the value as an `f64` for numeric filtering and plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

// ---------------------------------------------------------------------------
// Columns and the Table
// ---------------------------------------------------------------------------

/// The stored type of a whole column, inferred at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl ColumnType {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

/// A named, typed column of the table.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

/// One row: column name → cell value.
pub type Row = BTreeMap<String, Value>;

/// The full loaded dataset. Immutable after loading.
#[derive(Debug, Clone)]
pub struct Table {
    /// Columns in header order.
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in header order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.ty)
    }

    /// Observed `[min, max]` of a column over the whole table, `None` when the
    /// column has no numeric values.
    pub fn value_range(&self, name: &str) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for row in &self.rows {
            if let Some(v) = row.get(name).and_then(Value::as_f64) {
                range = Some(match range {
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                    None => (v, v),
                });
            }
        }
        range
    }

    /// Sorted distinct non-null values of a column over the whole table.
    pub fn distinct_values(&self, name: &str) -> BTreeSet<Value> {
        self.rows
            .iter()
            .filter_map(|row| row.get(name))
            .filter(|v| !v.is_null())
            .cloned()
            .collect()
    }

    /// Distinct non-null value count of a column over a view.
    pub fn distinct_count(&self, indices: &[usize], name: &str) -> usize {
        indices
            .iter()
            .filter_map(|&i| self.rows[i].get(name))
            .filter(|v| !v.is_null())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

// ---------------------------------------------------------------------------
// Column classification
// ---------------------------------------------------------------------------

/// Numeric / categorical split of the table's columns, in header order.
#[derive(Debug, Clone, Default)]
pub struct ColumnClasses {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

/// Classify columns by stored type. Pure; an empty table yields empty sets.
pub fn classify(table: &Table) -> ColumnClasses {
    let mut classes = ColumnClasses::default();
    for col in &table.columns {
        if col.ty.is_numeric() {
            classes.numeric.push(col.name.clone());
        } else {
            classes.categorical.push(col.name.clone());
        }
    }
    classes
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a table from column specs and row literals.
    pub(crate) fn table(columns: &[(&str, ColumnType)], rows: &[&[Value]]) -> Table {
        let cols: Vec<Column> = columns
            .iter()
            .map(|(name, ty)| Column {
                name: name.to_string(),
                ty: *ty,
            })
            .collect();
        let rows = rows
            .iter()
            .map(|cells| {
                cols.iter()
                    .zip(cells.iter())
                    .map(|(c, v)| (c.name.clone(), v.clone()))
                    .collect()
            })
            .collect();
        Table {
            columns: cols,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::table;
    use super::Value::{Float, Integer, Null, Text};
    use super::*;

    fn txt(s: &str) -> Value {
        Text(s.to_string())
    }

    #[test]
    fn classify_splits_by_column_type() {
        let t = table(
            &[
                ("order_id", ColumnType::Integer),
                ("pizza_name", ColumnType::Text),
                ("total_price", ColumnType::Float),
            ],
            &[&[Integer(1), txt("The Hawaiian Pizza"), Float(13.25)]],
        );
        let classes = classify(&t);
        assert_eq!(classes.numeric, vec!["order_id", "total_price"]);
        assert_eq!(classes.categorical, vec!["pizza_name"]);
    }

    #[test]
    fn classify_empty_table_yields_empty_sets() {
        let t = table(&[], &[]);
        let classes = classify(&t);
        assert!(classes.numeric.is_empty());
        assert!(classes.categorical.is_empty());
    }

    #[test]
    fn value_range_skips_nulls() {
        let t = table(
            &[("quantity", ColumnType::Integer)],
            &[&[Integer(3)], &[Null], &[Integer(1)], &[Integer(5)]],
        );
        assert_eq!(t.value_range("quantity"), Some((1.0, 5.0)));
        assert_eq!(t.value_range("missing"), None);
    }

    #[test]
    fn distinct_count_over_a_view() {
        let t = table(
            &[("pizza_size", ColumnType::Text)],
            &[&[txt("S")], &[txt("M")], &[txt("M")], &[txt("L")], &[Null]],
        );
        assert_eq!(t.distinct_count(&[0, 1, 2, 3, 4], "pizza_size"), 3);
        assert_eq!(t.distinct_count(&[1, 2], "pizza_size"), 1);
        assert_eq!(t.distinct_count(&[], "pizza_size"), 0);
    }

    #[test]
    fn value_ordering_is_total() {
        let mut vals = vec![txt("b"), Float(2.5), Integer(1), Null, txt("a")];
        vals.sort();
        assert_eq!(vals[0], Null);
        assert_eq!(vals[1], Integer(1));
        assert_eq!(vals[4], txt("b"));
    }
}
