use super::model::{ColumnType, Table, Value};

// ---------------------------------------------------------------------------
// Quantity range filter
// ---------------------------------------------------------------------------

/// Column driving the range filter.
pub const QUANTITY_COLUMN: &str = "quantity";

/// Dual-ended range selection over one numeric column.
///
/// `min` / `max` are the bounds observed on the unfiltered table at load time
/// and never change afterwards; `low` / `high` track the current slider
/// positions and always satisfy `min <= low <= high <= max`.
#[derive(Debug, Clone)]
pub struct RangeFilter {
    pub column: String,
    pub min: f64,
    pub max: f64,
    pub low: f64,
    pub high: f64,
    /// Snap the sliders to whole numbers for integer-typed columns.
    pub integer: bool,
}

impl RangeFilter {
    /// Build the quantity filter for a freshly loaded table. Returns `None`
    /// when the column is missing, non-numeric, or has no values to derive
    /// bounds from; the caller then skips filtering entirely.
    pub fn from_table(table: &Table) -> Option<Self> {
        let ty = table.column_type(QUANTITY_COLUMN)?;
        if !ty.is_numeric() {
            return None;
        }
        let (min, max) = table.value_range(QUANTITY_COLUMN)?;
        Some(RangeFilter {
            column: QUANTITY_COLUMN.to_string(),
            min,
            max,
            low: min,
            high: max,
            integer: ty == ColumnType::Integer,
        })
    }
}

/// Indices of rows whose `column` value lies in `[low, high]`, both ends
/// inclusive, original order preserved.
///
/// A missing or non-numeric column is not an error: the filter does not apply
/// and every row index is returned unchanged. Rows with a null value in the
/// column are excluded when the filter applies.
pub fn apply_range(table: &Table, column: &str, low: f64, high: f64) -> Vec<usize> {
    let applies = table
        .column_type(column)
        .is_some_and(ColumnType::is_numeric);
    if !applies {
        return (0..table.len()).collect();
    }

    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row.get(column)
                .and_then(Value::as_f64)
                .map(|v| low <= v && v <= high)
                .unwrap_or(false)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Recompute the visible view for the current filter state.
pub fn filtered_indices(table: &Table, filter: Option<&RangeFilter>) -> Vec<usize> {
    match filter {
        Some(f) => apply_range(table, &f.column, f.low, f.high),
        None => (0..table.len()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::test_support::table;
    use crate::data::model::Value::{Integer, Text};

    fn quantities(values: &[i64]) -> Table {
        let rows: Vec<Vec<Value>> = values.iter().map(|&v| vec![Integer(v)]).collect();
        let row_refs: Vec<&[Value]> = rows.iter().map(|r| r.as_slice()).collect();
        table(&[("quantity", ColumnType::Integer)], &row_refs)
    }

    #[test]
    fn inclusive_on_both_ends() {
        let t = quantities(&[1, 2, 2, 5, 10]);
        assert_eq!(apply_range(&t, "quantity", 2.0, 5.0), vec![1, 2, 3]);
    }

    #[test]
    fn full_range_is_identity() {
        let t = quantities(&[1, 2, 2, 5, 10]);
        assert_eq!(apply_range(&t, "quantity", 1.0, 10.0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let t = quantities(&[1, 2, 2, 5, 10]);
        let first = apply_range(&t, "quantity", 2.0, 5.0);
        let survivors = quantities(&[2, 2, 5]);
        let second = apply_range(&survivors, "quantity", 2.0, 5.0);
        assert_eq!(second.len(), first.len());
        assert_eq!(second, vec![0, 1, 2]);
    }

    #[test]
    fn absent_column_passes_everything_through() {
        let t = table(
            &[("pizza_name", ColumnType::Text)],
            &[
                &[Text("The Hawaiian Pizza".into())],
                &[Text("The Calabrese Pizza".into())],
            ],
        );
        assert_eq!(apply_range(&t, "quantity", 0.0, 1.0), vec![0, 1]);
        assert!(RangeFilter::from_table(&t).is_none());
    }

    #[test]
    fn non_numeric_quantity_column_disables_the_filter() {
        let t = table(
            &[("quantity", ColumnType::Text)],
            &[&[Text("many".into())], &[Text("few".into())]],
        );
        assert!(RangeFilter::from_table(&t).is_none());
        assert_eq!(apply_range(&t, "quantity", 0.0, 100.0), vec![0, 1]);
    }

    #[test]
    fn bounds_come_from_the_unfiltered_table() {
        let t = quantities(&[3, 1, 4, 1, 5]);
        let f = RangeFilter::from_table(&t).expect("filter");
        assert_eq!((f.min, f.max), (1.0, 5.0));
        assert_eq!((f.low, f.high), (1.0, 5.0));
        assert!(f.integer);
    }
}
