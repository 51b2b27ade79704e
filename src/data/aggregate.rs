use std::collections::BTreeMap;

use super::model::{Table, Value};

// ---------------------------------------------------------------------------
// Pie chart input preparation
// ---------------------------------------------------------------------------

/// Distinct-category ceiling above which slices are pre-aggregated so the
/// chart stays legible.
pub const MAX_RAW_SLICES: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

/// Slice input for the pie chart.
#[derive(Debug, Clone)]
pub struct PieData {
    pub slices: Vec<Slice>,
    /// True when a group-by sum was applied (one slice per distinct
    /// category); false when rows are handed to the chart as-is and the
    /// chart merges per category while drawing.
    pub aggregated: bool,
}

/// Prepare pie input from the view. When the names column has more than
/// [`MAX_RAW_SLICES`] distinct values in the view, `values_col` is summed
/// grouped by `names_col`; otherwise every row becomes one raw slice.
/// Rows with a null category are skipped either way.
pub fn pie_slices(table: &Table, indices: &[usize], names_col: &str, values_col: &str) -> PieData {
    if table.distinct_count(indices, names_col) > MAX_RAW_SLICES {
        PieData {
            slices: grouped_sums(table, indices, names_col, values_col),
            aggregated: true,
        }
    } else {
        let slices = indices
            .iter()
            .filter_map(|&i| {
                let row = &table.rows[i];
                let name = row.get(names_col).filter(|v| !v.is_null())?;
                Some(Slice {
                    label: name.to_string(),
                    value: row.get(values_col).and_then(Value::as_f64).unwrap_or(0.0),
                })
            })
            .collect();
        PieData {
            slices,
            aggregated: false,
        }
    }
}

/// Sum `values_col` grouped by `names_col`, one slice per distinct category,
/// ordered by category.
fn grouped_sums(table: &Table, indices: &[usize], names_col: &str, values_col: &str) -> Vec<Slice> {
    let mut sums: BTreeMap<Value, f64> = BTreeMap::new();
    for &i in indices {
        let row = &table.rows[i];
        let Some(name) = row.get(names_col).filter(|v| !v.is_null()) else {
            continue;
        };
        let value = row.get(values_col).and_then(Value::as_f64).unwrap_or(0.0);
        *sums.entry(name.clone()).or_insert(0.0) += value;
    }
    sums.into_iter()
        .map(|(name, value)| Slice {
            label: name.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::test_support::table;
    use crate::data::model::ColumnType;
    use crate::data::model::Value::{Float, Text};

    /// Two rows per pizza name so sums differ from single row values.
    fn sales(names: usize) -> Table {
        let mut rows: Vec<Vec<Value>> = Vec::new();
        for i in 0..names {
            rows.push(vec![Text(format!("pizza_{i:02}")), Float(10.0)]);
            rows.push(vec![Text(format!("pizza_{i:02}")), Float(2.5)]);
        }
        let row_refs: Vec<&[Value]> = rows.iter().map(|r| r.as_slice()).collect();
        table(
            &[
                ("pizza_name", ColumnType::Text),
                ("total_price", ColumnType::Float),
            ],
            &row_refs,
        )
    }

    #[test]
    fn many_categories_are_pre_aggregated() {
        let t = sales(25);
        let view: Vec<usize> = (0..t.len()).collect();
        let data = pie_slices(&t, &view, "pizza_name", "total_price");
        assert!(data.aggregated);
        assert_eq!(data.slices.len(), 25);
        for slice in &data.slices {
            assert_eq!(slice.value, 12.5);
        }
    }

    #[test]
    fn few_categories_stay_raw() {
        let t = sales(4);
        let view: Vec<usize> = (0..t.len()).collect();
        let data = pie_slices(&t, &view, "pizza_name", "total_price");
        assert!(!data.aggregated);
        assert_eq!(data.slices.len(), 8); // one slice per row
    }

    #[test]
    fn threshold_is_exclusive_at_twenty() {
        let t = sales(MAX_RAW_SLICES);
        let view: Vec<usize> = (0..t.len()).collect();
        assert!(!pie_slices(&t, &view, "pizza_name", "total_price").aggregated);

        let t = sales(MAX_RAW_SLICES + 1);
        let view: Vec<usize> = (0..t.len()).collect();
        assert!(pie_slices(&t, &view, "pizza_name", "total_price").aggregated);
    }

    #[test]
    fn aggregation_respects_the_view() {
        let t = sales(25);
        // Only the first row of each pair → sums are the single row values.
        let view: Vec<usize> = (0..t.len()).step_by(2).collect();
        let data = pie_slices(&t, &view, "pizza_name", "total_price");
        assert!(data.aggregated);
        assert!(data.slices.iter().all(|s| s.value == 10.0));
    }
}
