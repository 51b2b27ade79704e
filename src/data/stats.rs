use super::model::{classify, Table, Value};

// ---------------------------------------------------------------------------
// Descriptive statistics over a filtered view
// ---------------------------------------------------------------------------

/// `describe()`-style summary for one numeric column.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summaries for every numeric column of the view, in header order.
/// Null cells are skipped per column; a column with no values in the view is
/// omitted.
pub fn describe(table: &Table, indices: &[usize]) -> Vec<ColumnSummary> {
    classify(table)
        .numeric
        .iter()
        .filter_map(|col| {
            let values: Vec<f64> = indices
                .iter()
                .filter_map(|&i| table.rows[i].get(col).and_then(Value::as_f64))
                .collect();
            summarize(col, values)
        })
        .collect()
}

fn summarize(column: &str, mut values: Vec<f64>) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    // Sample standard deviation (ddof = 1); undefined for a single value.
    let std_dev = if count > 1 {
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    Some(ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std_dev,
        min: values[0],
        q1: percentile(&values, 0.25),
        median: percentile(&values, 0.5),
        q3: percentile(&values, 0.75),
        max: values[count - 1],
    })
}

/// Linear-interpolated percentile over a sorted, non-empty slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::test_support::table;
    use crate::data::model::ColumnType;
    use crate::data::model::Value::{Float, Integer, Null, Text};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn count_matches_view_size() {
        let t = table(
            &[("quantity", ColumnType::Integer)],
            &[&[Integer(1)], &[Integer(2)], &[Integer(3)], &[Integer(4)]],
        );
        let summaries = describe(&t, &[0, 1, 2, 3]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].count, 4);

        let partial = describe(&t, &[1, 3]);
        assert_eq!(partial[0].count, 2);
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let t = table(
            &[("item_price", ColumnType::Float)],
            &[&[Float(1.0)], &[Float(2.0)], &[Float(3.0)], &[Float(4.0)]],
        );
        let s = &describe(&t, &[0, 1, 2, 3])[0];
        assert_close(s.min, 1.0);
        assert_close(s.q1, 1.75);
        assert_close(s.median, 2.5);
        assert_close(s.q3, 3.25);
        assert_close(s.max, 4.0);
        assert_close(s.mean, 2.5);
        assert_close(s.std_dev, (5.0f64 / 3.0).sqrt());
    }

    #[test]
    fn empty_view_yields_no_summaries() {
        let t = table(
            &[("quantity", ColumnType::Integer)],
            &[&[Integer(1)], &[Integer(2)]],
        );
        assert!(describe(&t, &[]).is_empty());
    }

    #[test]
    fn nulls_are_skipped_and_text_columns_ignored() {
        let t = table(
            &[
                ("quantity", ColumnType::Integer),
                ("pizza_size", ColumnType::Text),
            ],
            &[
                &[Integer(2), Text("M".into())],
                &[Null, Text("L".into())],
                &[Integer(4), Text("S".into())],
            ],
        );
        let summaries = describe(&t, &[0, 1, 2]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].column, "quantity");
        assert_eq!(summaries[0].count, 2);
        assert_close(summaries[0].mean, 3.0);
    }

    #[test]
    fn single_value_has_nan_std_dev() {
        let t = table(&[("quantity", ColumnType::Integer)], &[&[Integer(7)]]);
        let s = &describe(&t, &[0])[0];
        assert!(s.std_dev.is_nan());
        assert_close(s.median, 7.0);
    }
}
