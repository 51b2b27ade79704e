use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, RangeFilter};
use crate::data::model::{classify, ColumnClasses, Table};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Column selections for the scatter panel. `color` and `size` are optional
/// dimensions; `None` is the disabled sentinel shown as "None" in the UI.
#[derive(Debug, Clone)]
pub struct ScatterSelection {
    pub x: String,
    pub y: String,
    pub color: Option<String>,
    pub size: Option<String>,
}

/// Column selections for the pie panel.
#[derive(Debug, Clone)]
pub struct PieSelection {
    pub names: String,
    pub values: String,
}

/// The full UI state, independent of rendering. The table itself is owned by
/// the loader's cache and never changes for the process lifetime.
pub struct AppState {
    pub table: &'static Table,

    /// Numeric / categorical split of the table's columns (fixed at load).
    pub classes: ColumnClasses,

    /// Quantity range filter; `None` when the column is absent or
    /// non-numeric, in which case filtering is a no-op.
    pub range_filter: Option<RangeFilter>,

    /// Indices of rows passing the current range (cached between reruns).
    pub visible_indices: Vec<usize>,

    /// Scatter selections; `None` when the table has fewer than two columns.
    pub scatter: Option<ScatterSelection>,

    /// Colour map for the scatter colour column (rebuilt on selection).
    pub color_map: Option<ColorMap>,

    /// Pie selections; `None` when the table has fewer than two columns.
    pub pie: Option<PieSelection>,

    /// Whether the summary statistics block is expanded.
    pub show_summary: bool,
}

impl AppState {
    pub fn new(table: &'static Table) -> Self {
        let classes = classify(table);
        let range_filter = RangeFilter::from_table(table);
        if range_filter.is_none() {
            log::warn!("quantity column missing or non-numeric; range filter disabled");
        }
        let visible_indices = filtered_indices(table, range_filter.as_ref());
        let scatter = default_scatter(table);
        let pie = default_pie(table, &classes);

        Self {
            table,
            classes,
            range_filter,
            visible_indices,
            scatter,
            color_map: None,
            pie,
            show_summary: false,
        }
    }

    /// Recompute `visible_indices` after a range-control change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(self.table, self.range_filter.as_ref());
    }

    /// Set the scatter colour column and rebuild the colour map.
    pub fn set_scatter_color(&mut self, column: Option<String>) {
        self.color_map = column
            .as_ref()
            .map(|col| ColorMap::new(&self.table.distinct_values(col)));
        if let Some(sel) = &mut self.scatter {
            sel.color = column;
        }
    }
}

/// Default scatter axes: first two columns in header order.
fn default_scatter(table: &Table) -> Option<ScatterSelection> {
    let names = table.column_names();
    if names.len() < 2 {
        return None;
    }
    Some(ScatterSelection {
        x: names[0].clone(),
        y: names[1].clone(),
        color: None,
        size: None,
    })
}

/// Default pie columns follow a preference order so the chart opens on a
/// meaningful breakdown when the expected columns exist.
fn default_pie(table: &Table, classes: &ColumnClasses) -> Option<PieSelection> {
    let all = table.column_names();
    if all.len() < 2 {
        return None;
    }

    let names = pick(&["pizza_category", "pizza_name"], &classes.categorical)
        .or_else(|| classes.categorical.first().cloned())
        .unwrap_or_else(|| all[0].clone());
    let values = pick(&["total_price", "quantity"], &classes.numeric)
        .or_else(|| classes.numeric.first().cloned())
        .unwrap_or_else(|| all[0].clone());

    Some(PieSelection { names, values })
}

/// First preferred name present in `available`.
fn pick(preferred: &[&str], available: &[String]) -> Option<String> {
    preferred
        .iter()
        .find(|p| available.iter().any(|a| a == *p))
        .map(|p| p.to_string())
}
