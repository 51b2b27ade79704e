use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{GridMark, Legend, Plot, PlotPoint, Points};

use super::panels::{column_combo, optional_combo, section_heading, warning};
use crate::data::model::{Table, Value};
use crate::state::{AppState, ScatterSelection};

// ---------------------------------------------------------------------------
// Scatter section
// ---------------------------------------------------------------------------

pub fn scatter_section(ui: &mut Ui, state: &mut AppState) {
    section_heading(ui, "Interactive Scatter Plot");

    if state.scatter.is_none() {
        warning(
            ui,
            "Not enough columns in the dataset to create a scatter plot.",
        );
        return;
    }

    selection_controls(ui, state);

    let Some(sel) = state.scatter.clone() else {
        return;
    };
    ui.strong(format!("Scatter Plot of {} vs {}", sel.y, sel.x));
    draw_scatter(ui, state, &sel);
}

/// Four column selectors: X, Y, optional colour, optional size (numeric only).
fn selection_controls(ui: &mut Ui, state: &mut AppState) {
    let columns = state.table.column_names();
    let numeric = state.classes.numeric.clone();

    let mut new_color: Option<Option<String>> = None;
    if let Some(sel) = state.scatter.as_mut() {
        ui.horizontal(|ui: &mut Ui| {
            column_combo(ui, "X-axis", &mut sel.x, &columns);
            column_combo(ui, "Y-axis", &mut sel.y, &columns);
            new_color = optional_combo(ui, "Color", &sel.color, &columns);
            if let Some(size) = optional_combo(ui, "Size", &sel.size, &numeric) {
                sel.size = size;
            }
        });
    }
    // Outside the borrow of `scatter` so the colour map can be rebuilt.
    if let Some(color) = new_color {
        state.set_scatter_color(color);
    }
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

struct Dot {
    pos: [f64; 2],
    group: Option<Value>,
    radius: f32,
    hover: String,
}

fn draw_scatter(ui: &mut Ui, state: &AppState, sel: &ScatterSelection) {
    let table = state.table;
    let indices = &state.visible_indices;

    let (xs, x_labels) = axis_positions(table, indices, &sel.x);
    let (ys, y_labels) = axis_positions(table, indices, &sel.y);

    // Size column range over the view, for radius normalisation.
    let size_range: Option<(f64, f64)> = sel.size.as_ref().and_then(|col| {
        indices
            .iter()
            .filter_map(|&i| table.rows[i].get(col).and_then(Value::as_f64))
            .fold(None, |acc, v| {
                Some(match acc {
                    Some((lo, hi)) => (f64::min(lo, v), f64::max(hi, v)),
                    None => (v, v),
                })
            })
    });

    let first_col = table
        .columns
        .first()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    let mut dots: Vec<Dot> = Vec::with_capacity(indices.len());
    for (k, &row) in indices.iter().enumerate() {
        let (Some(x), Some(y)) = (xs[k], ys[k]) else {
            continue;
        };
        let radius = match (&sel.size, size_range) {
            (Some(col), Some((lo, hi))) => {
                let Some(v) = table.rows[row].get(col).and_then(Value::as_f64) else {
                    continue;
                };
                if hi - lo < f64::EPSILON {
                    4.0
                } else {
                    (2.0 + 5.0 * (v - lo) / (hi - lo)) as f32
                }
            }
            _ => 3.0,
        };
        let group = sel.color.as_ref().and_then(|c| table.rows[row].get(c)).cloned();
        let hover = table.rows[row]
            .get(&first_col)
            .map(|v| v.to_string())
            .unwrap_or_default();
        dots.push(Dot {
            pos: [x, y],
            group,
            radius,
            hover,
        });
    }

    let hover_data: Vec<([f64; 2], String)> =
        dots.iter().map(|d| (d.pos, d.hover.clone())).collect();
    let (x_col, y_col) = (sel.x.clone(), sel.y.clone());

    let mut plot = Plot::new("scatter_plot")
        .height(340.0)
        .legend(Legend::default())
        .x_axis_label(sel.x.clone())
        .y_axis_label(sel.y.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |_name, point: &PlotPoint| {
            nearest_label(&hover_data, point)
                .map(|label| {
                    format!(
                        "{label}\n{x_col}: {:.2}\n{y_col}: {:.2}",
                        point.x, point.y
                    )
                })
                .unwrap_or_default()
        });
    if let Some(labels) = x_labels {
        plot = plot.x_axis_formatter(category_ticks(labels));
    }
    if let Some(labels) = y_labels {
        plot = plot.y_axis_formatter(category_ticks(labels));
    }

    plot.show(ui, |plot_ui| {
        if sel.size.is_some() {
            // Radii vary per point, so each point is its own element.
            for dot in &dots {
                let color = point_color(state, dot.group.as_ref());
                plot_ui.points(Points::new(vec![dot.pos]).radius(dot.radius).color(color));
            }
        } else {
            let mut groups: BTreeMap<Option<Value>, Vec<[f64; 2]>> = BTreeMap::new();
            for dot in &dots {
                groups.entry(dot.group.clone()).or_default().push(dot.pos);
            }
            for (group, positions) in groups {
                let color = point_color(state, group.as_ref());
                let mut points = Points::new(positions).radius(3.0).color(color);
                if let Some(value) = &group {
                    points = points.name(value.to_string());
                }
                plot_ui.points(points);
            }
        }
    });
}

fn point_color(state: &AppState, group: Option<&Value>) -> Color32 {
    group
        .and_then(|v| state.color_map.as_ref().map(|cm| cm.color_for(v)))
        .unwrap_or(Color32::LIGHT_BLUE)
}

/// Plot positions for one column. Numeric columns map to their value; text
/// columns map each row to the index of its value in the sorted distinct set,
/// returned as tick labels. Null cells yield `None` and the row is skipped.
fn axis_positions(
    table: &Table,
    indices: &[usize],
    column: &str,
) -> (Vec<Option<f64>>, Option<Vec<String>>) {
    let numeric = table
        .column_type(column)
        .is_some_and(|ty| ty.is_numeric());

    if numeric {
        let positions = indices
            .iter()
            .map(|&i| table.rows[i].get(column).and_then(Value::as_f64))
            .collect();
        (positions, None)
    } else {
        let categories: Vec<Value> = table.distinct_values(column).into_iter().collect();
        let index_of: BTreeMap<&Value, f64> = categories
            .iter()
            .enumerate()
            .map(|(i, v)| (v, i as f64))
            .collect();
        let positions = indices
            .iter()
            .map(|&i| {
                table.rows[i]
                    .get(column)
                    .and_then(|v| index_of.get(v).copied())
            })
            .collect();
        let labels = categories.iter().map(|v| v.to_string()).collect();
        (positions, Some(labels))
    }
}

/// Tick formatter that labels whole-number positions with category names.
fn category_ticks(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

fn nearest_label<'a>(data: &'a [([f64; 2], String)], point: &PlotPoint) -> Option<&'a str> {
    fn dist(pos: &[f64; 2], p: &PlotPoint) -> f64 {
        (pos[0] - p.x).powi(2) + (pos[1] - p.y).powi(2)
    }
    data.iter()
        .min_by(|(a, _), (b, _)| dist(a, point).total_cmp(&dist(b, point)))
        .map(|(_, label)| label.as_str())
}
