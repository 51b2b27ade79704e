use std::f32::consts::TAU;

use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2,
};

use super::panels::{column_combo, notice, section_heading, warning};
use crate::color::generate_palette;
use crate::data::aggregate::{pie_slices, Slice};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pie section
// ---------------------------------------------------------------------------

/// Inner hole fraction of the donut, as a share of the outer radius.
const HOLE_RATIO: f32 = 0.3;

pub fn pie_section(ui: &mut Ui, state: &mut AppState) {
    section_heading(ui, "Interactive Pie Chart");

    if state.pie.is_none() {
        warning(ui, "Not enough columns in the dataset to create a pie chart.");
        return;
    }

    selection_controls(ui, state);

    let Some(sel) = state.pie.clone() else {
        return;
    };
    ui.strong(format!("Distribution of {} by {}", sel.values, sel.names));

    let data = pie_slices(state.table, &state.visible_indices, &sel.names, &sel.values);

    // Pre-aggregated slices are already one-per-category; raw slices are
    // merged per category here, the drawing layer's implicit sum.
    let mut totals: Vec<(String, f64)> = if data.aggregated {
        data.slices
            .into_iter()
            .map(|s| (s.label, s.value))
            .collect()
    } else {
        merge_slices(&data.slices)
    };
    totals.retain(|(_, v)| *v > 0.0);

    if totals.is_empty() {
        notice(ui, "No positive values to chart.");
        return;
    }
    draw_donut(ui, &totals);
}

/// Category selector (categorical columns, all columns as a fallback) and
/// value selector (numeric columns, all columns as a fallback).
fn selection_controls(ui: &mut Ui, state: &mut AppState) {
    let names_choices = if state.classes.categorical.is_empty() {
        state.table.column_names()
    } else {
        state.classes.categorical.clone()
    };
    let values_choices = if state.classes.numeric.is_empty() {
        state.table.column_names()
    } else {
        state.classes.numeric.clone()
    };

    if let Some(sel) = state.pie.as_mut() {
        ui.horizontal(|ui: &mut Ui| {
            column_combo(ui, "Category (Slices)", &mut sel.names, &names_choices);
            column_combo(ui, "Value (Size of Slices)", &mut sel.values, &values_choices);
        });
    }
}

/// Sum raw per-row slices per category, keeping first-seen order.
fn merge_slices(slices: &[Slice]) -> Vec<(String, f64)> {
    let mut merged: Vec<(String, f64)> = Vec::new();
    for slice in slices {
        match merged.iter_mut().find(|(label, _)| *label == slice.label) {
            Some((_, total)) => *total += slice.value,
            None => merged.push((slice.label.clone(), slice.value)),
        }
    }
    merged
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw_donut(ui: &mut Ui, totals: &[(String, f64)]) {
    let total: f64 = totals.iter().map(|(_, v)| v).sum();
    let colors = generate_palette(totals.len());

    ui.horizontal(|ui: &mut Ui| {
        let side = 280.0;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let center = response.rect.center();
        let outer = side * 0.45;
        let inner = outer * HOLE_RATIO;

        // Start at 12 o'clock and sweep clockwise.
        let mut angle = -TAU / 4.0;
        for (i, (_, value)) in totals.iter().enumerate() {
            let span = (value / total) as f32 * TAU;
            draw_arc(&painter, center, inner, outer, angle, angle + span, colors[i]);

            if span > 0.25 {
                let mid = angle + span / 2.0;
                let r = (inner + outer) / 2.0;
                painter.text(
                    center + Vec2::new(r * mid.cos(), r * mid.sin()),
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", 100.0 * value / total),
                    FontId::proportional(11.0),
                    Color32::WHITE,
                );
            }
            angle += span;
        }

        slice_legend(ui, totals, &colors, total);
    });
}

/// Scrollable legend beside the chart: swatch, label, value, share.
fn slice_legend(ui: &mut Ui, totals: &[(String, f64)], colors: &[Color32], total: f64) {
    egui::ScrollArea::vertical()
        .id_salt("pie_legend")
        .max_height(280.0)
        .show(ui, |ui: &mut Ui| {
            for ((label, value), color) in totals.iter().zip(colors) {
                ui.horizontal(|ui: &mut Ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
                    ui.painter()
                        .rect_filled(rect, egui::CornerRadius::same(2), *color);
                    ui.label(format!(
                        "{label}: {value:.2} ({:.1}%)",
                        100.0 * value / total
                    ));
                });
            }
        });
}

/// Filled ring segment built from small convex quads.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    inner: f32,
    outer: f32,
    start: f32,
    end: f32,
    color: Color32,
) {
    let segments = (((end - start) / TAU * 96.0).ceil() as usize).max(2);
    for i in 0..segments {
        let a0 = start + (end - start) * i as f32 / segments as f32;
        let a1 = start + (end - start) * (i + 1) as f32 / segments as f32;
        let quad = vec![
            center + Vec2::new(inner * a0.cos(), inner * a0.sin()),
            center + Vec2::new(outer * a0.cos(), outer * a0.sin()),
            center + Vec2::new(outer * a1.cos(), outer * a1.sin()),
            center + Vec2::new(inner * a1.cos(), inner * a1.sin()),
        ];
        painter.add(Shape::convex_polygon(quad, color, Stroke::NONE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, value: f64) -> Slice {
        Slice {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn merge_sums_per_category_in_first_seen_order() {
        let merged = merge_slices(&[
            slice("Classic", 10.0),
            slice("Veggie", 4.0),
            slice("Classic", 2.5),
        ]);
        assert_eq!(
            merged,
            vec![("Classic".to_string(), 12.5), ("Veggie".to_string(), 4.0)]
        );
    }
}
