use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use super::panels::{notice, section_heading};
use crate::data::stats::{describe, ColumnSummary};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Summary section
// ---------------------------------------------------------------------------

pub fn summary_section(ui: &mut Ui, state: &mut AppState) {
    section_heading(ui, "Summary Report");

    let button_text = if state.show_summary {
        "Hide Summary Statistics"
    } else {
        "Show Summary Statistics"
    };
    if ui.button(button_text).clicked() {
        state.show_summary = !state.show_summary;
    }
    if !state.show_summary {
        return;
    }

    if state.visible_indices.is_empty() {
        notice(
            ui,
            "No data to display summary statistics for after filtering.",
        );
        return;
    }

    ui.strong("Descriptive Statistics for Filtered Data");
    let summaries = describe(state.table, &state.visible_indices);
    if summaries.is_empty() {
        notice(ui, "No numeric columns to summarize.");
        return;
    }
    stats_table(ui, &summaries);
}

const STAT_ROWS: &[&str] = &["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Statistics as rows, one table column per numeric dataset column.
fn stats_table(ui: &mut Ui, summaries: &[ColumnSummary]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(60.0))
        .columns(Column::auto().at_least(90.0), summaries.len())
        .header(20.0, |mut header| {
            header.col(|_ui| {});
            for summary in summaries {
                header.col(|ui| {
                    ui.strong(summary.column.as_str());
                });
            }
        })
        .body(|mut body| {
            for stat in STAT_ROWS {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.strong(*stat);
                    });
                    for summary in summaries {
                        row.col(|ui| {
                            ui.label(stat_value(summary, stat));
                        });
                    }
                });
            }
        });
}

fn stat_value(summary: &ColumnSummary, stat: &str) -> String {
    match stat {
        "count" => summary.count.to_string(),
        "mean" => fmt(summary.mean),
        "std" => fmt(summary.std_dev),
        "min" => fmt(summary.min),
        "25%" => fmt(summary.q1),
        "50%" => fmt(summary.median),
        "75%" => fmt(summary.q3),
        "max" => fmt(summary.max),
        _ => String::new(),
    }
}

fn fmt(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.2}")
    }
}
