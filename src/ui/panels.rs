use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared widgets and notices
// ---------------------------------------------------------------------------

/// Amber notice for a degraded (but non-fatal) panel condition.
pub fn warning(ui: &mut Ui, text: &str) {
    ui.colored_label(Color32::from_rgb(196, 140, 0), text);
}

/// Informational notice.
pub fn notice(ui: &mut Ui, text: &str) {
    ui.colored_label(Color32::from_rgb(110, 170, 255), text);
}

pub fn section_heading(ui: &mut Ui, title: &str) {
    ui.add_space(4.0);
    ui.label(RichText::new(title).strong().size(18.0));
    ui.separator();
}

/// Labelled combo box over a fixed list of column names.
pub fn column_combo(ui: &mut Ui, label: &str, current: &mut String, choices: &[String]) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(current.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for choice in choices {
                ui.selectable_value(current, choice.clone(), choice);
            }
        });
}

/// Combo box with a leading "None" sentinel that disables the dimension.
/// Returns `Some(new_selection)` when the user picked an entry this frame.
pub fn optional_combo(
    ui: &mut Ui,
    label: &str,
    current: &Option<String>,
    choices: &[String],
) -> Option<Option<String>> {
    let mut picked = None;
    ui.label(label);
    let shown = current.clone().unwrap_or_else(|| "None".to_string());
    egui::ComboBox::from_id_salt(label)
        .selected_text(shown)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), "None").clicked() {
                picked = Some(None);
            }
            for choice in choices {
                if ui
                    .selectable_label(current.as_deref() == Some(choice), choice)
                    .clicked()
                {
                    picked = Some(Some(choice.clone()));
                }
            }
        });
    picked
}

// ---------------------------------------------------------------------------
// Filter section
// ---------------------------------------------------------------------------

/// Range control over the quantity column plus a row-count readout.
pub fn filter_section(ui: &mut Ui, state: &mut AppState) {
    section_heading(ui, "Data Filtering");

    let mut changed = false;
    match state.range_filter.as_mut() {
        Some(filter) => {
            ui.label("Select Order Quantity Range");
            let (min, max) = (filter.min, filter.max);
            ui.horizontal(|ui: &mut Ui| {
                let mut low = Slider::new(&mut filter.low, min..=max).text("from");
                if filter.integer {
                    low = low.integer();
                }
                if ui.add(low).changed() {
                    // Keep low <= high by dragging the other end along.
                    filter.high = filter.high.max(filter.low);
                    changed = true;
                }

                let mut high = Slider::new(&mut filter.high, min..=max).text("to");
                if filter.integer {
                    high = high.integer();
                }
                if ui.add(high).changed() {
                    filter.low = filter.low.min(filter.high);
                    changed = true;
                }
            });
        }
        None => {
            warning(
                ui,
                "'quantity' column not found or is not numerical. Skipping slider filter.",
            );
        }
    }
    if changed {
        state.refilter();
    }

    ui.label(format!(
        "Displaying {} rows after filtering.",
        state.visible_indices.len()
    ));
}

// ---------------------------------------------------------------------------
// Column legend
// ---------------------------------------------------------------------------

const COLUMN_LEGEND: &[(&str, &str)] = &[
    ("order_id", "Unique identifier for each order."),
    ("pizza_id", "Unique identifier for each pizza within an order."),
    ("order_date", "Date when the order was placed."),
    ("order_time", "Time when the order was placed."),
    ("item_price", "Price of a single item."),
    ("quantity", "Number of items ordered."),
    (
        "total_price",
        "Total price for the order item (item_price * quantity).",
    ),
    ("pizza_size", "Size of the pizza (e.g., S, M, L, XL, XXL)."),
    (
        "pizza_category",
        "Category of the pizza (e.g., Classic, Veggie, Chicken, Supreme).",
    ),
    ("pizza_ingredients", "List of ingredients in the pizza."),
    ("pizza_name", "Name of the pizza."),
];

/// Static block documenting the dataset's columns.
pub fn legend_section(ui: &mut Ui) {
    section_heading(ui, "Column Information");
    for (name, meaning) in COLUMN_LEGEND {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.strong(format!("{name}:"));
            ui.label(*meaning);
        });
    }
}
