use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::Choice;
use crate::data::metrics::{group_thousands, Summary};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let dataset = state.dataset;
    let price_bounds = dataset.price_range;
    let year_bounds = dataset.year_range;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let mut changed = false;

            // ---- Price range ----
            ui.strong("Price Range");
            let price = &mut state.selection.price;
            changed |= ui
                .add(
                    egui::Slider::new(&mut price.min, price_bounds.min..=price_bounds.max)
                        .integer()
                        .prefix("$")
                        .text("min"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut price.max, price_bounds.min..=price_bounds.max)
                        .integer()
                        .prefix("$")
                        .text("max"),
                )
                .changed();
            ui.add_space(6.0);

            // ---- Model year range ----
            ui.strong("Model Year");
            let year = &mut state.selection.year;
            changed |= ui
                .add(egui::Slider::new(&mut year.min, year_bounds.min..=year_bounds.max).text("from"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut year.max, year_bounds.min..=year_bounds.max).text("to"))
                .changed();
            ui.add_space(6.0);

            if changed {
                state.refresh();
            }

            // ---- Categories ----
            ui.strong("Condition");
            if let Some(choice) =
                choice_combo(ui, "condition", &state.selection.condition, &Choice::options(&dataset.conditions))
            {
                state.set_condition(choice);
            }
            ui.add_space(6.0);

            ui.strong("Vehicle Type");
            if let Some(choice) =
                choice_combo(ui, "body_type", &state.selection.body_type, &Choice::options(&dataset.body_types))
            {
                state.set_body_type(choice);
            }

            ui.separator();
            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });
}

/// Combo box over `options`; returns the newly picked choice, if any.
fn choice_combo(ui: &mut Ui, id: &str, current: &Choice, options: &[Choice]) -> Option<Choice> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                if ui
                    .selectable_label(current == option, option.to_string())
                    .clicked()
                    && current != option
                {
                    picked = Some(option.clone());
                }
            }
        });
    picked
}

// ---------------------------------------------------------------------------
// Top bar and footer
// ---------------------------------------------------------------------------

/// Render the title bar with dataset and view sizes.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.add_space(4.0);
    ui.heading("US Vehicle Sales Data Analysis");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Explore and analyze vehicle listings in the United States");
        ui.separator();
        ui.label(format!(
            "{} listings loaded, {} visible",
            group_thousands(state.dataset.len() as i64),
            group_thousands(state.visible_indices.len() as i64)
        ));
    });
    ui.add_space(4.0);
}

pub fn footer(ui: &mut Ui) {
    ui.label(
        RichText::new(
            "Note: this dashboard provides an interactive visualization of vehicle listings data in the United States.",
        )
        .small()
        .weak(),
    );
}

// ---------------------------------------------------------------------------
// Metric tiles
// ---------------------------------------------------------------------------

/// Four headline numbers side by side.
pub fn metric_tiles(ui: &mut Ui, summary: &Summary) {
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Listings", &group_thousands(summary.count as i64));
        metric(&mut cols[1], "Average Price", &summary.price_label());
        metric(&mut cols[2], "Average Mileage", &summary.odometer_label());
        metric(&mut cols[3], "Average Year", &summary.model_year_label());
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(26.0).strong());
    });
}
