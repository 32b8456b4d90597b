use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::metrics::group_thousands;
use crate::data::model::ListingRecord;
use crate::state::{AppState, PREVIEW_ROWS};

const HEADERS: [&str; 6] = ["price", "model_year", "model", "condition", "odometer", "type"];

/// Scrollable preview of the first filtered rows.
pub fn preview_table(ui: &mut Ui, state: &AppState) {
    ui.label(RichText::new("Filtered Data").heading());
    ui.label(
        RichText::new(format!(
            "first {} of {} matching listings",
            state.visible_indices.len().min(PREVIEW_ROWS),
            group_thousands(state.visible_indices.len() as i64)
        ))
        .weak(),
    );

    let rows: Vec<[String; 6]> = state.preview().map(row_cells).collect();

    TableBuilder::new(ui)
        .id_salt("preview_table")
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(70.0), 2)
        .column(Column::remainder().at_least(140.0))
        .columns(Column::auto().at_least(80.0), 3)
        .header(20.0, |mut header| {
            for name in HEADERS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for cells in &rows {
                body.row(18.0, |mut row| {
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}

/// Display text for one row; missing values are left blank.
fn row_cells(r: &ListingRecord) -> [String; 6] {
    let opt = |v: Option<String>| v.unwrap_or_default();
    [
        opt(r.price.map(|p| format!("{p:.0}"))),
        opt(r.model_year.map(|y| y.to_string())),
        r.model.clone(),
        opt(r.condition.clone()),
        opt(r.odometer.map(|o| format!("{o:.0}"))),
        opt(r.body_type.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::listing;

    #[test]
    fn missing_cells_render_blank() {
        let mut r = listing(12500.0, 2016);
        r.odometer = None;
        r.body_type = None;
        assert_eq!(
            row_cells(&r),
            [
                "12500".to_string(),
                "2016".to_string(),
                "ford f-150".to_string(),
                "good".to_string(),
                String::new(),
                String::new(),
            ]
        );
    }
}
