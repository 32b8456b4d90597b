use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoint, PlotPoints, Points,
};

use crate::charts::boxplot::ConditionBoxes;
use crate::charts::histogram::Histogram;
use crate::charts::scatter::ScatterChart;
use crate::charts::share::CategoryShare;
use crate::charts::trend::YearTrend;
use crate::color::{generate_palette, ColorMap};
use crate::state::AppState;

const PLOT_HEIGHT: f32 = 280.0;
const BAR_COLOR: Color32 = Color32::from_rgb(99, 110, 250);
/// Screen distance, in points, within which a scatter point counts as hovered.
const HOVER_RADIUS: f64 = 8.0;

// ---------------------------------------------------------------------------
// Chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render every chart for the current view.
pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    let charts = &state.charts;
    let colors = &state.condition_colors;

    ui.columns(2, |cols: &mut [Ui]| {
        section(&mut cols[0], "Price Distribution");
        histogram_plot(&mut cols[0], "price_histogram", &charts.price_histogram, "Price ($)");
        section(&mut cols[1], "Vehicle Types");
        share_plot(&mut cols[1], &charts.type_share);
    });
    ui.add_space(8.0);

    ui.columns(2, |cols: &mut [Ui]| {
        section(&mut cols[0], "Price vs Mileage");
        scatter_plot(&mut cols[0], &charts.price_vs_mileage, colors);
        section(&mut cols[1], "Price Trends by Year");
        trend_plot(&mut cols[1], &charts.price_by_year);
    });
    ui.add_space(8.0);

    section(ui, "Price Distribution by Condition");
    condition_box_plot(ui, &charts.price_by_condition, colors);
    ui.add_space(8.0);

    section(ui, "Days Listed Distribution");
    if ui
        .checkbox(&mut state.show_days_listed, "Show Days Listed Histogram")
        .changed()
    {
        state.refresh();
    }
    if let Some(hist) = &state.charts.days_listed_histogram {
        histogram_plot(ui, "days_listed_histogram", hist, "Days Listed");
    }
}

fn section(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).heading());
}

/// Drawn in place of a chart whose view has nothing to show.
fn placeholder(ui: &mut Ui) {
    ui.add_sized(
        [ui.available_width(), PLOT_HEIGHT],
        egui::Label::new(RichText::new("No listings match the current filters").weak()),
    );
}

// ---------------------------------------------------------------------------
// Individual charts
// ---------------------------------------------------------------------------

fn histogram_plot(ui: &mut Ui, id: &str, hist: &Histogram, x_label: &str) {
    if hist.is_empty() {
        placeholder(ui);
        return;
    }
    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .name(format!("{:.0} – {:.0}", b.start, b.end))
        })
        .collect();

    Plot::new(id)
        .height(PLOT_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label("Number of Vehicles")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name("count"));
        });
}

/// Proportions as horizontal bars, one legend entry per category.
fn share_plot(ui: &mut Ui, share: &CategoryShare) {
    if share.is_empty() {
        placeholder(ui);
        return;
    }
    let palette = generate_palette(share.slices.len());

    Plot::new("type_share")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Share of listings (%)")
        .show_axes([true, false])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, (slice, color)) in share.slices.iter().zip(&palette).enumerate() {
                let pct = slice.fraction * 100.0;
                // Largest share at the top.
                let bar = Bar::new(-(i as f64), pct).width(0.8);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .horizontal()
                        .color(*color)
                        .name(format!("{}: {} ({pct:.1}%)", slice.label, slice.count)),
                );
            }
        });
}

fn scatter_plot(ui: &mut Ui, chart: &ScatterChart, colors: &ColorMap) {
    if chart.is_empty() {
        placeholder(ui);
        return;
    }

    let response = Plot::new("price_vs_mileage")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Mileage (miles)")
        .y_axis_label("Price ($)")
        .show_x(false)
        .show_y(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|p| [p.odometer, p.price])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.condition)
                        .color(colors.color_for(&series.condition))
                        .radius(2.0),
                );
            }
        });

    // model and model_year are only shown on hover.
    let Some(pointer) = response.response.hover_pos() else {
        return;
    };
    let transform = &response.transform;
    let hovered = chart.nearest(
        |p| {
            let screen = transform.position_from_point(&PlotPoint::new(p.odometer, p.price));
            f64::from(screen.distance(pointer))
        },
        HOVER_RADIUS,
    );
    if let Some((series, point)) = hovered {
        let text = point.describe(&series.condition);
        response.response.on_hover_text_at_pointer(text);
    }
}

fn trend_plot(ui: &mut Ui, trend: &YearTrend) {
    if trend.is_empty() {
        placeholder(ui);
        return;
    }
    let coords: Vec<[f64; 2]> = trend
        .points
        .iter()
        .map(|p| [f64::from(p.model_year), p.avg_price])
        .collect();

    Plot::new("price_by_year")
        .height(PLOT_HEIGHT)
        .x_axis_label("Model Year")
        .y_axis_label("Average Price ($)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(coords.clone()))
                    .color(BAR_COLOR)
                    .width(2.0)
                    .name("average price"),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(coords))
                    .color(BAR_COLOR)
                    .radius(4.0)
                    .name("average price"),
            );
        });
}

fn condition_box_plot(ui: &mut Ui, boxes: &ConditionBoxes, colors: &ColorMap) {
    if boxes.is_empty() {
        placeholder(ui);
        return;
    }

    Plot::new("price_by_condition")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Condition")
        .y_axis_label("Price ($)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, stats) in boxes.boxes.iter().enumerate() {
                let x = i as f64;
                let color = colors.color_for(&stats.label);
                let spread = BoxSpread::new(
                    stats.lower_whisker,
                    stats.q1,
                    stats.median,
                    stats.q3,
                    stats.upper_whisker,
                );
                let elem = BoxElem::new(x, spread)
                    .name(format!(
                        "{} (n = {}, min ${:.0}, max ${:.0})",
                        stats.label, stats.n, stats.min, stats.max
                    ))
                    .box_width(0.6)
                    .whisker_width(0.4);
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&stats.label).color(color));

                if !stats.outliers.is_empty() {
                    let outliers: PlotPoints = stats.outliers.iter().map(|&y| [x, y]).collect();
                    plot_ui.points(
                        Points::new(outliers)
                            .name(&stats.label)
                            .color(color)
                            .radius(2.0),
                    );
                }
            }
        });
}
