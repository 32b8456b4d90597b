/// Chart builders: each turns a filtered view into plain data that the UI
/// layer draws with `egui_plot`. None of them touch egui, and every one
/// accepts an empty view.

pub mod boxplot;
pub mod histogram;
pub mod scatter;
pub mod share;
pub mod trend;

use crate::data::filter::FilteredView;

use boxplot::ConditionBoxes;
use histogram::{Histogram, BIN_COUNT};
use scatter::ScatterChart;
use share::CategoryShare;
use trend::YearTrend;

/// Every chart on the dashboard for one filtered view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSet {
    pub price_histogram: Histogram,
    pub type_share: CategoryShare,
    pub price_vs_mileage: ScatterChart,
    pub price_by_year: YearTrend,
    pub price_by_condition: ConditionBoxes,
    /// Only built while the days-listed toggle is on.
    pub days_listed_histogram: Option<Histogram>,
}

impl ChartSet {
    pub fn build(view: &FilteredView<'_>, include_days_listed: bool) -> Self {
        let prices: Vec<f64> = view.records().filter_map(|r| r.price).collect();

        let days_listed_histogram = include_days_listed.then(|| {
            let days: Vec<f64> = view.records().map(|r| f64::from(r.days_listed)).collect();
            Histogram::build(&days, BIN_COUNT)
        });

        ChartSet {
            price_histogram: Histogram::build(&prices, BIN_COUNT),
            type_share: CategoryShare::build(view.records().map(|r| r.body_type.as_deref())),
            price_vs_mileage: ScatterChart::build(view.records()),
            price_by_year: YearTrend::build(view.records()),
            price_by_condition: ConditionBoxes::build(view.records()),
            days_listed_histogram,
        }
    }
}
