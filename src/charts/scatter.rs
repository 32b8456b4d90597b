use std::collections::BTreeMap;

use crate::data::model::ListingRecord;

/// Series name for listings without a condition.
pub const UNKNOWN_CONDITION: &str = "unknown";

/// One plotted listing. `model` and `model_year` are carried for hover text only.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub odometer: f64,
    pub price: f64,
    pub model: String,
    pub model_year: Option<i32>,
}

/// Points sharing one `condition` value; drawn in a single colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub condition: String,
    pub points: Vec<ScatterPoint>,
}

/// Price (y) against mileage (x), one series per condition in alphabetical order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterChart {
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Rows missing either price or odometer are not plotted.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a ListingRecord>) -> Self {
        let mut groups: BTreeMap<String, Vec<ScatterPoint>> = BTreeMap::new();
        for r in records {
            let (Some(price), Some(odometer)) = (r.price, r.odometer) else {
                continue;
            };
            let key = r
                .condition
                .clone()
                .unwrap_or_else(|| UNKNOWN_CONDITION.to_string());
            groups.entry(key).or_default().push(ScatterPoint {
                odometer,
                price,
                model: r.model.clone(),
                model_year: r.model_year,
            });
        }

        ScatterChart {
            series: groups
                .into_iter()
                .map(|(condition, points)| ScatterSeries { condition, points })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// The point minimising `distance`, provided it is below `max_distance`.
    /// The shell passes a screen-space distance so hover works at any zoom.
    pub fn nearest(
        &self,
        distance: impl Fn(&ScatterPoint) -> f64,
        max_distance: f64,
    ) -> Option<(&ScatterSeries, &ScatterPoint)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(move |p| (s, p)))
            .map(|(s, p)| (distance(p), s, p))
            .filter(|(d, _, _)| *d <= max_distance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, s, p)| (s, p))
    }
}

impl ScatterPoint {
    /// Hover text: model, year, price and mileage.
    pub fn describe(&self, condition: &str) -> String {
        let year = self
            .model_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "?".to_string());
        format!(
            "{} ({year})\ncondition: {condition}\nprice: ${:.0}\nmileage: {:.0} mi",
            self.model, self.price, self.odometer
        )
    }
}
