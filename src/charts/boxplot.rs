use std::collections::BTreeMap;

use crate::data::model::ListingRecord;

/// Five-number summary of one group, with Tukey whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub label: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Most extreme values still within 1.5 × IQR of the box.
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
    pub n: usize,
}

impl BoxStats {
    /// `None` when there are no values.
    pub fn from_values(label: impl Into<String>, mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&values, 0.25);
        let median = quantile_sorted(&values, 0.5);
        let q3 = quantile_sorted(&values, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside = values.iter().copied().filter(|v| (low_fence..=high_fence).contains(v));
        let lower_whisker = inside.clone().next().unwrap_or(q1);
        let upper_whisker = inside.last().unwrap_or(q3);
        let outliers = values
            .iter()
            .copied()
            .filter(|v| !(low_fence..=high_fence).contains(v))
            .collect();

        Some(BoxStats {
            label: label.into(),
            min: values[0],
            q1,
            median,
            q3,
            max: values[values.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers,
            n: values.len(),
        })
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Price distribution per condition, alphabetical by condition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionBoxes {
    pub boxes: Vec<BoxStats>,
}

impl ConditionBoxes {
    /// Listings without a condition or a price are left out.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a ListingRecord>) -> Self {
        let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for r in records {
            if let (Some(condition), Some(price)) = (r.condition.as_deref(), r.price) {
                groups.entry(condition).or_default().push(price);
            }
        }
        ConditionBoxes {
            boxes: groups
                .into_iter()
                .filter_map(|(label, prices)| BoxStats::from_values(label, prices))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::listing;

    #[test]
    fn quantiles_interpolate_linearly() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&v, 0.0), 1.0);
        assert_eq!(quantile_sorted(&v, 0.25), 1.75);
        assert_eq!(quantile_sorted(&v, 0.5), 2.5);
        assert_eq!(quantile_sorted(&v, 0.75), 3.25);
        assert_eq!(quantile_sorted(&v, 1.0), 4.0);
        assert_eq!(quantile_sorted(&[7.0], 0.5), 7.0);
    }

    #[test]
    fn outliers_fall_outside_whiskers() {
        let values = vec![10.0, 12.0, 11.0, 13.0, 12.0, 11.0, 100.0];
        let stats = BoxStats::from_values("good", values).unwrap();
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 100.0);
        assert_eq!(stats.median, 12.0);
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.upper_whisker, 13.0);
        assert_eq!(stats.lower_whisker, 10.0);
        assert_eq!(stats.n, 7);
    }

    #[test]
    fn single_value_collapses_box() {
        let stats = BoxStats::from_values("fair", vec![5000.0]).unwrap();
        assert_eq!(stats.q1, 5000.0);
        assert_eq!(stats.q3, 5000.0);
        assert_eq!(stats.lower_whisker, 5000.0);
        assert_eq!(stats.upper_whisker, 5000.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn groups_by_condition_alphabetically() {
        let mut fair = listing(2000.0, 2005);
        fair.condition = Some("fair".to_string());
        let mut excellent = listing(15000.0, 2019);
        excellent.condition = Some("excellent".to_string());
        let mut unknown = listing(1.0, 2000);
        unknown.condition = None;
        let records = vec![listing(8000.0, 2014), fair, excellent, unknown, listing(6000.0, 2012)];

        let boxes = ConditionBoxes::build(&records);
        let labels: Vec<&str> = boxes.boxes.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["excellent", "fair", "good"]);
        assert_eq!(boxes.boxes[2].n, 2);
        assert_eq!(boxes.boxes[2].median, 7000.0);
    }

    #[test]
    fn empty_input_has_no_boxes() {
        assert!(ConditionBoxes::build(&[]).is_empty());
        assert!(BoxStats::from_values("x", Vec::new()).is_none());
    }
}
