use std::collections::BTreeMap;

use crate::data::metrics::mean;
use crate::data::model::ListingRecord;

/// Mean price for one model year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPoint {
    pub model_year: i32,
    pub avg_price: f64,
}

/// Average price per model year, ascending by year.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearTrend {
    pub points: Vec<YearPoint>,
}

impl YearTrend {
    /// Years without any priced listing are left out rather than plotted as gaps.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a ListingRecord>) -> Self {
        let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for r in records {
            if let (Some(year), Some(price)) = (r.model_year, r.price) {
                by_year.entry(year).or_default().push(price);
            }
        }

        let points = by_year
            .into_iter()
            .filter_map(|(model_year, prices)| {
                mean(prices).map(|avg_price| YearPoint {
                    model_year,
                    avg_price,
                })
            })
            .collect();
        YearTrend { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::listing;

    #[test]
    fn groups_by_year_in_ascending_order() {
        let records = vec![
            listing(9000.0, 2015),
            listing(2000.0, 2008),
            listing(7000.0, 2015),
            listing(4000.0, 2008),
            listing(6000.0, 2011),
        ];
        let trend = YearTrend::build(&records);
        let years: Vec<i32> = trend.points.iter().map(|p| p.model_year).collect();
        assert_eq!(years, vec![2008, 2011, 2015]);
        assert_eq!(trend.points[0].avg_price, 3000.0);
        assert_eq!(trend.points[2].avg_price, 8000.0);
    }

    #[test]
    fn rows_missing_year_or_price_are_skipped() {
        let mut no_year = listing(5000.0, 2010);
        no_year.model_year = None;
        let mut no_price = listing(5000.0, 2012);
        no_price.price = None;
        let trend = YearTrend::build(&[no_year, no_price, listing(1000.0, 2012)]);
        assert_eq!(trend.points.len(), 1);
        assert_eq!(trend.points[0].avg_price, 1000.0);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(YearTrend::build(&[]).is_empty());
    }
}
