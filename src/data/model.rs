use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// ListingRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single used-vehicle listing (one row of the source CSV).
///
/// Numeric columns that may be blank in the file are `Option`s; a `None`
/// never satisfies a range predicate and is skipped by every mean.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub price: Option<f64>,
    pub model_year: Option<i32>,
    pub model: String,
    pub condition: Option<String>,
    pub odometer: Option<f64>,
    /// Vehicle body type (`type` column).
    pub body_type: Option<String>,
    pub days_listed: u32,
}

// ---------------------------------------------------------------------------
// ValueRange – closed numeric interval
// ---------------------------------------------------------------------------

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ValueRange<T> {
    pub fn new(min: T, max: T) -> Self {
        ValueRange { min, max }
    }

    /// Whether `value` lies inside the interval, both ends included.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamp both ends into `bounds`, swapping them if they end up inverted.
    pub fn clamp_to(&self, bounds: &ValueRange<T>) -> Self {
        let clamp = |v: T| {
            if v < bounds.min {
                bounds.min
            } else if v > bounds.max {
                bounds.max
            } else {
                v
            }
        };
        let (a, b) = (clamp(self.min), clamp(self.max));
        if a <= b {
            ValueRange::new(a, b)
        } else {
            ValueRange::new(b, a)
        }
    }

    /// Smallest interval covering every value, `None` for an empty input.
    pub fn observed(values: impl IntoIterator<Item = T>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(ValueRange::new(v, v)),
            Some(r) => Some(ValueRange::new(
                if v < r.min { v } else { r.min },
                if v > r.max { v } else { r.max },
            )),
        })
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter bounds and category sets.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All listings, in file order.
    pub records: Vec<ListingRecord>,
    /// Observed price range widened to whole units (floor of min, ceil of max).
    pub price_range: ValueRange<f64>,
    /// Observed model-year range.
    pub year_range: ValueRange<i32>,
    /// Sorted distinct non-missing `condition` values.
    pub conditions: BTreeSet<String>,
    /// Sorted distinct non-missing `type` values.
    pub body_types: BTreeSet<String>,
}

impl Dataset {
    /// Build the load-time indices from the parsed records.
    ///
    /// A column with no values at all yields a zero-width `[0, 0]` range.
    pub fn from_records(records: Vec<ListingRecord>) -> Self {
        let price_range = ValueRange::observed(records.iter().filter_map(|r| r.price))
            .map(|r| ValueRange::new(r.min.floor(), r.max.ceil()))
            .unwrap_or(ValueRange::new(0.0, 0.0));
        let year_range = ValueRange::observed(records.iter().filter_map(|r| r.model_year))
            .unwrap_or(ValueRange::new(0, 0));

        let conditions = records
            .iter()
            .filter_map(|r| r.condition.clone())
            .collect();
        let body_types = records
            .iter()
            .filter_map(|r| r.body_type.clone())
            .collect();

        Dataset {
            records,
            price_range,
            year_range,
            conditions,
            body_types,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
