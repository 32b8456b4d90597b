use std::collections::BTreeSet;
use std::fmt;

use super::model::{Dataset, ListingRecord, ValueRange};

// ---------------------------------------------------------------------------
// Choice – a category selection with an "All" sentinel
// ---------------------------------------------------------------------------

/// Label shown for the unconstrained choice.
pub const ALL_LABEL: &str = "All";

/// Selection for a categorical column.
///
/// `All` is a distinct variant, so a real category that happens to be named
/// "All" is still a concrete constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Whether a record's value for this column satisfies the choice.
    /// A missing value matches only `All`.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => value == Some(wanted.as_str()),
        }
    }

    /// Widget options: `All` followed by every known value in sorted order.
    pub fn options(values: &BTreeSet<String>) -> Vec<Choice> {
        std::iter::once(Choice::All)
            .chain(values.iter().cloned().map(Choice::Only))
            .collect()
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "{ALL_LABEL}"),
            Choice::Only(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSelection – the user's current constraints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub price: ValueRange<f64>,
    pub year: ValueRange<i32>,
    pub condition: Choice,
    pub body_type: Choice,
}

impl FilterSelection {
    /// Selection covering the whole dataset: observed ranges, both categories `All`.
    pub fn full(dataset: &Dataset) -> Self {
        FilterSelection {
            price: dataset.price_range,
            year: dataset.year_range,
            condition: Choice::All,
            body_type: Choice::All,
        }
    }

    /// Re-clamp both ranges to the dataset's observed bounds.
    pub fn clamped(&self, dataset: &Dataset) -> Self {
        FilterSelection {
            price: self.price.clamp_to(&dataset.price_range),
            year: self.year.clamp_to(&dataset.year_range),
            condition: self.condition.clone(),
            body_type: self.body_type.clone(),
        }
    }

    /// The inclusion predicate.
    ///
    /// A missing price or model year never satisfies its range, so such a
    /// record is always excluded, whatever the bounds.
    pub fn admits(&self, record: &ListingRecord) -> bool {
        record.price.is_some_and(|p| self.price.contains(p))
            && record.model_year.is_some_and(|y| self.year.contains(y))
            && self.condition.matches(record.condition.as_deref())
            && self.body_type.matches(record.body_type.as_deref())
    }
}

// ---------------------------------------------------------------------------
// FilteredView – rows of the dataset that pass the selection
// ---------------------------------------------------------------------------

/// A borrowed subset of the dataset, stored as row indices in file order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Number of rows in the view.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Row indices into the dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate over the rows of the view in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &'a ListingRecord> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.records[i])
    }
}

/// Return the view of `dataset` that satisfies every predicate of `selection`.
pub fn evaluate<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.admits(record))
        .map(|(i, _)| i)
        .collect();
    FilteredView { dataset, indices }
}
