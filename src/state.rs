use crate::charts::ChartSet;
use crate::color::ColorMap;
use crate::data::filter::{evaluate, Choice, FilterSelection};
use crate::data::metrics::{summarize, Summary};
use crate::data::model::{Dataset, ListingRecord};

/// Rows shown in the preview table.
pub const PREVIEW_ROWS: usize = 20;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, shared for the whole process.
    pub dataset: &'static Dataset,

    /// Current filter widgets.
    pub selection: FilterSelection,

    /// Whether the days-listed histogram is computed and drawn.
    pub show_days_listed: bool,

    /// Row indices of the current view (cached).
    pub visible_indices: Vec<usize>,

    /// Headline metrics of the current view (cached).
    pub summary: Summary,

    /// Chart data of the current view (cached).
    pub charts: ChartSet,

    /// Colour per condition, used by the scatter and box plots.
    pub condition_colors: ColorMap,

    /// Selection and toggle that produced the cached results.
    computed_for: Option<(FilterSelection, bool)>,
}

impl AppState {
    pub fn new(dataset: &'static Dataset, show_days_listed: bool) -> Self {
        let mut state = Self {
            dataset,
            selection: FilterSelection::full(dataset),
            show_days_listed,
            visible_indices: Vec::new(),
            summary: Summary::default(),
            charts: ChartSet::default(),
            condition_colors: ColorMap::new(&dataset.conditions),
            computed_for: None,
        };
        state.refresh();
        state
    }

    /// Re-clamp the selection and recompute view, metrics and charts if the
    /// selection or the toggle changed since the last pass.
    pub fn refresh(&mut self) {
        self.selection = self.selection.clamped(self.dataset);
        let key = (self.selection.clone(), self.show_days_listed);
        if self.computed_for.as_ref() == Some(&key) {
            return;
        }

        let view = evaluate(self.dataset, &self.selection);
        self.summary = summarize(&view);
        self.charts = ChartSet::build(&view, self.show_days_listed);
        self.visible_indices = view.indices().to_vec();
        log::debug!(
            "recomputed dashboard: {} of {} listings visible",
            self.visible_indices.len(),
            self.dataset.len()
        );
        self.computed_for = Some(key);
    }

    /// Restore the initial, unconstrained selection.
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::full(self.dataset);
        self.refresh();
    }

    pub fn set_condition(&mut self, choice: Choice) {
        self.selection.condition = choice;
        self.refresh();
    }

    pub fn set_body_type(&mut self, choice: Choice) {
        self.selection.body_type = choice;
        self.refresh();
    }

    /// First rows of the current view for the preview table.
    pub fn preview(&self) -> impl Iterator<Item = &ListingRecord> + '_ {
        self.visible_indices
            .iter()
            .take(PREVIEW_ROWS)
            .map(|&i| &self.dataset.records[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::listing;
    use crate::data::model::ValueRange;

    fn leaked(records: Vec<ListingRecord>) -> &'static Dataset {
        Box::leak(Box::new(Dataset::from_records(records)))
    }

    #[test]
    fn starts_with_everything_visible() {
        let ds = leaked((0..30).map(|i| listing(1000.0 + i as f64, 2010)).collect());
        let state = AppState::new(ds, false);
        assert_eq!(state.visible_indices.len(), 30);
        assert_eq!(state.summary.count, 30);
        assert_eq!(state.preview().count(), PREVIEW_ROWS);
        assert!(state.charts.days_listed_histogram.is_none());
    }

    #[test]
    fn refresh_clamps_and_recomputes() {
        let ds = leaked(vec![listing(1000.0, 2010), listing(5000.0, 2015), listing(9000.0, 2020)]);
        let mut state = AppState::new(ds, false);

        state.selection.price = ValueRange::new(4000.0, 1e12);
        state.refresh();
        assert_eq!(state.selection.price, ValueRange::new(4000.0, 9000.0));
        assert_eq!(state.visible_indices, vec![1, 2]);
        assert_eq!(state.summary.avg_price, Some(7000.0));

        state.show_days_listed = true;
        state.refresh();
        assert!(state.charts.days_listed_histogram.is_some());

        state.reset_filters();
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn category_setters_refilter() {
        let mut sedan = listing(3000.0, 2012);
        sedan.body_type = Some("sedan".to_string());
        let ds = leaked(vec![listing(1000.0, 2010), sedan]);
        let mut state = AppState::new(ds, false);

        state.set_body_type(Choice::Only("sedan".to_string()));
        assert_eq!(state.visible_indices, vec![1]);

        state.set_condition(Choice::Only("salvage".to_string()));
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.summary.price_label(), "N/A");
        assert_eq!(state.preview().count(), 0);
    }
}
