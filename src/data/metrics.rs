use super::filter::FilteredView;

/// Displayed in place of an average that has no values to average.
pub const NOT_AVAILABLE: &str = "N/A";

/// Headline numbers for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    pub avg_price: Option<f64>,
    pub avg_odometer: Option<f64>,
    pub avg_model_year: Option<f64>,
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Compute the headline numbers; each mean skips missing values.
pub fn summarize(view: &FilteredView<'_>) -> Summary {
    Summary {
        count: view.len(),
        avg_price: mean(view.records().filter_map(|r| r.price)),
        avg_odometer: mean(view.records().filter_map(|r| r.odometer)),
        avg_model_year: mean(view.records().filter_map(|r| r.model_year.map(f64::from))),
    }
}

impl Summary {
    pub fn price_label(&self) -> String {
        self.avg_price
            .map(|v| format!("${}", group_thousands(v.round() as i64)))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn odometer_label(&self) -> String {
        self.avg_odometer
            .map(|v| format!("{} mi", group_thousands(v.round() as i64)))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn model_year_label(&self) -> String {
        self.avg_model_year
            .map(|v| format!("{:.0}", v.round()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
