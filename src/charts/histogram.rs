/// Number of equal-width bins used by every histogram on the dashboard.
pub const BIN_COUNT: usize = 30;

/// One histogram bucket covering `[start, end)`; the last bucket also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width histogram; empty `bins` means there was nothing to count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    /// Bin `values` into `bin_count` buckets spanning their own min/max.
    ///
    /// When every value is equal the span is zero; a single unit-wide bucket
    /// starting at that value holds all of them.
    pub fn build(values: &[f64], bin_count: usize) -> Self {
        let Some((min, max)) = min_max(values) else {
            return Histogram::default();
        };
        if bin_count == 0 {
            return Histogram::default();
        }

        if max <= min {
            return Histogram {
                bins: vec![Bin {
                    start: min,
                    end: min + 1.0,
                    count: values.len(),
                }],
            };
        }

        let width = (max - min) / bin_count as f64;
        let mut bins: Vec<Bin> = (0..bin_count)
            .map(|i| Bin {
                start: min + i as f64 * width,
                end: if i + 1 == bin_count {
                    max
                } else {
                    min + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        for &v in values {
            let idx = (((v - min) / width) as usize).min(bin_count - 1);
            bins[idx].count += 1;
        }

        Histogram { bins }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_histogram() {
        let h = Histogram::build(&[], BIN_COUNT);
        assert!(h.is_empty());
        assert_eq!(h.total(), 0);
    }

    #[test]
    fn bins_span_observed_range() {
        let values: Vec<f64> = (0..=300).map(f64::from).collect();
        let h = Histogram::build(&values, BIN_COUNT);
        assert_eq!(h.bins.len(), BIN_COUNT);
        assert_eq!(h.bins[0].start, 0.0);
        assert_eq!(h.bins[BIN_COUNT - 1].end, 300.0);
        assert!((h.bins[0].width() - 10.0).abs() < 1e-9);
        assert_eq!(h.total(), values.len());
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let h = Histogram::build(&[0.0, 10.0], 2);
        assert_eq!(h.bins[0].count, 1);
        assert_eq!(h.bins[1].count, 1);
    }

    #[test]
    fn boundary_value_goes_to_upper_bin() {
        let h = Histogram::build(&[0.0, 5.0, 10.0], 2);
        assert_eq!(h.bins[0].count, 1);
        assert_eq!(h.bins[1].count, 2);
    }

    #[test]
    fn identical_values_collapse_to_one_bin() {
        let h = Histogram::build(&[4200.0, 4200.0, 4200.0], BIN_COUNT);
        assert_eq!(h.bins.len(), 1);
        assert_eq!(h.bins[0].count, 3);
        assert_eq!(h.bins[0].start, 4200.0);
    }
}
