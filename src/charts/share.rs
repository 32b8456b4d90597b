use std::collections::BTreeMap;

/// One category's slice of the whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    /// `count / total`, in `[0, 1]`.
    pub fraction: f64,
}

/// Category counts expressed as proportions, largest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryShare {
    pub slices: Vec<Slice>,
}

impl CategoryShare {
    /// Count each distinct present value. Missing values are not counted and
    /// do not contribute to the total. Ties are ordered alphabetically.
    pub fn build<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for v in values.into_iter().flatten() {
            *counts.entry(v).or_default() += 1;
        }
        let total: usize = counts.values().sum();
        if total == 0 {
            return CategoryShare::default();
        }

        let mut slices: Vec<Slice> = counts
            .into_iter()
            .map(|(label, count)| Slice {
                label: label.to_string(),
                count,
                fraction: count as f64 / total as f64,
            })
            .collect();
        // Stable sort keeps the alphabetical order from the map for ties.
        slices.sort_by(|a, b| b.count.cmp(&a.count));

        CategoryShare { slices }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_present_values_largest_first() {
        let share = CategoryShare::build([
            Some("sedan"),
            Some("SUV"),
            None,
            Some("sedan"),
            Some("truck"),
            Some("sedan"),
            Some("SUV"),
        ]);
        let labels: Vec<&str> = share.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["sedan", "SUV", "truck"]);
        assert_eq!(share.slices[0].count, 3);
        assert!((share.slices[0].fraction - 0.5).abs() < 1e-12);
        let sum: f64 = share.slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ties_are_alphabetical() {
        let share = CategoryShare::build([Some("wagon"), Some("coupe"), Some("van")]);
        let labels: Vec<&str> = share.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["coupe", "van", "wagon"]);
    }

    #[test]
    fn all_missing_is_empty() {
        assert!(CategoryShare::build([None, None]).is_empty());
        assert!(CategoryShare::build(std::iter::empty()).is_empty());
    }
}
