//! Descriptive statistics over an observation set.
//!
//! All functions take the non-missing numeric values of a column; order only
//! matters for [`frequencies`], which breaks count ties by first appearance.

use std::collections::BTreeMap;

use normstat_model::Frequency;

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (denominator `n - 1`). `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Median; the mean of the two middle values for an even count.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &value| (lo.min(value), hi.max(value))),
    )
}

// -0.0 and 0.0 are the same observed value.
fn value_key(value: f64) -> u64 {
    if value == 0.0 { 0.0f64.to_bits() } else { value.to_bits() }
}

/// Number of distinct values.
pub fn distinct_count(values: &[f64]) -> usize {
    let mut keys: Vec<u64> = values.iter().map(|value| value_key(*value)).collect();
    keys.sort_unstable();
    keys.dedup();
    keys.len()
}

/// Occurrence counts per distinct value, most frequent first.
///
/// Equal counts keep the order in which the values first appear.
pub fn frequencies(values: &[f64]) -> Vec<Frequency> {
    let mut index: BTreeMap<u64, usize> = BTreeMap::new();
    let mut counts: Vec<Frequency> = Vec::new();
    for &value in values {
        let slot = *index.entry(value_key(value)).or_insert_with(|| {
            counts.push(Frequency { value, count: 0 });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }
    // stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_dev() {
        let ages: Vec<f64> = (22..=32).map(f64::from).collect();
        assert_eq!(mean(&ages), Some(27.0));
        let sd = sample_std_dev(&ages).unwrap();
        assert!((sd - 11f64.sqrt()).abs() < 1e-12);
        assert_eq!(sample_std_dev(&[5.0]), None);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn min_max_scans_all_values() {
        assert_eq!(min_max(&[3.0, -1.0, 7.5, 2.0]), Some((-1.0, 7.5)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn distinct_count_merges_signed_zero() {
        assert_eq!(distinct_count(&[0.0, -0.0, 1.0, 1.0, 2.5]), 3);
        assert_eq!(distinct_count(&[]), 0);
    }

    #[test]
    fn frequencies_sort_by_count_then_first_appearance() {
        let values = [2.0, 1.0, 3.0, 1.0, 3.0, 5.0];
        let counts = frequencies(&values);
        let pairs: Vec<(f64, usize)> = counts.iter().map(|f| (f.value, f.count)).collect();
        assert_eq!(pairs, vec![(1.0, 2), (3.0, 2), (2.0, 1), (5.0, 1)]);
    }
}
