//! Population validation and weight-group construction.
//!
//! Raw `(value, probability)` pairs become draw-ready weight groups in
//! three steps:
//!
//! 1. **Validate**: values must be pairwise distinct and every probability
//!    must lie in the open interval (0, 1).
//! 2. **Normalize**: divide every probability by the population minimum,
//!    so the weights start at 1.0, then round to a precision picked from
//!    the population size. Rounding collapses near-equal probabilities
//!    into one bucket: with a large population the distinction between,
//!    say, 0.000023 and 0.000025 is negligible, and keeping them separate
//!    would give the selection table one bucket per distinct probability.
//! 3. **Group**: collapse runs of equal rounded weight in the sorted
//!    sequence into [`WeightGroup`]s.
//!
//! Probabilities are not required to sum to 1.0. Normalization is relative
//! to the minimum, not absolute, so only the ratios between probabilities
//! matter.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::BuildError;

/// Values sharing one rounded normalized weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightGroup<T> {
    weight: f64,
    values: Vec<T>,
}

impl<T> WeightGroup<T> {
    /// The group's rounded normalized weight. Always >= 1.0: the
    /// population minimum normalizes to exactly 1.0 before rounding.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The values sharing this weight, in input order.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// Check a raw population: pairwise-distinct values, probabilities in (0, 1).
///
/// Reports both positions of a duplicated value, and the position and
/// offending value of an out-of-range probability. A non-finite
/// probability (NaN or infinite) is rejected with the same error as an
/// out-of-range one, since it would poison the minimum and every
/// normalized weight after it.
pub(crate) fn validate<T>(entries: &[(T, f64)]) -> Result<(), BuildError<T>>
where
    T: Clone + Eq + Hash,
{
    if entries.is_empty() {
        return Err(BuildError::EmptyPopulation);
    }

    let mut first_seen: HashMap<&T, usize> = HashMap::with_capacity(entries.len());
    for (position, (value, probability)) in entries.iter().enumerate() {
        if let Some(&first) = first_seen.get(value) {
            return Err(BuildError::DuplicateValue {
                value: value.clone(),
                first,
                second: position,
            });
        }
        first_seen.insert(value, position);

        if !probability.is_finite() || *probability <= 0.0 || *probability >= 1.0 {
            return Err(BuildError::InvalidProbability {
                position,
                probability: *probability,
            });
        }
    }

    Ok(())
}

/// Rounding precision (decimal digits) for a population of `n` entries.
///
/// Larger populations round more coarsely so that the number of distinct
/// weight buckets stays bounded.
pub(crate) fn precision_for(n: usize) -> i32 {
    if n < 1_000 {
        3
    } else if n < 100_000 {
        2
    } else {
        1
    }
}

fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (x * scale).round() / scale
}

/// Rescale every probability relative to the population minimum, round,
/// and sort ascending by rounded weight.
///
/// Consumes the population: after this point only `(weight, value)` pairs
/// survive, which keeps the memory footprint bounded by what the selection
/// table actually needs. Ties keep input order (the sort is stable).
pub(crate) fn normalize<T>(entries: Vec<(T, f64)>) -> Vec<(f64, T)> {
    let digits = precision_for(entries.len());
    let min = entries
        .iter()
        .map(|(_, probability)| *probability)
        .fold(f64::INFINITY, f64::min);
    let normalizer = 1.0 / min;

    let mut weighted: Vec<(f64, T)> = entries
        .into_iter()
        .map(|(value, probability)| (round_to(probability * normalizer, digits), value))
        .collect();
    weighted.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    weighted
}

/// Collapse a weight-sorted sequence into contiguous equal-weight groups.
///
/// Input must be sorted ascending by weight; the scan is a single linear
/// pass with the open group as its only state.
pub(crate) fn weight_groups<T>(sorted: Vec<(f64, T)>) -> Vec<WeightGroup<T>> {
    let mut groups: Vec<WeightGroup<T>> = Vec::new();
    for (weight, value) in sorted {
        match groups.last_mut() {
            Some(group) if group.weight == weight => group.values.push(value),
            _ => groups.push(WeightGroup {
                weight,
                values: vec![value],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_follows_population_size() {
        assert_eq!(precision_for(1), 3);
        assert_eq!(precision_for(999), 3);
        assert_eq!(precision_for(1_000), 2);
        assert_eq!(precision_for(99_999), 2);
        assert_eq!(precision_for(100_000), 1);
        assert_eq!(precision_for(1_000_000), 1);
    }

    #[test]
    fn validate_rejects_empty_population() {
        let entries: Vec<(u32, f64)> = vec![];
        assert_eq!(validate(&entries), Err(BuildError::EmptyPopulation));
    }

    #[test]
    fn validate_reports_both_duplicate_positions() {
        let entries = vec![(1u32, 0.5), (1u32, 0.5)];
        assert_eq!(
            validate(&entries),
            Err(BuildError::DuplicateValue {
                value: 1,
                first: 0,
                second: 1,
            })
        );

        let entries = vec![(7u32, 0.1), (2, 0.2), (9, 0.3), (2, 0.1)];
        assert_eq!(
            validate(&entries),
            Err(BuildError::DuplicateValue {
                value: 2,
                first: 1,
                second: 3,
            })
        );
    }

    #[test]
    fn validate_rejects_probability_of_one_or_more() {
        let entries = vec![(1u32, 1.5)];
        assert_eq!(
            validate(&entries),
            Err(BuildError::InvalidProbability {
                position: 0,
                probability: 1.5,
            })
        );

        let entries = vec![(1u32, 0.5), (2, 1.0)];
        assert_eq!(
            validate(&entries),
            Err(BuildError::InvalidProbability {
                position: 1,
                probability: 1.0,
            })
        );
    }

    #[test]
    fn validate_rejects_non_positive_and_non_finite() {
        let entries = vec![(1u32, 0.0)];
        assert!(matches!(
            validate(&entries),
            Err(BuildError::InvalidProbability { position: 0, .. })
        ));

        let entries = vec![(1u32, 0.5), (2, -0.25)];
        assert!(matches!(
            validate(&entries),
            Err(BuildError::InvalidProbability { position: 1, .. })
        ));

        let entries = vec![(1u32, f64::NAN)];
        assert!(matches!(
            validate(&entries),
            Err(BuildError::InvalidProbability { position: 0, .. })
        ));
    }

    #[test]
    fn validate_accepts_probabilities_that_do_not_sum_to_one() {
        // Relative normalization only needs ratios; the total is free.
        let entries = vec![(1u32, 0.5), (2, 0.5), (3, 0.5)];
        assert_eq!(validate(&entries), Ok(()));
    }

    #[test]
    fn normalize_pins_minimum_at_one_and_sorts() {
        let entries = vec![(1u32, 0.25), (2, 0.3), (3, 0.2), (4, 0.5)];
        let weighted = normalize(entries);
        let weights: Vec<f64> = weighted.iter().map(|(w, _)| *w).collect();
        let values: Vec<u32> = weighted.iter().map(|(_, v)| *v).collect();

        assert_eq!(weights, vec![1.0, 1.25, 1.5, 2.5]);
        assert_eq!(values, vec![3, 1, 2, 4]);
    }

    #[test]
    fn normalize_collapses_nearby_probabilities() {
        // 3-digit rounding for a small population: a relative difference
        // below 5e-4 lands both entries on the same weight.
        let entries = vec![(1u32, 0.2000001), (2, 0.2), (3, 0.4)];
        let weighted = normalize(entries);
        assert_eq!(weighted[0].0, 1.0);
        assert_eq!(weighted[1].0, 1.0);
        assert_eq!(weighted[2].0, 2.0);
    }

    #[test]
    fn normalize_keeps_input_order_on_ties() {
        let entries = vec![(9u32, 0.25), (4, 0.25), (1, 0.25)];
        let weighted = normalize(entries);
        let values: Vec<u32> = weighted.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![9, 4, 1]);
    }

    #[test]
    fn weight_groups_collapse_equal_runs() {
        let sorted = vec![(1.0, 1u32), (1.0, 7), (2.0, 2)];
        let groups = weight_groups(sorted);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].weight(), 1.0);
        assert_eq!(groups[0].values(), &[1, 7]);
        assert_eq!(groups[1].weight(), 2.0);
        assert_eq!(groups[1].values(), &[2]);
    }

    #[test]
    fn weight_groups_single_entry() {
        let groups = weight_groups(vec![(1.0, 42u32)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].values(), &[42]);
    }
}
