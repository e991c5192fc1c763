//! Baseline weighted draw.
//!
//! Draws directly from the raw probabilities through `rand`'s
//! [`WeightedIndex`] cumulative structure: O(log N) per draw and no table
//! to build. Serves as an auditable ground truth for the two-tier table
//! and as the cheaper choice when the population is too small to justify
//! preprocessing.

use std::hash::Hash;

use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;

use crate::error::BuildError;
use crate::weights;

/// Direct weighted-choice sampler over the original population.
#[derive(Debug, Clone)]
pub struct SimpleSampler<T> {
    values: Vec<T>,
    dist: WeightedIndex<f64>,
}

impl<T> SimpleSampler<T>
where
    T: Clone + Eq + Hash,
{
    /// Validate `entries` and prepare the cumulative-weight structure.
    ///
    /// Applies the same input contract as the two-tier table, so callers
    /// can switch methods without changing which populations are accepted.
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self, BuildError<T>> {
        weights::validate(&entries)?;
        let (values, probabilities): (Vec<T>, Vec<f64>) = entries.into_iter().unzip();
        let dist = WeightedIndex::new(&probabilities)
            .expect("validated probabilities are finite, positive, and non-empty");
        Ok(Self { values, dist })
    }

    /// Draw one value using a caller-supplied RNG.
    pub fn draw_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.dist.sample(rng)].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn draws_only_return_population_values() {
        let sampler =
            SimpleSampler::new(vec![(1u32, 0.25), (2, 0.50), (7, 0.25)]).expect("valid population");
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10_000 {
            let value = sampler.draw_with_rng(&mut rng);
            assert!(matches!(value, 1 | 2 | 7), "unexpected value {value}");
        }
    }

    #[test]
    fn applies_the_shared_input_contract() {
        let empty: Vec<(u32, f64)> = vec![];
        assert_eq!(
            SimpleSampler::new(empty).unwrap_err(),
            BuildError::EmptyPopulation
        );
        assert!(SimpleSampler::new(vec![(3u32, 0.2), (3, 0.2)]).is_err());
        assert!(SimpleSampler::new(vec![(3u32, 1.2)]).is_err());
    }

    #[test]
    fn distribution_matches_probabilities_within_5_sigma() {
        let sampler =
            SimpleSampler::new(vec![(0usize, 0.125), (1, 0.25), (2, 0.625)]).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(123);

        let n = 100_000usize;
        let mut counts = [0usize; 3];
        for _ in 0..n {
            counts[sampler.draw_with_rng(&mut rng)] += 1;
        }

        let expected = [0.125, 0.25, 0.625];
        for (i, &p) in expected.iter().enumerate() {
            let freq = counts[i] as f64 / n as f64;
            let sigma = (p * (1.0 - p) / n as f64).sqrt();
            assert!(
                (freq - p).abs() <= 5.0 * sigma,
                "bucket {i}: freq={freq:.6}, expected={p:.6}, tolerance={:.6}",
                5.0 * sigma
            );
        }
    }
}
