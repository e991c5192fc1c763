//! Two-tier selection table.
//!
//! Preprocessing expands the weight groups into a flat, repetition-weighted
//! slot table: a group with rounded weight `w` holding `m` values
//! contributes `floor(w * m)` slots, each slot naming that group. A draw is
//! then two uniform indices: one into the slot table picks a group
//! (weighted by its replication count), one into the group picks a value.
//! Both are O(1), independent of population size.
//!
//! The table trades construction time and memory for draw speed. Its
//! length is the total replica count, which scales with the product of
//! weight ratio and group cardinality rather than with population size
//! alone: one very rare value among many near-equal frequent ones makes
//! every frequent group replicate heavily.
//!
//! Notes:
//! - Replica counts are truncated, never padded. A group whose
//!   `floor(w * m)` came out 0 would simply be undrawable; raising it to 1
//!   would misrepresent the requested distribution.

use std::hash::Hash;

use rand::prelude::*;

use crate::error::BuildError;
use crate::weights::{self, WeightGroup};

/// Precomputed lookup structure for O(1) weighted draws.
///
/// Immutable after construction; draws borrow it read-only and take the
/// RNG from the caller.
#[derive(Debug, Clone)]
pub struct TwoTierTable<T> {
    groups: Vec<WeightGroup<T>>,
    slots: Vec<usize>,
}

impl<T> TwoTierTable<T>
where
    T: Clone + Eq + Hash,
{
    /// Validate `entries` and build the selection table.
    ///
    /// Consumes the population; only the weight groups and the slot table
    /// are retained. Construction cost is O(N log N) for the sort plus
    /// O(total replica count) for the table itself.
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self, BuildError<T>> {
        weights::validate(&entries)?;
        let groups = weights::weight_groups(weights::normalize(entries));

        let mut slots = Vec::new();
        for (index, group) in groups.iter().enumerate() {
            let replicas = (group.weight() * group.values().len() as f64) as usize;
            slots.extend(std::iter::repeat(index).take(replicas));
        }
        // The minimum weight normalizes to 1.0, so a non-empty population
        // always yields at least one slot.
        debug_assert!(!slots.is_empty());

        Ok(Self { groups, slots })
    }

    /// Draw one value using a caller-supplied RNG.
    ///
    /// Tier one picks a slot uniformly; tier two runs only when the slot's
    /// group holds more than one value.
    pub fn draw_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let slot = rng.random_range(0..self.slots.len());
        let values = self.groups[self.slots[slot]].values();
        if values.len() == 1 {
            values[0].clone()
        } else {
            values[rng.random_range(0..values.len())].clone()
        }
    }

    /// The weight groups in ascending weight order (tier one).
    pub fn groups(&self) -> &[WeightGroup<T>] {
        &self.groups
    }

    /// The flat slot table; each slot is an index into [`TwoTierTable::groups`].
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }
}
