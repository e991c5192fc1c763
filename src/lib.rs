//! `dartboard`: weighted random selection from a fixed population.
//!
//! A population of `(value, probability)` pairs is preprocessed once into a
//! two-tier selection table; every subsequent draw costs two uniform random
//! indices, independent of population size. A direct weighted-choice
//! baseline sits behind the same interface for statistical comparison and
//! for populations too small to justify a table.
//!
//! Exposed modules:
//! - `board`: the [`DartBoard`] engine facade and [`Method`] selector.
//! - `two_tier`: the precomputed [`TwoTierTable`].
//! - `simple`: the [`SimpleSampler`] baseline.
//! - `weights`: [`WeightGroup`] and the normalization/rounding rules.
//! - `error`: the construction-time [`BuildError`] taxonomy.
//!
//! Probabilities are interpreted relative to the population minimum, so
//! they are not required to sum to 1.0; only their ratios matter.

#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod simple;
pub mod two_tier;
pub mod weights;

pub use board::{DartBoard, Method, UnknownMethodError};
pub use error::BuildError;
pub use simple::SimpleSampler;
pub use two_tier::TwoTierTable;
pub use weights::WeightGroup;
