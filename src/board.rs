//! Engine facade: one construction surface, two draw methods.
//!
//! [`DartBoard`] owns its pseudo-random generator, so several engines can
//! be constructed and driven deterministically in one process without
//! touching shared state. The draw method is a tagged variant fixed at
//! construction and matched on each draw.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use rand::prelude::*;

use crate::error::BuildError;
use crate::simple::SimpleSampler;
use crate::two_tier::TwoTierTable;

/// Draw-method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Two-tier table lookup: O(1) per draw after preprocessing.
    TwoTier,
    /// Direct weighted choice over the raw probabilities: O(log N) per
    /// draw, nothing precomputed.
    Simple,
}

impl Method {
    /// The string selector naming this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::TwoTier => "two-tier",
            Method::Simple => "simple",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-tier" => Ok(Method::TwoTier),
            "simple" => Ok(Method::Simple),
            other => Err(UnknownMethodError {
                name: other.to_string(),
            }),
        }
    }
}

/// A method selector string that names no known method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethodError {
    name: String,
}

impl fmt::Display for UnknownMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown draw method {:?} (expected \"two-tier\" or \"simple\")",
            self.name
        )
    }
}

impl std::error::Error for UnknownMethodError {}

impl<T> From<UnknownMethodError> for BuildError<T> {
    fn from(err: UnknownMethodError) -> Self {
        BuildError::UnknownMethod { name: err.name }
    }
}

#[derive(Debug)]
enum Kind<T> {
    TwoTier(TwoTierTable<T>),
    Simple(SimpleSampler<T>),
}

/// Weighted random selection engine over a fixed population.
///
/// Construction validates the population, builds the structures the chosen
/// [`Method`] needs, and seeds the engine's own generator. After that,
/// [`DartBoard::draw`] is total: it always returns a value from the
/// original population.
#[derive(Debug)]
pub struct DartBoard<T> {
    kind: Kind<T>,
    rng: StdRng,
    population_size: usize,
}

impl<T> DartBoard<T>
where
    T: Clone + Eq + Hash,
{
    /// Build an engine seeded from OS entropy.
    pub fn new(entries: Vec<(T, f64)>, method: Method) -> Result<Self, BuildError<T>> {
        Self::build(entries, method, StdRng::from_os_rng())
    }

    /// Build an engine with a fixed seed.
    ///
    /// Identical `(entries, method, seed)` produce an identical selection
    /// table and an identical draw sequence.
    pub fn with_seed(
        entries: Vec<(T, f64)>,
        method: Method,
        seed: u64,
    ) -> Result<Self, BuildError<T>> {
        Self::build(entries, method, StdRng::seed_from_u64(seed))
    }

    /// Build an engine from a string selector (`"two-tier"` or `"simple"`).
    ///
    /// An unrecognized selector fails construction with
    /// [`BuildError::UnknownMethod`], before the population is examined.
    pub fn from_selector(
        entries: Vec<(T, f64)>,
        selector: &str,
        seed: Option<u64>,
    ) -> Result<Self, BuildError<T>> {
        let method = selector.parse::<Method>()?;
        match seed {
            Some(seed) => Self::with_seed(entries, method, seed),
            None => Self::new(entries, method),
        }
    }

    fn build(entries: Vec<(T, f64)>, method: Method, rng: StdRng) -> Result<Self, BuildError<T>> {
        let population_size = entries.len();
        let kind = match method {
            Method::TwoTier => Kind::TwoTier(TwoTierTable::new(entries)?),
            Method::Simple => Kind::Simple(SimpleSampler::new(entries)?),
        };
        Ok(Self {
            kind,
            rng,
            population_size,
        })
    }

    /// Draw one value.
    ///
    /// Never fails for a successfully constructed engine.
    pub fn draw(&mut self) -> T {
        match &self.kind {
            Kind::TwoTier(table) => table.draw_with_rng(&mut self.rng),
            Kind::Simple(sampler) => sampler.draw_with_rng(&mut self.rng),
        }
    }

    /// The method selected at construction.
    pub fn method(&self) -> Method {
        match &self.kind {
            Kind::TwoTier(_) => Method::TwoTier,
            Kind::Simple(_) => Method::Simple,
        }
    }

    /// Number of entries supplied at construction.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Number of distinct weight buckets (0 for the simple method, which
    /// builds no groups).
    pub fn tier_one_size(&self) -> usize {
        match &self.kind {
            Kind::TwoTier(table) => table.groups().len(),
            Kind::Simple(_) => 0,
        }
    }

    /// Length of the flat selection table (0 for the simple method).
    pub fn selection_table_len(&self) -> usize {
        match &self.kind {
            Kind::TwoTier(table) => table.slots().len(),
            Kind::Simple(_) => 0,
        }
    }

    /// The two-tier table, when that method is active.
    pub fn table(&self) -> Option<&TwoTierTable<T>> {
        match &self.kind {
            Kind::TwoTier(table) => Some(table),
            Kind::Simple(_) => None,
        }
    }
}
