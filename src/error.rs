//! Construction-time error taxonomy.
//!
//! Every failure a sampler can report happens while it is being built;
//! draws on a successfully constructed sampler are total. Variants carry
//! the position and value context a caller needs to fix the input.

use std::fmt;

/// Errors detected while building a sampler from a population.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError<T> {
    /// No entries were supplied.
    EmptyPopulation,
    /// Two entries share the same value (both positions reported).
    DuplicateValue { value: T, first: usize, second: usize },
    /// A probability is not inside the open interval (0, 1), or is not finite.
    InvalidProbability { position: usize, probability: f64 },
    /// A draw-method selector string was not recognized.
    UnknownMethod { name: String },
}

impl<T: fmt::Debug> fmt::Display for BuildError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyPopulation => write!(f, "population is empty"),
            BuildError::DuplicateValue {
                value,
                first,
                second,
            } => write!(
                f,
                "value {value:?} in position {second} is a duplicate of position {first}"
            ),
            BuildError::InvalidProbability {
                position,
                probability,
            } => write!(
                f,
                "probability {probability} in position {position} is outside (0, 1)"
            ),
            BuildError::UnknownMethod { name } => write!(
                f,
                "unknown draw method {name:?} (expected \"two-tier\" or \"simple\")"
            ),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for BuildError<T> {}
