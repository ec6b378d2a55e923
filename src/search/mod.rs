// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded single-cycle search: enumerate, then sample.
//!
//! The two phases are deliberately kept as separate public operations.
//! [`Enumerator::enumerate`] collects valid permutations (up to a cap) and
//! [`sample`] draws one uniformly; [`generate`] is the convenience pipeline
//! gluing them together behind a roster. Callers that need the full
//! enumeration (reporting, testing, counting) call the phases directly
//! and skip sampling.
//!
//! # Truncation
//!
//! Enumeration halts as soon as [`SOLUTION_LIMIT`] (or the caller's limit)
//! solutions have been collected, returning the prefix found in DFS order.
//! This bounds work on large or loosely constrained rosters at the cost of
//! enumeration completeness: for such inputs the sampler draws uniformly
//! from the collected prefix, which is not a perfect proxy for the full
//! solution space. That approximation is intentional and worth knowing
//! about when N is large and exclusions are few.

pub mod enumerator;
pub mod sampler;
pub mod statistics;

pub use enumerator::{CyclePermutation, Enumerator};
pub use sampler::sample;
pub use statistics::{Counters, Statistics};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::assignment::Assignment;
use crate::roster::{ConfigError, ConstraintModel, Roster};

/// Default cap on the number of solutions collected before the search halts.
///
/// Inherited from the original tool; changing it changes which DFS prefix
/// the sampler draws from.
pub const SOLUTION_LIMIT: usize = 1000;

/// Errors from the search phases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search exhausted without finding any valid assignment
    /// (0 solutions). The constraint set is infeasible.
    #[error("no valid assignment exists: search found 0 solutions")]
    Infeasible,

    /// The sampler was handed an empty solution set. Unreachable through
    /// [`generate`], which maps an empty enumeration to `Infeasible` first,
    /// but re-checked defensively for direct callers.
    #[error("cannot sample from an empty solution set")]
    EmptyInput,
}

/// Errors from the [`generate`] pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Options for [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Cap on collected solutions; see [`SOLUTION_LIMIT`].
    pub solution_limit: usize,
    /// Fixed RNG seed for reproducible draws. `None` seeds from the OS.
    /// The draw carries no security requirement.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            solution_limit: SOLUTION_LIMIT,
            seed: None,
        }
    }
}

/// A generated assignment plus how many solutions the search collected.
#[derive(Debug, Clone)]
pub struct Generated {
    pub assignment: Assignment,
    /// Number of solutions collected (capped at the solution limit).
    pub solution_count: usize,
}

/// Build the constraint model, enumerate single-cycle permutations, and
/// sample one uniformly.
///
/// A participant who excludes every possible receiver is reported as
/// [`SearchError::Infeasible`], matching what an exhausted search would
/// conclude; the eager check in [`ConstraintModel::build`] only saves the
/// walk through the search space.
pub fn generate(roster: &Roster, options: &GenerateOptions) -> Result<Generated, GenerateError> {
    let model = match ConstraintModel::build(roster) {
        Ok(model) => model,
        Err(ConfigError::FullyExcluded { .. }) => return Err(SearchError::Infeasible.into()),
        Err(err) => return Err(err.into()),
    };

    let mut enumerator = Enumerator::new(&model);
    let solutions = enumerator.enumerate(options.solution_limit);
    if solutions.is_empty() {
        return Err(SearchError::Infeasible.into());
    }

    let permutation = match options.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            sample(&solutions, &mut rng)?.clone()
        }
        None => {
            let mut rng = rand::rng();
            sample(&solutions, &mut rng)?.clone()
        }
    };

    Ok(Generated {
        assignment: Assignment::from_permutation(&model, &permutation),
        solution_count: solutions.len(),
    })
}
