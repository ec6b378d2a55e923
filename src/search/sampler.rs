// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Uniform sampling over an enumerated solution set.
//!
//! One uniform index draw from `[0, count)`. The RNG carries no security
//! requirement: the draw only picks which valid assignment is used, and
//! any encryption of the persisted result is someone else's concern.
//! Uniformity is over the *collected* set: if enumeration was truncated at
//! the solution limit, the draw is uniform over that DFS prefix only.

use rand::Rng;

use crate::search::{CyclePermutation, SearchError};

/// Draw one permutation uniformly at random from `solutions`.
///
/// Fails with [`SearchError::EmptyInput`] on an empty slice. The
/// [`generate`](crate::search::generate) pipeline reports an empty
/// enumeration as `Infeasible` before ever calling this, so the check here
/// is a defensive re-check for direct callers.
pub fn sample<'a, R: Rng>(
    solutions: &'a [CyclePermutation],
    rng: &mut R,
) -> Result<&'a CyclePermutation, SearchError> {
    if solutions.is_empty() {
        return Err(SearchError::EmptyInput);
    }
    let index = rng.random_range(0..solutions.len());
    Ok(&solutions[index])
}
