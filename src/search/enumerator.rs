// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first enumeration of single-cycle permutations.
//!
//! The enumerator builds each permutation as one chain starting at node 0:
//! `0 → π(0) → π(π(0)) → …`, choosing an unused, non-forbidden node for each
//! link and closing the final link back to node 0. A permutation built this
//! way is a single N-cycle by construction, so no post-hoc cycle check is
//! needed, and no "random permutation, reject if not one cycle" lottery,
//! which degenerates badly for large N where single N-cycles are a vanishing
//! fraction of the fixed-point-free permutations.
//!
//! Search state is just the chain-so-far, a used-node bitset, and the
//! accumulated solutions; backtracking pops the chain and clears the bit.
//! [`Statistics`] counters record links tried, dead ends, and solutions.

use crate::roster::ConstraintModel;
use crate::search::statistics::{Counters, Statistics};

/// The chain anchor. Every chain starts and closes at node 0.
const START: usize = 0;

/// A permutation of `0..N` whose cycle decomposition is one N-cycle.
///
/// Only the enumerator constructs these, which is what makes the invariant
/// hold: `successor_of` chains through every node exactly once before
/// returning to the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePermutation {
    successor: Vec<usize>,
}

impl CyclePermutation {
    /// Build from a chain visiting every node once, closing back to
    /// `chain[0]`.
    pub(crate) fn from_chain(chain: &[usize]) -> Self {
        let mut successor = vec![0; chain.len()];
        for window in chain.windows(2) {
            successor[window[0]] = window[1];
        }
        successor[chain[chain.len() - 1]] = chain[0];
        Self { successor }
    }

    /// Number of nodes N.
    pub fn len(&self) -> usize {
        self.successor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successor.is_empty()
    }

    /// π(i): the node that `i` gives to.
    pub fn successor_of(&self, i: usize) -> usize {
        self.successor[i]
    }

    /// The successor array π indexed by node.
    pub fn successors(&self) -> &[usize] {
        &self.successor
    }

    /// Replay the cycle order starting at node 0.
    pub fn chain(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len());
        let mut current = START;
        for _ in 0..self.len() {
            order.push(current);
            current = self.successor[current];
        }
        order
    }
}

/// Backtracking enumerator over one [`ConstraintModel`].
///
/// Reusable: each call to [`enumerate`](Self::enumerate) starts a fresh
/// search but accumulates into the same [`Statistics`].
#[derive(Debug)]
pub struct Enumerator<'a> {
    model: &'a ConstraintModel,

    /// Nodes in chain order; `chain[0] == START` for the whole search.
    chain: Vec<usize>,

    /// Which nodes are already linked into the chain.
    used: Vec<bool>,

    /// Solutions collected so far, in DFS order.
    solutions: Vec<CyclePermutation>,

    statistics: Statistics,
}

impl<'a> Enumerator<'a> {
    pub fn new(model: &'a ConstraintModel) -> Self {
        Self {
            model,
            chain: Vec::with_capacity(model.len()),
            used: vec![false; model.len()],
            solutions: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Collect valid single-cycle permutations, halting as soon as `limit`
    /// have been found.
    ///
    /// Returns the solutions in DFS order, a prefix of the full solution
    /// set whenever the limit fires. An empty result means the constraints
    /// are infeasible; the caller decides how to report that.
    pub fn enumerate(&mut self, limit: usize) -> Vec<CyclePermutation> {
        self.chain.clear();
        self.used.fill(false);
        self.solutions.clear();

        if limit == 0 || self.model.len() < 2 {
            return Vec::new();
        }

        self.chain.push(START);
        self.used[START] = true;
        self.extend(START, limit);
        self.chain.pop();
        self.used[START] = false;

        std::mem::take(&mut self.solutions)
    }

    /// Counters accumulated across all `enumerate` calls on this value.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Try every continuation of the chain from `current`. Returns true when
    /// the solution limit has been reached and the search should unwind.
    fn extend(&mut self, current: usize, limit: usize) -> bool {
        let n = self.model.len();

        if self.chain.len() == n {
            // Closing link: back to the start, subject to the forbidden
            // matrix like any other link.
            self.statistics.increment(Counters::LinksTried);
            if self.model.is_forbidden(current, START) {
                self.statistics.increment(Counters::DeadEnds);
                return false;
            }
            self.solutions.push(CyclePermutation::from_chain(&self.chain));
            self.statistics.increment(Counters::Solutions);
            return self.solutions.len() >= limit;
        }

        let mut extended = false;
        for next in 1..n {
            if self.used[next] || self.model.is_forbidden(current, next) {
                continue;
            }
            extended = true;
            self.statistics.increment(Counters::LinksTried);

            self.chain.push(next);
            self.used[next] = true;
            let hit_limit = self.extend(next, limit);
            self.chain.pop();
            self.used[next] = false;

            if hit_limit {
                return true;
            }
        }

        if !extended {
            self.statistics.increment(Counters::DeadEnds);
        }
        false
    }
}
