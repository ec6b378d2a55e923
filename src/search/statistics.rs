// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics.
//!
//! Counters are stored in a fixed array indexed by [`Counters`], incremented
//! by the enumerator as it walks the search tree.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Valid single-cycle permutations collected.
    Solutions,
    /// Chain extensions attempted (including closing links).
    LinksTried,
    /// Positions with no viable continuation.
    DeadEnds,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
