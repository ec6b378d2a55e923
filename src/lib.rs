// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Secret-santa ("Wichteln") assignment engine.
//!
//! Given a roster of participants and a set of pairwise exclusions (e.g.
//! spouses may not draw each other), the engine assigns each participant
//! exactly one other participant to give a gift to, such that the assignment
//! forms a **single cycle** over all participants (no self-assignments, no
//! disjoint sub-cycles) and is sampled uniformly at random from the
//! collected valid assignments.
//!
//! # Architecture
//!
//! The pipeline runs in four stages, leaves first:
//!
//! 1. **Constraint model** ([`roster::ConstraintModel`]): participants become
//!    node indices (names sorted for determinism) and exclusions become a
//!    forbidden-edge matrix. Configuration errors (dangling exclusion names,
//!    too few participants, a participant excluding everyone) are rejected
//!    here, before any search runs.
//! 2. **Cycle enumerator** ([`search::Enumerator`]): depth-first backtracking
//!    search that grows a single chain `0 → π(0) → π(π(0)) → …` through
//!    unused, non-forbidden nodes, closing back to node 0 on the final link.
//!    Every emitted permutation is a single N-cycle by construction.
//!    Enumeration is capped at a solution limit (default
//!    [`search::SOLUTION_LIMIT`]) to bound work on loosely constrained
//!    inputs.
//! 3. **Uniform sampler** ([`search::sample`]): one uniform draw over the
//!    collected solutions. Because enumeration may have been truncated at
//!    the limit, the draw is uniform over the DFS prefix, not necessarily
//!    over the full solution space.
//! 4. **Validator** ([`validate::validate`]): re-checks the no-self,
//!    single-N-cycle, and exclusion invariants on any complete assignment,
//!    including ones reloaded from disk that may have been hand-edited.
//!
//! The search core is pure and synchronous: no I/O, no logging, no global
//! state. CSV ingestion/persistence lives in [`store`] and the CLI in the
//! `wichteln` binary; both sit strictly outside the search core.
//!
//! # Example
//!
//! ```
//! use wichteln::roster::{ParticipantRecord, Roster};
//! use wichteln::search::{generate, GenerateOptions};
//! use wichteln::validate::validate;
//!
//! let roster = Roster::new(vec![
//!     ParticipantRecord::new("Anna", &["Ben"], "anna@example.com"),
//!     ParticipantRecord::new("Ben", &[], "ben@example.com"),
//!     ParticipantRecord::new("Cleo", &[], "cleo@example.com"),
//! ]).unwrap();
//!
//! let options = GenerateOptions { seed: Some(7), ..GenerateOptions::default() };
//! let generated = generate(&roster, &options).unwrap();
//!
//! // Three participants admit two 3-cycles; Anna excluding Ben kills the
//! // one where Anna gives to Ben, leaving exactly one valid assignment.
//! assert_eq!(generated.solution_count, 1);
//! assert_eq!(generated.assignment.receiver_of("Anna"), Some("Cleo"));
//! validate(&generated.assignment, &roster.exclusion_map()).unwrap();
//! ```

pub mod assignment;
pub mod roster;
pub mod search;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use assignment::Assignment;
pub use roster::{ConfigError, ConstraintModel, ParticipantRecord, Roster};
pub use search::{
    generate, CyclePermutation, Enumerator, GenerateError, GenerateOptions, Generated,
    SearchError, SOLUTION_LIMIT,
};
pub use validate::{validate, ValidationError};
