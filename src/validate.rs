// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Assignment validation.
//!
//! Re-checks the invariants the enumerator guarantees by construction:
//! every participant has a receiver, the receivers form exactly one cycle
//! of length N, and no exclusion is violated. Run right after generation as
//! a self-check, and again whenever a persisted assignment is reloaded:
//! persisted files may have been hand-edited or corrupted, so nothing about
//! the stored mapping is trusted.
//!
//! The participant universe is the key set of the exclusion map: every
//! participant must have an entry there, even an empty one (see
//! [`crate::roster::Roster::exclusion_map`]).

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::assignment::Assignment;

/// A violated assignment invariant, carrying the offending names.
///
/// The first violation found wins; checks run in the order of the variants
/// below.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A participant has no receiver at all.
    #[error("no receiver assigned for {name}")]
    MissingAssignment { name: String },

    /// A receiver name that is not itself a participant, e.g. a typo from
    /// hand-editing the assignment file.
    #[error("{giver} is assigned to {receiver}, who is not a participant")]
    UnknownReceiver { giver: String, receiver: String },

    /// Following the mapping from the first participant did not close a
    /// single cycle over everyone. `members` lists the participants reached,
    /// in walk order, before the walk closed early or repeated a node.
    #[error("assignment is not a single cycle over all participants; walk covered {}: {}", members.len(), members.join(" -> "))]
    InvalidCycle { members: Vec<String> },

    /// A giver was assigned someone from their exclusion set.
    #[error("assignment of {giver} to {receiver} violates an exclusion")]
    ConstraintViolation { giver: String, receiver: String },
}

/// Verify that `assignment` is a complete, single-cycle, exclusion-respecting
/// assignment over the participants named by `exclusions`.
///
/// Returns the first violation found. The receiver fields must already be
/// cleartext names; any decryption happens before this is called.
pub fn validate(
    assignment: &Assignment,
    exclusions: &BTreeMap<String, BTreeSet<String>>,
) -> Result<(), ValidationError> {
    let Some(start) = exclusions.keys().next() else {
        return Ok(());
    };

    // 1. Everyone has a receiver, and every receiver is a participant.
    let mut receivers: BTreeMap<&str, &str> = BTreeMap::new();
    for giver in exclusions.keys() {
        let receiver = assignment
            .receiver_of(giver)
            .ok_or_else(|| ValidationError::MissingAssignment {
                name: giver.clone(),
            })?;
        if !exclusions.contains_key(receiver) {
            return Err(ValidationError::UnknownReceiver {
                giver: giver.clone(),
                receiver: receiver.to_string(),
            });
        }
        // Self-assignment is forbidden unconditionally. For N >= 2 the walk
        // below would catch it as a short cycle, but at N=1 the walk closes
        // immediately and would pass a self-loop.
        if receiver == giver.as_str() {
            return Err(ValidationError::InvalidCycle {
                members: vec![giver.clone()],
            });
        }
        receivers.insert(giver.as_str(), receiver);
    }

    // 2. Walking receiver-of-receiver from any node must visit all N
    //    participants exactly once before returning to the start. A short
    //    return or a repeat means disjoint sub-cycles or a non-injective
    //    map.
    let mut members = vec![start.clone()];
    let mut visited: BTreeSet<&str> = BTreeSet::from([start.as_str()]);
    let mut current = start.as_str();
    loop {
        let next = receivers[current];
        if next == start.as_str() {
            break;
        }
        if !visited.insert(next) {
            return Err(ValidationError::InvalidCycle { members });
        }
        members.push(next.to_string());
        current = next;
    }
    if members.len() != exclusions.len() {
        return Err(ValidationError::InvalidCycle { members });
    }

    // 3. No excluded pair.
    for (giver, excluded) in exclusions {
        let receiver = receivers[giver.as_str()];
        if excluded.contains(receiver) {
            return Err(ValidationError::ConstraintViolation {
                giver: giver.clone(),
                receiver: receiver.to_string(),
            });
        }
    }

    Ok(())
}
