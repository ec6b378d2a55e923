// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The assignment value type.
//!
//! An [`Assignment`] is a total name → receiver-name map. The search core
//! only ever produces assignments that are single N-cycles, but the type
//! itself makes no such promise: assignments reloaded from disk go through
//! [`crate::validate`] before anyone acts on them.

use std::collections::BTreeMap;

use crate::roster::ConstraintModel;
use crate::search::CyclePermutation;

/// A total mapping from giver name to receiver name.
///
/// Immutable once produced; iteration order is sorted by giver name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    receivers: BTreeMap<String, String>,
}

impl Assignment {
    /// Materialize a permutation over model indices as a name → name map.
    pub fn from_permutation(model: &ConstraintModel, permutation: &CyclePermutation) -> Self {
        let receivers = (0..model.len())
            .map(|i| {
                (
                    model.name_of(i).to_string(),
                    model.name_of(permutation.successor_of(i)).to_string(),
                )
            })
            .collect();
        Self { receivers }
    }

    /// Build an assignment from explicit (giver, receiver) pairs, e.g. when
    /// reloading persisted records.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let receivers = pairs
            .into_iter()
            .map(|(giver, receiver)| (giver.into(), receiver.into()))
            .collect();
        Self { receivers }
    }

    /// The receiver assigned to `name`, if any.
    pub fn receiver_of(&self, name: &str) -> Option<&str> {
        self.receivers.get(name).map(String::as_str)
    }

    /// (giver, receiver) pairs sorted by giver name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.receivers
            .iter()
            .map(|(giver, receiver)| (giver.as_str(), receiver.as_str()))
    }

    /// Number of givers with a receiver.
    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }
}
