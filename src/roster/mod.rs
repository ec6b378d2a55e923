// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Participant records and rosters.
//!
//! A [`Roster`] is the ordered collection of participants as ingested, with
//! name uniqueness enforced. Everything the search core needs is derived
//! from it once per run by [`ConstraintModel::build`]; the remaining fields
//! (email, receiver, delivered) are opaque to the core and only carried for
//! the persistence layer and downstream collaborators (mail dispatch).

pub mod constraints;

pub use constraints::ConstraintModel;

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors in the participant configuration, detected before any search runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two records share the same name. Names are the identity of a
    /// participant and the universe of valid receivers.
    #[error("duplicate participant name: {name}")]
    DuplicateName { name: String },

    /// An exclusion names someone who is not on the roster. Dangling
    /// exclusions are a configuration error, not silently ignored.
    #[error("{participant} excludes {exclusion}, who is not a participant")]
    UnknownExclusion {
        participant: String,
        exclusion: String,
    },

    /// A cycle needs at least two nodes (self-assignment is forbidden, so
    /// N=1 is trivially infeasible as well).
    #[error("need at least 2 participants, got {count}")]
    TooFewParticipants { count: usize },

    /// A participant excludes every other participant. Detected eagerly so
    /// the caller gets a named diagnostic instead of an empty search.
    #[error("{name} excludes every other participant; no assignment can exist")]
    FullyExcluded { name: String },
}

/// One participant as ingested from (and persisted to) a record store.
///
/// `receiver` and `delivered` are opaque to the search core: `receiver` may
/// be cleartext or ciphertext, and neither field is ever inspected by the
/// enumerator. They round-trip through [`crate::store`] untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRecord {
    /// Unique participant name.
    pub name: String,
    /// Names this participant may not be assigned to give to.
    pub exclusions: Vec<String>,
    /// Contact address, opaque to the core.
    pub email: String,
    /// Assigned receiver, if an assignment has been generated.
    pub receiver: Option<String>,
    /// Delivery flag owned by the notification layer.
    pub delivered: Option<bool>,
}

impl ParticipantRecord {
    /// Create a record with no assignment yet.
    pub fn new(name: &str, exclusions: &[&str], email: &str) -> Self {
        Self {
            name: name.to_string(),
            exclusions: exclusions.iter().map(|e| e.to_string()).collect(),
            email: email.to_string(),
            receiver: None,
            delivered: None,
        }
    }
}

/// Ordered collection of participants with unique names.
///
/// Ingestion order is preserved (it gives the 1-based display id used by the
/// CLI); the deterministic sorted order used by the search lives in
/// [`ConstraintModel`].
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<ParticipantRecord>,
}

impl Roster {
    /// Build a roster, rejecting duplicate names.
    pub fn new(records: Vec<ParticipantRecord>) -> Result<Self, ConfigError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    name: record.name.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ingestion order.
    pub fn records(&self) -> &[ParticipantRecord] {
        &self.records
    }

    /// Look up a record by participant name.
    pub fn get(&self, name: &str) -> Option<&ParticipantRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// The exclusion sets keyed by participant name, in the shape the
    /// validator consumes. Every participant appears, even with an empty set.
    pub fn exclusion_map(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.records
            .iter()
            .map(|r| {
                (
                    r.name.clone(),
                    r.exclusions.iter().cloned().collect::<BTreeSet<_>>(),
                )
            })
            .collect()
    }
}
