// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The constraint model: node indices and the forbidden-edge matrix.
//!
//! Built once per run from a [`Roster`]. Participant names are sorted
//! ascending and indexed `0..N-1`, so the same roster always produces the
//! same index assignment regardless of ingestion order. Exclusions become a
//! boolean N×N matrix; name → index lookups go through a table built once,
//! never by scanning the name list.
//!
//! # Example
//!
//! ```
//! use wichteln::roster::{ConstraintModel, ParticipantRecord, Roster};
//!
//! let roster = Roster::new(vec![
//!     ParticipantRecord::new("Cleo", &[], "c@example.com"),
//!     ParticipantRecord::new("Anna", &["Cleo"], "a@example.com"),
//!     ParticipantRecord::new("Ben", &[], "b@example.com"),
//! ]).unwrap();
//!
//! let model = ConstraintModel::build(&roster).unwrap();
//! assert_eq!(model.names(), &["Anna", "Ben", "Cleo"]);
//! assert!(model.is_forbidden(0, 2));  // Anna → Cleo
//! assert!(!model.is_forbidden(2, 0)); // exclusions are directed
//! ```

use std::collections::HashMap;

use super::{ConfigError, Roster};

/// Read-only view of a roster as indexed nodes plus a forbidden-edge matrix.
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    /// Participant names sorted ascending; index in this list is the node id.
    names: Vec<String>,
    /// Name → node id lookup table.
    index: HashMap<String, usize>,
    /// Row-major N×N matrix; `forbidden[i * n + j]` means i may not give to j.
    forbidden: Vec<bool>,
}

impl ConstraintModel {
    /// Derive the model from a roster.
    ///
    /// Fails when there are fewer than two participants, when an exclusion
    /// names a non-participant, or when some participant excludes every
    /// other participant (immediately infeasible; reported eagerly with the
    /// participant's name rather than as an empty search result).
    pub fn build(roster: &Roster) -> Result<Self, ConfigError> {
        let count = roster.len();
        if count < 2 {
            return Err(ConfigError::TooFewParticipants { count });
        }

        let mut names: Vec<String> = roster.records().iter().map(|r| r.name.clone()).collect();
        names.sort();

        let index: HashMap<String, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        let n = names.len();
        let mut forbidden = vec![false; n * n];
        for record in roster.records() {
            let i = index[&record.name];
            for exclusion in &record.exclusions {
                let j = *index
                    .get(exclusion)
                    .ok_or_else(|| ConfigError::UnknownExclusion {
                        participant: record.name.clone(),
                        exclusion: exclusion.clone(),
                    })?;
                forbidden[i * n + j] = true;
            }
        }

        let model = Self {
            names,
            index,
            forbidden,
        };

        // Eager infeasibility check: a node with no allowed outgoing edge.
        for i in 0..n {
            let has_candidate = (0..n).any(|j| j != i && !model.is_forbidden(i, j));
            if !has_candidate {
                return Err(ConfigError::FullyExcluded {
                    name: model.names[i].clone(),
                });
            }
        }

        Ok(model)
    }

    /// Number of participants N.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Participant names in index order (sorted ascending).
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Node id of a participant name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of a node id.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn name_of(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Whether giver `i` is excluded from giving to receiver `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= N`.
    pub fn is_forbidden(&self, giver: usize, receiver: usize) -> bool {
        assert!(giver < self.len() && receiver < self.len());
        self.forbidden[giver * self.len() + receiver]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ParticipantRecord;

    fn roster(specs: &[(&str, &[&str])]) -> Roster {
        Roster::new(
            specs
                .iter()
                .map(|(name, exclusions)| {
                    ParticipantRecord::new(name, exclusions, "test@example.com")
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_names_sorted_and_indexed() {
        let model = ConstraintModel::build(&roster(&[
            ("Cleo", &[]),
            ("Anna", &[]),
            ("Ben", &[]),
        ]))
        .unwrap();

        assert_eq!(model.names(), &["Anna", "Ben", "Cleo"]);
        assert_eq!(model.index_of("Ben"), Some(1));
        assert_eq!(model.name_of(2), "Cleo");
        assert_eq!(model.index_of("Dora"), None);
    }

    #[test]
    fn test_forbidden_matrix_is_directed() {
        let model =
            ConstraintModel::build(&roster(&[("Anna", &["Ben"]), ("Ben", &[]), ("Cleo", &[])]))
                .unwrap();

        assert!(model.is_forbidden(0, 1));
        assert!(!model.is_forbidden(1, 0));
        assert!(!model.is_forbidden(0, 2));
    }

    #[test]
    fn test_unknown_exclusion_rejected() {
        let result = ConstraintModel::build(&roster(&[("Anna", &["Zoe"]), ("Ben", &[])]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::UnknownExclusion {
                participant: "Anna".to_string(),
                exclusion: "Zoe".to_string(),
            }
        );
    }

    #[test]
    fn test_too_few_participants() {
        let result = ConstraintModel::build(&roster(&[("Anna", &[])]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::TooFewParticipants { count: 1 }
        );
    }

    #[test]
    fn test_fully_excluded_detected_eagerly() {
        let result = ConstraintModel::build(&roster(&[
            ("Anna", &["Ben", "Cleo"]),
            ("Ben", &[]),
            ("Cleo", &[]),
        ]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::FullyExcluded {
                name: "Anna".to_string()
            }
        );
    }

    #[test]
    fn test_self_exclusion_is_redundant_not_an_error() {
        // Self-assignment is structurally impossible, so listing yourself
        // changes nothing, but the name must still resolve.
        let model =
            ConstraintModel::build(&roster(&[("Anna", &["Anna"]), ("Ben", &[])])).unwrap();
        assert!(model.is_forbidden(0, 0));
    }
}
