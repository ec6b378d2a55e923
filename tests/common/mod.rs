// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use wichteln::roster::{ConstraintModel, ParticipantRecord, Roster};

/// Build a roster from `(name, exclusions)` pairs; emails are synthesized.
pub fn roster(specs: &[(&str, &[&str])]) -> Roster {
    Roster::new(
        specs
            .iter()
            .map(|(name, exclusions)| {
                let email = format!("{}@example.com", name.to_lowercase());
                ParticipantRecord::new(name, exclusions, &email)
            })
            .collect(),
    )
    .expect("test roster must be well-formed")
}

/// Build the constraint model for `n` unconstrained participants named
/// "p00", "p01", … (names sort in index order).
pub fn unconstrained_model(n: usize) -> ConstraintModel {
    let records = (0..n)
        .map(|i| {
            let name = format!("p{i:02}");
            ParticipantRecord::new(&name, &[], "test@example.com")
        })
        .collect();
    let roster = Roster::new(records).expect("generated names are unique");
    ConstraintModel::build(&roster).expect("no exclusions to go wrong")
}
