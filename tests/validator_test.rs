// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validator behavior on generated and hand-built assignments.

mod common;

use common::roster;
use wichteln::assignment::Assignment;
use wichteln::search::{generate, GenerateOptions};
use wichteln::validate::{validate, ValidationError};

#[test]
fn test_generate_then_validate_round_trips() {
    let rosters = [
        roster(&[("Anna", &[]), ("Ben", &[])]),
        roster(&[("Anna", &["Ben"]), ("Ben", &[]), ("Cleo", &[])]),
        roster(&[
            ("Anna", &["Ben"]),
            ("Ben", &["Anna"]),
            ("Cleo", &["Dora"]),
            ("Dora", &[]),
            ("Emil", &[]),
        ]),
    ];

    for (i, roster) in rosters.iter().enumerate() {
        let options = GenerateOptions {
            seed: Some(i as u64),
            ..GenerateOptions::default()
        };
        let generated = generate(roster, &options).unwrap();
        validate(&generated.assignment, &roster.exclusion_map())
            .unwrap_or_else(|err| panic!("roster {i} failed validation: {err}"));
    }
}

#[test]
fn test_double_two_cycle_flagged_as_invalid_cycle() {
    // A↔B plus C↔D is fixed-point free but not a single 4-cycle.
    let assignment = Assignment::from_pairs(vec![
        ("Anna", "Ben"),
        ("Ben", "Anna"),
        ("Cleo", "Dora"),
        ("Dora", "Cleo"),
    ]);
    let exclusions =
        roster(&[("Anna", &[]), ("Ben", &[]), ("Cleo", &[]), ("Dora", &[])]).exclusion_map();

    let err = validate(&assignment, &exclusions).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidCycle {
            members: vec!["Anna".to_string(), "Ben".to_string()]
        }
    );
}

#[test]
fn test_missing_assignment_names_the_participant() {
    let assignment = Assignment::from_pairs(vec![("Anna", "Ben"), ("Cleo", "Anna")]);
    let exclusions = roster(&[("Anna", &[]), ("Ben", &[]), ("Cleo", &[])]).exclusion_map();

    let err = validate(&assignment, &exclusions).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingAssignment {
            name: "Ben".to_string()
        }
    );
}

#[test]
fn test_constraint_violation_names_giver_and_receiver() {
    // A valid 3-cycle that routes Anna to her excluded receiver.
    let assignment =
        Assignment::from_pairs(vec![("Anna", "Ben"), ("Ben", "Cleo"), ("Cleo", "Anna")]);
    let exclusions = roster(&[("Anna", &["Ben"]), ("Ben", &[]), ("Cleo", &[])]).exclusion_map();

    let err = validate(&assignment, &exclusions).unwrap_err();
    assert_eq!(
        err,
        ValidationError::ConstraintViolation {
            giver: "Anna".to_string(),
            receiver: "Ben".to_string(),
        }
    );
}

#[test]
fn test_unknown_receiver_flagged() {
    // Hand-edited file with a typo in the receiver column.
    let assignment = Assignment::from_pairs(vec![("Anna", "Benn"), ("Ben", "Anna")]);
    let exclusions = roster(&[("Anna", &[]), ("Ben", &[])]).exclusion_map();

    let err = validate(&assignment, &exclusions).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownReceiver {
            giver: "Anna".to_string(),
            receiver: "Benn".to_string(),
        }
    );
}

#[test]
fn test_non_injective_mapping_is_invalid_cycle() {
    // Two givers pointing at the same receiver cannot be a permutation.
    let assignment =
        Assignment::from_pairs(vec![("Anna", "Ben"), ("Ben", "Cleo"), ("Cleo", "Ben")]);
    let exclusions = roster(&[("Anna", &[]), ("Ben", &[]), ("Cleo", &[])]).exclusion_map();

    assert!(matches!(
        validate(&assignment, &exclusions).unwrap_err(),
        ValidationError::InvalidCycle { .. }
    ));
}

#[test]
fn test_cycle_check_runs_before_constraint_check() {
    // Both invariants broken: the cycle violation is reported first.
    let assignment = Assignment::from_pairs(vec![("Anna", "Ben"), ("Ben", "Anna"), ("Cleo", "Cleo")]);
    let exclusions = roster(&[("Anna", &["Ben"]), ("Ben", &[]), ("Cleo", &[])]).exclusion_map();

    assert!(matches!(
        validate(&assignment, &exclusions).unwrap_err(),
        ValidationError::InvalidCycle { .. }
    ));
}
