// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line interface for the wichteln assignment engine.
//!
//! Three subcommands:
//! - `generate`: ingest a participant CSV, search for single-cycle
//!   assignments, sample one, and write the assignment file.
//! - `show`: print an assignment file as a table, receivers masked unless
//!   `--show-names` is given.
//! - `check`: validate a (possibly hand-edited) assignment file and exit
//!   nonzero on any violation.
//!
//! Mail dispatch is deliberately not here: a validated assignment file plus
//! the per-participant emails is the hand-off point to whatever sends the
//! notifications.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use wichteln::assignment::Assignment;
use wichteln::roster::{ConstraintModel, Roster};
use wichteln::search::{generate, GenerateOptions, SOLUTION_LIMIT};
use wichteln::store;
use wichteln::validate::validate;

#[derive(Parser)]
#[command(name = "wichteln", about = "Secret-santa assignments with exclusion constraints")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an assignment from a participant file.
    Generate {
        /// Participant CSV: name,exclusions,email per row.
        participants: PathBuf,

        /// Where to write the assignment CSV.
        #[arg(long)]
        output_file: PathBuf,

        /// Stop searching after this many solutions.
        #[arg(long, default_value_t = SOLUTION_LIMIT)]
        solution_limit: usize,

        /// Fixed RNG seed for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print an assignment file as a table.
    Show {
        /// Assignment CSV written by `generate`.
        assignments: PathBuf,

        /// Reveal the receiver column instead of masking it.
        #[arg(long)]
        show_names: bool,
    },

    /// Validate an assignment file against its own exclusion data.
    Check {
        /// Assignment CSV written by `generate`.
        assignments: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            participants,
            output_file,
            solution_limit,
            seed,
        } => run_generate(&participants, &output_file, solution_limit, seed),
        Command::Show {
            assignments,
            show_names,
        } => run_show(&assignments, show_names),
        Command::Check { assignments } => run_check(&assignments),
    }
}

fn run_generate(
    participants: &PathBuf,
    output_file: &PathBuf,
    solution_limit: usize,
    seed: Option<u64>,
) -> Result<()> {
    let records = store::read_records(participants)
        .with_context(|| format!("reading {}", participants.display()))?;
    let roster = Roster::new(records)?;

    let options = GenerateOptions {
        solution_limit,
        seed,
    };
    let generated = generate(&roster, &options)?;
    println!("Found {} solutions.", generated.solution_count);

    // Self-check before anything is written.
    validate(&generated.assignment, &roster.exclusion_map())
        .context("generated assignment failed validation")?;

    let mut output = roster.records().to_vec();
    for record in &mut output {
        record.receiver = generated
            .assignment
            .receiver_of(&record.name)
            .map(str::to_string);
    }

    println!("Writing to {}.", output_file.display());
    store::write_records(output_file, &output)
        .with_context(|| format!("writing {}", output_file.display()))?;
    Ok(())
}

fn run_show(assignments: &PathBuf, show_names: bool) -> Result<()> {
    let records = store::read_records(assignments)
        .with_context(|| format!("reading {}", assignments.display()))?;

    let header = ["id", "name", "constraints", "email", "wichtel"];
    let mut rows = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let receiver = match &record.receiver {
            Some(receiver) if show_names => receiver.clone(),
            Some(_) => "*****".to_string(),
            None => String::new(),
        };
        rows.push([
            (i + 1).to_string(),
            record.name.clone(),
            store::join_exclusions(&record.exclusions),
            record.email.clone(),
            receiver,
        ]);
    }

    print_table(&header, &rows);
    Ok(())
}

fn run_check(assignments: &PathBuf) -> Result<()> {
    let records = store::read_records(assignments)
        .with_context(|| format!("reading {}", assignments.display()))?;
    let roster = Roster::new(records)?;

    // Reloaded files get the same configuration checks as generation:
    // a hand-edited exclusion naming a non-participant must not be
    // treated as a constraint that can never match.
    ConstraintModel::build(&roster)?;

    let assignment = Assignment::from_pairs(
        roster
            .records()
            .iter()
            .filter_map(|r| r.receiver.clone().map(|receiver| (r.name.clone(), receiver))),
    );
    validate(&assignment, &roster.exclusion_map())?;
    println!("Assignment is valid.");
    Ok(())
}

/// Fixed-width table print, column widths fitted to the content.
fn print_table(header: &[&str; 5], rows: &[[String; 5]]) {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let line: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(cell, &width)| format!("{cell:width$}"))
        .collect();
    println!("{}", line.join("  "));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:width$}"))
            .collect();
        println!("{}", line.join("  "));
    }
}
