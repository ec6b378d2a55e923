// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CSV ingestion and persistence of participant records.
//!
//! One row per participant, no header, three to five fields:
//!
//! ```text
//! name,exclusion1;exclusion2,email[,receiver[,delivered]]
//! ```
//!
//! Exclusions are `;`-joined in one field (empty field = no exclusions).
//! The `receiver` field is carried as an opaque string: it may be
//! cleartext or ciphertext, and this module never inspects it. `delivered`
//! is `true`/`false` and belongs to the notification layer.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use thiserror::Error;

use crate::roster::ParticipantRecord;

/// Delimiter joining exclusion names within their single CSV field.
pub const EXCLUSION_DELIMITER: char = ';';

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row with fewer than the three mandatory fields
    /// (name, exclusions, email).
    #[error("record on line {line} has {fields} fields, expected at least 3")]
    MalformedRecord { line: u64, fields: usize },

    /// A fifth field that is neither `true` nor `false`.
    #[error("record on line {line} has invalid delivered flag {value:?}")]
    InvalidDeliveredFlag { line: u64, value: String },
}

/// Split an exclusions field into names, dropping empty entries (so both
/// `""` and trailing `;` are harmless).
pub fn parse_exclusions(field: &str) -> Vec<String> {
    field
        .split(EXCLUSION_DELIMITER)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join exclusion names back into their single field.
pub fn join_exclusions(exclusions: &[String]) -> String {
    exclusions.join(&EXCLUSION_DELIMITER.to_string())
}

/// Read participant records from any reader.
pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<ParticipantRecord>, StoreError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(record_from_row(&row)?);
    }
    Ok(records)
}

/// Read participant records from a file.
pub fn read_records(path: &Path) -> Result<Vec<ParticipantRecord>, StoreError> {
    read_records_from(File::open(path)?)
}

/// Write participant records to any writer, in the order given.
///
/// Fields that were absent on ingestion stay absent: a record without a
/// receiver writes a three-field row, one with a receiver but no delivered
/// flag writes four.
pub fn write_records_to<W: Write>(
    writer: W,
    records: &[ParticipantRecord],
) -> Result<(), StoreError> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for record in records {
        let mut row = vec![
            record.name.clone(),
            join_exclusions(&record.exclusions),
            record.email.clone(),
        ];
        if let Some(receiver) = &record.receiver {
            row.push(receiver.clone());
            if let Some(delivered) = record.delivered {
                row.push(delivered.to_string());
            }
        }
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write participant records to a file.
pub fn write_records(path: &Path, records: &[ParticipantRecord]) -> Result<(), StoreError> {
    write_records_to(File::create(path)?, records)
}

fn record_from_row(row: &StringRecord) -> Result<ParticipantRecord, StoreError> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    if row.len() < 3 {
        return Err(StoreError::MalformedRecord {
            line,
            fields: row.len(),
        });
    }

    let receiver = row
        .get(3)
        .filter(|field| !field.is_empty())
        .map(str::to_string);
    let delivered = match row.get(4).filter(|field| !field.is_empty()) {
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(value) => {
            return Err(StoreError::InvalidDeliveredFlag {
                line,
                value: value.to_string(),
            })
        }
        None => None,
    };

    Ok(ParticipantRecord {
        name: row[0].to_string(),
        exclusions: parse_exclusions(&row[1]),
        email: row[2].to_string(),
        receiver,
        delivered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exclusions_drops_empties() {
        assert_eq!(parse_exclusions(""), Vec::<String>::new());
        assert_eq!(parse_exclusions("Ben"), vec!["Ben"]);
        assert_eq!(parse_exclusions("Ben;Cleo;"), vec!["Ben", "Cleo"]);
    }

    #[test]
    fn test_read_three_and_four_field_rows() {
        let input = "Anna,Ben;Cleo,anna@example.com\nBen,,ben@example.com,Anna\n";
        let records = read_records_from(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Anna");
        assert_eq!(records[0].exclusions, vec!["Ben", "Cleo"]);
        assert_eq!(records[0].receiver, None);
        assert_eq!(records[1].exclusions, Vec::<String>::new());
        assert_eq!(records[1].receiver.as_deref(), Some("Anna"));
    }

    #[test]
    fn test_read_delivered_flag() {
        let input = "Anna,,anna@example.com,Ben,true\n";
        let records = read_records_from(input.as_bytes()).unwrap();
        assert_eq!(records[0].delivered, Some(true));
    }

    #[test]
    fn test_invalid_delivered_flag_rejected() {
        let input = "Anna,,anna@example.com,Ben,yes\n";
        let err = read_records_from(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidDeliveredFlag { line: 1, ref value } if value == "yes"
        ));
    }

    #[test]
    fn test_short_row_rejected_with_line_number() {
        let input = "Anna,,anna@example.com\nBen,ben@example.com\n";
        let err = read_records_from(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MalformedRecord { line: 2, fields: 2 }
        ));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let records = vec![
            ParticipantRecord {
                name: "Anna".to_string(),
                exclusions: vec!["Ben".to_string()],
                email: "anna@example.com".to_string(),
                receiver: Some("Cleo".to_string()),
                delivered: Some(false),
            },
            ParticipantRecord::new("Ben", &[], "ben@example.com"),
        ];

        let mut buffer = Vec::new();
        write_records_to(&mut buffer, &records).unwrap();
        let reloaded = read_records_from(buffer.as_slice()).unwrap();

        assert_eq!(reloaded, records);
    }

    #[test]
    fn test_receiver_field_is_opaque() {
        // Ciphertext-looking receivers pass through untouched.
        let input = "Anna,,anna@example.com,3q2+7w==\n";
        let records = read_records_from(input.as_bytes()).unwrap();
        assert_eq!(records[0].receiver.as_deref(), Some("3q2+7w=="));
    }
}
