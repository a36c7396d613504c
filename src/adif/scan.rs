use std::io::BufRead;

use crate::rules::narration_rules;

use super::render::{ParseError, render_record};

/// Line prefix that marks a QSO record.
pub const RECORD_MARKER: &str = "<QSO_DATE:";

/// Failure while selecting records from the input stream.
#[derive(Debug)]
pub enum ScanError {
    /// The underlying stream could not be read.
    Io(std::io::Error),
    /// A qualifying line carried a malformed recognized field.
    Parse(ParseError),
}

impl From<std::io::Error> for ScanError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ParseError> for ScanError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

/// Reads the stream line by line and returns the QSO records in stream order.
///
/// A line qualifies iff it starts with [`RECORD_MARKER`]. Qualifying lines
/// are rendered once against the narration table to verify well-formedness
/// (the output is discarded); the first malformed record aborts the scan.
/// Non-qualifying lines are dropped silently. Zero records is a valid result.
pub fn scan_records<R: BufRead>(reader: R) -> Result<Vec<String>, ScanError> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !line.starts_with(RECORD_MARKER) {
            continue;
        }

        render_record(&line, narration_rules())?;
        records.push(line);
    }

    Ok(records)
}
