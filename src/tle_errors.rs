use std::fmt;

use thiserror::Error;

use crate::tle::fields::TleField;

/// One of the two fixed-format data lines of a TLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataLine {
    Line1,
    Line2,
}

impl fmt::Display for DataLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLine::Line1 => write!(f, "line 1"),
            DataLine::Line2 => write!(f, "line 2"),
        }
    }
}

/// Checksum failure of a single data line.
///
/// `encoded` is the character found in the checksum column; it may not be a digit at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumFailure {
    pub line: DataLine,
    pub computed: u8,
    pub encoded: char,
}

impl fmt::Display for ChecksumFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (computed {}, encoded '{}')",
            self.line, self.computed, self.encoded
        )
    }
}

fn join_failures(failures: &[ChecksumFailure]) -> String {
    failures
        .iter()
        .map(ChecksumFailure::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TleError {
    #[error("Expected 2 or 3 lines in a TLE, found {0}")]
    LineCount(usize),

    #[error("Data {line} is too short: {len} characters, at least 69 expected")]
    LineTooShort { line: DataLine, len: usize },

    #[error("Data {0} contains non-ASCII characters")]
    NonAsciiLine(DataLine),

    #[error("Satellite number mismatch: {line1:?} on line 1, {line2:?} on line 2")]
    SatelliteNumberMismatch { line1: String, line2: String },

    #[error("Checksum mismatch on {}", join_failures(.0))]
    ChecksumMismatch(Vec<ChecksumFailure>),

    #[error("Unable to decode field {field}: {raw:?}")]
    FieldDecode { field: TleField, raw: String },

    /// Line of a TLE set (1-based) that belongs to no element set.
    #[error("Line {line} of the TLE set belongs to no element set")]
    StrayLine { line: usize },
}

impl TleError {
    pub(crate) fn field(field: TleField, raw: &str) -> Self {
        TleError::FieldDecode {
            field,
            raw: raw.to_string(),
        }
    }

    /// Data lines whose checksum failed, empty for any other kind of error.
    pub fn failed_checksum_lines(&self) -> Vec<DataLine> {
        match self {
            TleError::ChecksumMismatch(failures) => failures.iter().map(|f| f.line).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tle_errors_test {
    use super::*;

    #[test]
    fn test_checksum_message_lists_every_line() {
        let err = TleError::ChecksumMismatch(vec![
            ChecksumFailure {
                line: DataLine::Line1,
                computed: 3,
                encoded: '7',
            },
            ChecksumFailure {
                line: DataLine::Line2,
                computed: 1,
                encoded: 'x',
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Checksum mismatch on line 1 (computed 3, encoded '7'), line 2 (computed 1, encoded 'x')"
        );
        assert_eq!(
            err.failed_checksum_lines(),
            vec![DataLine::Line1, DataLine::Line2]
        );
    }

    #[test]
    fn test_field_decode_message() {
        let err = TleError::field(TleField::Inclination, " 51.6x16");
        assert_eq!(
            err.to_string(),
            "Unable to decode field inclination: \" 51.6x16\""
        );
        assert!(err.failed_checksum_lines().is_empty());
    }

    #[test]
    fn test_stray_line_message() {
        assert_eq!(
            TleError::StrayLine { line: 7 }.to_string(),
            "Line 7 of the TLE set belongs to no element set"
        );
    }
}
