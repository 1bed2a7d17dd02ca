//! # Checksum validation
//!
//! Each data line ends with a modulo-10 checksum digit. Every preceding character
//! contributes to the sum: digits by their value, a minus sign by `1`, anything
//! else (letters, spaces, `.` and `+`) by `0`.
use crate::tle_errors::{ChecksumFailure, DataLine, TleError};

use super::lines::TleLines;

/// Modulo-10 checksum of `body`, the part of a data line before the checksum column.
pub fn compute_checksum(body: &str) -> u8 {
    let sum: u32 = body
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' => (b - b'0') as u32,
            b'-' => 1,
            _ => 0,
        })
        .sum();
    (sum % 10) as u8
}

/// Check a single data line against its trailing checksum digit.
fn check_line(lines: &TleLines<'_>, line: DataLine) -> Option<ChecksumFailure> {
    let text = lines.get(line);
    let (body, encoded) = text.split_at(text.len() - 1);
    let computed = compute_checksum(body);
    let encoded = encoded.chars().next().unwrap_or(' ');

    match encoded.to_digit(10) {
        Some(digit) if digit == computed as u32 => None,
        _ => Some(ChecksumFailure {
            line,
            computed,
            encoded,
        }),
    }
}

/// Validate both data lines independently.
///
/// Return
/// ------
/// * `Ok(())` when both checksums match
/// * [`TleError::ChecksumMismatch`] listing every failing line otherwise
pub fn validate_checksums(lines: &TleLines<'_>) -> Result<(), TleError> {
    let failures: Vec<ChecksumFailure> = [DataLine::Line1, DataLine::Line2]
        .into_iter()
        .filter_map(|line| check_line(lines, line))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(TleError::ChecksumMismatch(failures))
    }
}

#[cfg(test)]
mod checksum_test {
    use super::*;

    const L1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const L2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    fn lines<'a>(line1: &'a str, line2: &'a str) -> TleLines<'a> {
        TleLines {
            title: None,
            line1,
            line2,
        }
    }

    #[test]
    fn test_compute_checksum() {
        assert_eq!(compute_checksum(&L1[..68]), 7);
        assert_eq!(compute_checksum(&L2[..68]), 7);
        assert_eq!(compute_checksum("-"), 1);
        assert_eq!(compute_checksum("+. AZ"), 0);
        assert_eq!(compute_checksum("99"), 8);
    }

    #[test]
    fn test_valid_lines() {
        assert_eq!(validate_checksums(&lines(L1, L2)), Ok(()));
    }

    #[test]
    fn test_each_line_fails_independently() {
        let bad1 = L1.replacen("08264", "08265", 1);
        let err = validate_checksums(&lines(&bad1, L2)).unwrap_err();
        assert_eq!(
            err,
            TleError::ChecksumMismatch(vec![ChecksumFailure {
                line: DataLine::Line1,
                computed: 8,
                encoded: '7',
            }])
        );

        let bad2 = L2.replacen("51.6416", "51.6417", 1);
        let err = validate_checksums(&lines(L1, &bad2)).unwrap_err();
        assert_eq!(err.failed_checksum_lines(), vec![DataLine::Line2]);

        let err = validate_checksums(&lines(&bad1, &bad2)).unwrap_err();
        assert_eq!(
            err.failed_checksum_lines(),
            vec![DataLine::Line1, DataLine::Line2]
        );
    }

    #[test]
    fn test_minus_sign_counts_as_one() {
        // '-' → '+' drops one from the sum
        let flipped = L1.replacen("-.00002182", "+.00002182", 1);
        let err = validate_checksums(&lines(&flipped, L2)).unwrap_err();
        assert_eq!(
            err,
            TleError::ChecksumMismatch(vec![ChecksumFailure {
                line: DataLine::Line1,
                computed: 6,
                encoded: '7',
            }])
        );
    }

    #[test]
    fn test_non_digit_checksum_column() {
        let bad = format!("{}X", &L1[..68]);
        let err = validate_checksums(&lines(&bad, L2)).unwrap_err();
        assert_eq!(err.failed_checksum_lines(), vec![DataLine::Line1]);
    }
}
