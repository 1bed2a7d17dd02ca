#![allow(dead_code)]

use std::ops::Range;

use tle_parser::tle::checksum::compute_checksum;

pub const ISS_NAME: &str = "ISS (ZARYA)";
pub const ISS_LINE1: &str =
    "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
pub const ISS_LINE2: &str =
    "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

pub const VANGUARD_LINE1: &str =
    "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
pub const VANGUARD_LINE2: &str =
    "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";

pub const DELTA_DEB_LINE1: &str =
    "1 06251U 62025E   06176.82412014  .00008885  00000-0  12808-3 0  3985";
pub const DELTA_DEB_LINE2: &str =
    "2 06251  58.0579  54.0425 0030035 139.1568 221.1854 15.56387291  6774";

pub fn iss_tle() -> String {
    format!("{ISS_NAME}\n{ISS_LINE1}\n{ISS_LINE2}")
}

/// Recompute the trailing checksum digit of a data line.
pub fn fix_checksum(line: &str) -> String {
    let body = &line[..68];
    format!("{body}{}", compute_checksum(body))
}

/// Replace `columns` of `line` with `value` (right aligned) and fix the checksum.
pub fn set_columns(line: &str, columns: Range<usize>, value: &str) -> String {
    let width = columns.len();
    let edited = format!(
        "{}{:>width$}{}",
        &line[..columns.start],
        value,
        &line[columns.end..]
    );
    fix_checksum(&edited)
}

/// Change the checksum contribution of the character at `index`.
pub fn mutate_at(line: &str, index: usize) -> String {
    let c = line.as_bytes()[index] as char;
    let replacement = match c.to_digit(10) {
        Some(d) => char::from_digit((d + 1) % 10, 10).unwrap(),
        None if c == '-' => '+',
        None => '1',
    };
    let mut mutated = line.to_string();
    mutated.replace_range(index..index + 1, &replacement.to_string());
    mutated
}
