//! # Fixed-column field decoding
//!
//! Every TLE field lives at a fixed column range of one of the two data lines.
//! [`TleField`] names those fields and knows their location; the `decode_*`
//! functions extract the slice, trim it and convert it to its typed value.
//!
//! ## Layout (0-indexed, end exclusive)
//! -----------------
//! Line 1:
//! * `2..7` satellite number, `7..8` classification
//! * `9..11` launch year, `11..14` launch number, `14..17` launch piece
//! * `18..20` epoch year, `20..32` epoch day
//! * `33..43` first derivative of the mean motion
//! * `44..52` second derivative of the mean motion (compact exponential)
//! * `53..61` BSTAR drag term (compact exponential)
//! * `62..63` ephemeris type, `64..68` element set number
//!
//! Line 2:
//! * `2..7` satellite number
//! * `8..16` inclination, `17..25` right ascension of the ascending node
//! * `26..33` eccentricity (implicit leading `0.`)
//! * `34..42` argument of perigee, `43..51` mean anomaly
//! * `52..63` mean motion, `63..68` revolution number at epoch
//!
//! ## Compact exponential notation
//! -----------------
//! `mean_motion_dot_dot` and `bstar` are written as `±DDDDD±E`, meaning `±0.DDDDD × 10^±E`.
//! A blank sign stands for `+`.
use std::{fmt, ops::Range, str::FromStr};

use nom::{
    character::complete::{digit1, one_of, satisfy},
    combinator::{all_consuming, opt},
    IResult, Parser,
};

use crate::{
    constants::{Radian, RADEG},
    time::epoch_year_from_two_digits,
    tle_errors::{DataLine, TleError},
};

use super::{lines::TleLines, Classification, InternationalDesignator};

/// Named fields of a TLE data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TleField {
    SatelliteNumber,
    Classification,
    LaunchYear,
    LaunchNumber,
    LaunchPiece,
    EpochYear,
    EpochDay,
    MeanMotionDot,
    MeanMotionDotDot,
    Bstar,
    EphemerisType,
    ElementNumber,
    Inclination,
    RightAscensionAscendingNode,
    Eccentricity,
    ArgumentOfPerigee,
    MeanAnomaly,
    MeanMotion,
    RevolutionNumber,
}

impl TleField {
    pub fn name(&self) -> &'static str {
        use TleField::*;
        match self {
            SatelliteNumber => "satellite_number",
            Classification => "classification",
            LaunchYear => "launch_year",
            LaunchNumber => "launch_number",
            LaunchPiece => "launch_piece",
            EpochYear => "epoch_year",
            EpochDay => "epoch_day",
            MeanMotionDot => "mean_motion_dot",
            MeanMotionDotDot => "mean_motion_dot_dot",
            Bstar => "bstar",
            EphemerisType => "ephemeris_type",
            ElementNumber => "element_number",
            Inclination => "inclination",
            RightAscensionAscendingNode => "right_ascension_ascending_node",
            Eccentricity => "eccentricity",
            ArgumentOfPerigee => "argument_of_perigee",
            MeanAnomaly => "mean_anomaly",
            MeanMotion => "mean_motion",
            RevolutionNumber => "revolution_number",
        }
    }

    /// Data line holding the field. The satellite number is read from line 1 here;
    /// its copy on line 2 is checked by [`decode_satellite_number`].
    pub fn line(&self) -> DataLine {
        use TleField::*;
        match self {
            Inclination | RightAscensionAscendingNode | Eccentricity | ArgumentOfPerigee
            | MeanAnomaly | MeanMotion | RevolutionNumber => DataLine::Line2,
            _ => DataLine::Line1,
        }
    }

    /// Column range of the field, 0-indexed and end exclusive.
    pub fn columns(&self) -> Range<usize> {
        use TleField::*;
        match self {
            SatelliteNumber => 2..7,
            Classification => 7..8,
            LaunchYear => 9..11,
            LaunchNumber => 11..14,
            LaunchPiece => 14..17,
            EpochYear => 18..20,
            EpochDay => 20..32,
            MeanMotionDot => 33..43,
            MeanMotionDotDot => 44..52,
            Bstar => 53..61,
            EphemerisType => 62..63,
            ElementNumber => 64..68,
            Inclination => 8..16,
            RightAscensionAscendingNode => 17..25,
            Eccentricity => 26..33,
            ArgumentOfPerigee => 34..42,
            MeanAnomaly => 43..51,
            MeanMotion => 52..63,
            RevolutionNumber => 63..68,
        }
    }

    /// Untrimmed text of the field.
    pub fn raw<'a>(&self, lines: &TleLines<'a>) -> &'a str {
        &lines.get(self.line())[self.columns()]
    }
}

impl fmt::Display for TleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trimmed text of a field.
pub fn decode_str<'a>(lines: &TleLines<'a>, field: TleField) -> &'a str {
    field.raw(lines).trim()
}

/// Decimal number, rejecting blanks and non-finite values.
pub fn decode_f64(lines: &TleLines<'_>, field: TleField) -> Result<f64, TleError> {
    let raw = field.raw(lines);
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TleError::field(field, raw))
}

pub fn decode_int<T: FromStr>(lines: &TleLines<'_>, field: TleField) -> Result<T, TleError> {
    let raw = field.raw(lines);
    raw.trim()
        .parse::<T>()
        .map_err(|_| TleError::field(field, raw))
}

/// Angle written in decimal degrees, returned in radians.
pub fn decode_angle(lines: &TleLines<'_>, field: TleField) -> Result<Radian, TleError> {
    Ok(decode_f64(lines, field)? * RADEG)
}

/// Eccentricity, written without its leading `0.`.
pub fn decode_eccentricity(lines: &TleLines<'_>) -> Result<f64, TleError> {
    let field = TleField::Eccentricity;
    let raw = field.raw(lines);
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TleError::field(field, raw));
    }
    format!("0.{digits}")
        .parse::<f64>()
        .map_err(|_| TleError::field(field, raw))
}

/// Split a compact exponential field into sign, mantissa digits, exponent sign and exponent digit.
fn compact_exponential(input: &str) -> IResult<&str, (Option<char>, &str, char, char)> {
    all_consuming((
        opt(one_of("+-")),
        digit1,
        one_of(" +-"),
        satisfy(|c| c.is_ascii_digit()),
    ))
    .parse(input)
}

/// Decode a field in compact exponential notation (`±DDDDD±E` → `±0.DDDDD × 10^±E`).
///
/// A blank field decodes to `0.0`.
pub fn decode_compact_exponential(
    lines: &TleLines<'_>,
    field: TleField,
) -> Result<f64, TleError> {
    let raw = field.raw(lines);
    let text = raw.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    let (_, (sign, mantissa, exp_sign, exp_digit)) =
        compact_exponential(text).map_err(|_| TleError::field(field, raw))?;

    let sign = if sign == Some('-') { "-" } else { "" };
    let exp_sign = if exp_sign == '-' { "-" } else { "" };

    format!("{sign}0.{mantissa}e{exp_sign}{exp_digit}")
        .parse::<f64>()
        .map_err(|_| TleError::field(field, raw))
}

/// Satellite catalog number, which must be identical on both data lines.
pub fn decode_satellite_number(lines: &TleLines<'_>) -> Result<String, TleError> {
    let field = TleField::SatelliteNumber;
    let line1 = lines.line1[field.columns()].trim();
    let line2 = lines.line2[field.columns()].trim();

    if line1 != line2 {
        return Err(TleError::SatelliteNumberMismatch {
            line1: line1.to_string(),
            line2: line2.to_string(),
        });
    }
    if line1.is_empty() {
        return Err(TleError::field(field, field.raw(lines)));
    }
    Ok(line1.to_string())
}

pub fn decode_classification(lines: &TleLines<'_>) -> Result<Classification, TleError> {
    let field = TleField::Classification;
    let raw = field.raw(lines);
    raw.chars()
        .next()
        .and_then(|c| Classification::try_from(c).ok())
        .ok_or_else(|| TleError::field(field, raw))
}

pub fn decode_international_designator(lines: &TleLines<'_>) -> InternationalDesignator {
    InternationalDesignator {
        launch_year: decode_str(lines, TleField::LaunchYear).to_string(),
        launch_number: decode_str(lines, TleField::LaunchNumber).to_string(),
        launch_piece: decode_str(lines, TleField::LaunchPiece).to_string(),
    }
}

/// Four-digit epoch year.
pub fn decode_epoch_year(lines: &TleLines<'_>) -> Result<i32, TleError> {
    let field = TleField::EpochYear;
    let yy: u16 = decode_int(lines, field)?;
    if yy > 99 {
        return Err(TleError::field(field, field.raw(lines)));
    }
    Ok(epoch_year_from_two_digits(yy))
}

/// Ephemeris type, blank meaning `0`.
pub fn decode_ephemeris_type(lines: &TleLines<'_>) -> Result<u8, TleError> {
    if decode_str(lines, TleField::EphemerisType).is_empty() {
        return Ok(0);
    }
    decode_int(lines, TleField::EphemerisType)
}
