//! # Two-Line Element sets
//!
//! Decoding of a NORAD **Two-Line Element** set into a [`TleRecord`].
//!
//! ## Overview
//! -----------------
//! A TLE is a 2 or 3 line block of fixed-width ASCII text:
//!
//! ```text
//! ISS (ZARYA)
//! 1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
//! 2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537
//! ```
//!
//! The optional first line is a free-text title. Each data line ends with a checksum digit.
//! Decoding runs through the following stages, each one failing with a [`TleError`]:
//!
//! 1. [`lines`] splits the text and checks the shape of the data lines.
//! 2. [`checksum`] validates both checksum digits. Nothing is decoded before that.
//! 3. [`fields`] extracts every field from its column range.
//! 4. [`crate::time`] turns the epoch into a calendar date and a Julian Date.
//!
//! There is no partially decoded record: either every field is populated or an error is returned.
//!
//! ## Units
//! -----------------
//! The decoded values follow the conventions of SGP4 propagators:
//! - angles in **radians**,
//! - `mean_motion` in **rad/min**, `mean_motion_dot` in **rad/min²**,
//!   `mean_motion_dot_dot` in **rad/min³**,
//! - `bstar` in **1/earth radii**, unscaled,
//! - `jd_epoch` as a **Julian Date** (UTC).
//!
//! ## Example
//!
//! ```rust
//! use tle_parser::tle::TleRecord;
//!
//! let text = "ISS (ZARYA)
//! 1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
//! 2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";
//!
//! let tle: TleRecord = text.parse().unwrap();
//! assert_eq!(tle.satellite_name, "ISS (ZARYA)");
//! assert_eq!(tle.epoch_year, 2008);
//! ```
pub mod checksum;
pub mod fields;
pub mod lines;

use std::{fmt, str::FromStr};

use hifitime::Epoch;
use tracing::{debug, trace};

use crate::{
    constants::{JulianDate, Radian, MINUTES_PER_DAY, MJD, RADEG, XPDOTP},
    time::{epoch_to_date, jd_to_mjd, jday, CalendarDate},
    tle_errors::TleError,
};

use checksum::validate_checksums;
use fields::{
    decode_angle, decode_classification, decode_compact_exponential, decode_eccentricity,
    decode_ephemeris_type, decode_epoch_year, decode_f64, decode_int,
    decode_international_designator, decode_satellite_number, TleField,
};
use lines::{split_lines, TleLines};

/// Security classification of the element set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    Unclassified,
    Classified,
    Secret,
    TopSecret,
}

impl Classification {
    pub fn as_char(&self) -> char {
        match self {
            Classification::Unclassified => 'U',
            Classification::Classified => 'C',
            Classification::Secret => 'S',
            Classification::TopSecret => 'T',
        }
    }
}

impl TryFrom<char> for Classification {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Classification::Unclassified),
            'C' => Ok(Classification::Classified),
            'S' => Ok(Classification::Secret),
            'T' => Ok(Classification::TopSecret),
            other => Err(other),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// COSPAR international designator: last two digits of the launch year,
/// launch number of the year and piece of the launch.
///
/// Displayed as the plain concatenation of the three parts (`98067A`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternationalDesignator {
    pub launch_year: String,
    pub launch_number: String,
    pub launch_piece: String,
}

impl fmt::Display for InternationalDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.launch_year, self.launch_number, self.launch_piece
        )
    }
}

/// A fully decoded and validated Two-Line Element set.
///
/// Units
/// -----
/// * `epoch_day`: fractional day of year (1-based).
/// * `mean_motion_dot`: rad/min².
/// * `mean_motion_dot_dot`: rad/min³.
/// * `bstar`: 1/earth radii.
/// * `inclination`, `right_ascension_ascending_node`, `argument_of_perigee`,
///   `mean_anomaly`: radians.
/// * `mean_motion`: rad/min.
/// * `jd_epoch`: Julian Date (UTC).
///
/// Notes
/// -----
/// A `TleRecord` only exists once both checksums passed and every field decoded;
/// see [`is_valid_tle`] to test a text block without keeping the record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TleRecord {
    pub satellite_name: String,
    pub satellite_number: String,
    pub classification: Classification,
    pub international_designator: InternationalDesignator,
    pub epoch_year: i32,
    pub epoch_day: f64,
    pub mean_motion_dot: f64,
    pub mean_motion_dot_dot: f64,
    pub bstar: f64,
    pub ephemeris_type: u8,
    pub element_number: u16,
    pub inclination: Radian,
    pub right_ascension_ascending_node: Radian,
    pub eccentricity: f64,
    pub argument_of_perigee: Radian,
    pub mean_anomaly: Radian,
    pub mean_motion: f64,
    pub revolution_number: u32,
    pub jd_epoch: JulianDate,
    epoch_date: CalendarDate,
}

impl TleRecord {
    /// Decode a 2 or 3 line TLE text block.
    ///
    /// Arguments
    /// ---------
    /// * `text`: the raw TLE, any line ending accepted
    ///
    /// Return
    /// ------
    /// * The decoded [`TleRecord`], or the first [`TleError`] met along the way:
    ///   line count, data line shape, checksums, satellite number, then field by field.
    pub fn from_tle(text: &str) -> Result<Self, TleError> {
        let result = TleLines::split(text).and_then(|lines| {
            validate_checksums(&lines)?;
            Self::from_lines(&lines)
        });

        match &result {
            Ok(tle) => trace!(
                satellite_number = %tle.satellite_number,
                jd_epoch = tle.jd_epoch,
                "decoded TLE"
            ),
            Err(err) => debug!(error = %err, "rejected TLE"),
        }
        result
    }

    /// Decode the fields of already split and checksum-validated lines.
    fn from_lines(lines: &TleLines<'_>) -> Result<Self, TleError> {
        let satellite_number = decode_satellite_number(lines)?;

        let epoch_year = decode_epoch_year(lines)?;
        let epoch_day = decode_f64(lines, TleField::EpochDay)?;

        let mean_motion_dot =
            decode_f64(lines, TleField::MeanMotionDot)? / (XPDOTP * MINUTES_PER_DAY);
        let mean_motion_dot_dot = decode_compact_exponential(lines, TleField::MeanMotionDotDot)?
            / (XPDOTP * MINUTES_PER_DAY * MINUTES_PER_DAY);

        let epoch_date = epoch_to_date(epoch_year, epoch_day).ok_or_else(|| {
            TleError::field(TleField::EpochDay, TleField::EpochDay.raw(lines))
        })?;

        Ok(TleRecord {
            satellite_name: match lines.title() {
                Some(title) => title.to_string(),
                None => satellite_number.clone(),
            },
            classification: decode_classification(lines)?,
            international_designator: decode_international_designator(lines),
            epoch_year,
            epoch_day,
            mean_motion_dot,
            mean_motion_dot_dot,
            bstar: decode_compact_exponential(lines, TleField::Bstar)?,
            ephemeris_type: decode_ephemeris_type(lines)?,
            element_number: decode_int(lines, TleField::ElementNumber)?,
            inclination: decode_angle(lines, TleField::Inclination)?,
            right_ascension_ascending_node: decode_angle(
                lines,
                TleField::RightAscensionAscendingNode,
            )?,
            eccentricity: decode_eccentricity(lines)?,
            argument_of_perigee: decode_angle(lines, TleField::ArgumentOfPerigee)?,
            mean_anomaly: decode_angle(lines, TleField::MeanAnomaly)?,
            mean_motion: decode_f64(lines, TleField::MeanMotion)? / XPDOTP,
            revolution_number: decode_int(lines, TleField::RevolutionNumber)?,
            jd_epoch: jday(&epoch_date),
            epoch_date,
            satellite_number,
        })
    }

    /// Calendar date and time of the epoch (UTC).
    pub fn epoch_date(&self) -> CalendarDate {
        self.epoch_date
    }

    /// Epoch as a [`hifitime::Epoch`] (UTC).
    pub fn epoch(&self) -> Epoch {
        self.epoch_date().to_epoch()
    }

    /// Epoch as a Modified Julian Date (UTC).
    pub fn mjd_epoch(&self) -> MJD {
        jd_to_mjd(self.jd_epoch)
    }

    /// Mean motion in revolutions per day, as written in the TLE.
    pub fn mean_motion_revs_per_day(&self) -> f64 {
        self.mean_motion * XPDOTP
    }
}

impl FromStr for TleRecord {
    type Err = TleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TleRecord::from_tle(s)
    }
}

impl TryFrom<&str> for TleRecord {
    type Error = TleError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        TleRecord::from_tle(s)
    }
}

impl fmt::Display for TleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}] {} ({})",
            self.satellite_name,
            self.satellite_number,
            self.international_designator,
            self.classification
        )?;
        writeln!(
            f,
            "  epoch: {}-{:012.8} (JD {:.8})",
            self.epoch_year, self.epoch_day, self.jd_epoch
        )?;
        writeln!(
            f,
            "  i = {:.4}°, Ω = {:.4}°, e = {:.7}, ω = {:.4}°, M = {:.4}°",
            self.inclination / RADEG,
            self.right_ascension_ascending_node / RADEG,
            self.eccentricity,
            self.argument_of_perigee / RADEG,
            self.mean_anomaly / RADEG
        )?;
        write!(
            f,
            "  n = {:.8} rev/day, B* = {:e}, rev #{}",
            self.mean_motion_revs_per_day(),
            self.bstar,
            self.revolution_number
        )
    }
}

/// `true` when `text` decodes to a valid [`TleRecord`].
pub fn is_valid_tle(text: &str) -> bool {
    TleRecord::from_tle(text).is_ok()
}

fn is_data_line(line: &str, number: char) -> bool {
    let mut chars = line.chars();
    chars.next() == Some(number) && chars.next() == Some(' ')
}

/// Decode every TLE of a text holding several concatenated element sets.
///
/// A line starting with `1 ` opens a record, optionally preceded by a title line,
/// and must be followed by a line starting with `2 `. Blank lines are skipped.
/// Each record is decoded on its own; a line that fits no record yields a
/// [`TleError::StrayLine`] entry with its 1-based line number in `text`.
pub fn parse_tle_set(text: &str) -> Vec<Result<TleRecord, TleError>> {
    let lines: Vec<(usize, &str)> = split_lines(text)
        .into_iter()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();
    let is_data = |i: usize, number: char| {
        lines
            .get(i)
            .is_some_and(|&(_, line)| is_data_line(line, number))
    };

    let mut records = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let with_title = !is_data(i, '1') && is_data(i + 1, '1');
        let len = if with_title { 3 } else { 2 };

        if !(is_data(i + len - 2, '1') && is_data(i + len - 1, '2')) {
            let line = lines[i].0 + 1;
            debug!(line, "stray line in TLE set");
            records.push(Err(TleError::StrayLine { line }));
            i += 1;
            continue;
        }

        let chunk: Vec<&str> = lines[i..i + len].iter().map(|&(_, l)| l).collect();
        records.push(TleRecord::from_tle(&chunk.join("\n")));
        i += len;
    }
    records
}
