//! # Epoch conversions
//!
//! A TLE timestamps its elements with a **two-digit year** and a **fractional day of year**.
//! This module turns that pair into a calendar date and then into a Julian Date.
//!
//! ## Overview
//! -----------------
//! - [`epoch_year_from_two_digits`] applies the `57` pivot (`00..=56` → 20xx, `57..=99` → 19xx).
//! - [`epoch_to_date`] resolves a fractional day of year into a [`CalendarDate`], leap years included.
//! - [`jday`] converts a [`CalendarDate`] to a Julian Date (proleptic Gregorian calendar).
//! - [`CalendarDate::to_epoch`] bridges to [`hifitime::Epoch`] in the UTC time scale.
//!
//! Seconds are kept as `f64` all the way down, so the fraction of a second survives
//! the conversion with well below a millisecond of error.
use hifitime::{Epoch, TimeScale};

use crate::constants::{JulianDate, EPOCH_YEAR_PIVOT, JDTOMJD, MJD};

const DAYS_IN_MONTH: [u16; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Calendar date and time of day, UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl CalendarDate {
    /// Convert to a [`hifitime::Epoch`] in the UTC time scale.
    ///
    /// The fractional seconds are carried as nanoseconds.
    pub fn to_epoch(&self) -> Epoch {
        let whole = self.second.trunc();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        Epoch::from_gregorian(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            whole as u8,
            nanos,
            TimeScale::UTC,
        )
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `year`.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Expand a two-digit TLE epoch year to four digits.
///
/// Arguments
/// ---------
/// * `yy`: the two-digit year from columns 19–20 of line 1
///
/// Return
/// ------
/// * `2000 + yy` when `yy < 57`, `1900 + yy` otherwise
pub fn epoch_year_from_two_digits(yy: u16) -> i32 {
    if yy < EPOCH_YEAR_PIVOT {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// Resolve a fractional day of year into a calendar date and time.
///
/// Arguments
/// ---------
/// * `year`: four-digit year
/// * `epoch_day`: 1-based day of year, the fraction being the time of day
///
/// Return
/// ------
/// * The matching [`CalendarDate`], or `None` when `epoch_day` falls outside
///   `[1, days_in_year + 1)`
pub fn epoch_to_date(year: i32, epoch_day: f64) -> Option<CalendarDate> {
    if !epoch_day.is_finite() || epoch_day < 1.0 || epoch_day >= days_in_year(year) as f64 + 1.0 {
        return None;
    }

    let day_of_year = epoch_day.trunc() as u16;

    let mut month = 1;
    let mut elapsed = 0;
    for (i, &len) in DAYS_IN_MONTH.iter().enumerate() {
        let len = if i == 1 && is_leap_year(year) { 29 } else { len };
        if day_of_year <= elapsed + len {
            break;
        }
        elapsed += len;
        month += 1;
    }
    let day = (day_of_year - elapsed) as u8;

    // time of day
    let hours = epoch_day.fract() * 24.0;
    let hour = hours.trunc();
    let minutes = (hours - hour) * 60.0;
    let minute = minutes.trunc();
    let second = (minutes - minute) * 60.0;

    Some(CalendarDate {
        year,
        month,
        day,
        hour: hour as u8,
        minute: minute as u8,
        second,
    })
}

/// Julian Date of a calendar date (proleptic Gregorian calendar).
///
/// Meeus, *Astronomical Algorithms*, chap. 7, with the Gregorian correction
/// applied to every date.
pub fn jday(date: &CalendarDate) -> JulianDate {
    let (mut y, mut m) = (date.year as f64, date.month as f64);
    if date.month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let day_fraction =
        ((date.second / 60.0 + date.minute as f64) / 60.0 + date.hour as f64) / 24.0;

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + date.day as f64 + b - 1524.5
        + day_fraction
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: JulianDate) -> MJD {
    jd - JDTOMJD
}
