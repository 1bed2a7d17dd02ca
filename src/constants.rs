//! # Constants and type definitions for the TLE parser
//!
//! This module centralizes the **conversion factors** and **layout constants** used while
//! decoding a NORAD Two-Line Element set. They follow the conventions of the reference
//! SGP4 implementation, so that the decoded values can be handed to a propagator as is.
//!
//! ## Overview
//!
//! - Unit conversions (degrees → radians, revolutions/day → radians/minute)
//! - Time constants (minutes per day, JD ↔ MJD offset)
//! - Fixed layout of the TLE data lines
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of minutes in a day
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Revolutions per day → radians per minute divisor (`1440 / 2π`)
pub const XPDOTP: f64 = MINUTES_PER_DAY / DPI;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

// -------------------------------------------------------------------------------------------------
// TLE layout
// -------------------------------------------------------------------------------------------------

/// Two-digit epoch years strictly below this value belong to the 21st century
pub const EPOCH_YEAR_PIVOT: u16 = 57;

/// Minimal length of a data line, checksum column included
pub const TLE_DATA_LINE_LEN: usize = 69;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_xpdotp() {
        assert_eq!(XPDOTP, 229.1831180523293);
    }

    #[test]
    fn test_radeg() {
        assert_eq!(180.0 * RADEG, std::f64::consts::PI);
    }
}
