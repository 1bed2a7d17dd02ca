//! # tle_parser
//!
//! Decoding and validation of NORAD **Two-Line Element** sets.
//!
//! The entry point is [`TleRecord::from_tle`] (also reachable through [`str::parse`]),
//! which splits the text, validates both checksums and decodes every fixed-column
//! field into a [`TleRecord`]. Failures are reported as a [`TleError`] naming the
//! offending line or field.
//!
//! ```rust
//! use tle_parser::{TleError, TleRecord};
//!
//! let line1 = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
//! let line2 = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";
//!
//! let tle = TleRecord::from_tle(&format!("{line1}\n{line2}")).unwrap();
//! assert_eq!(tle.satellite_name, "25544");
//!
//! let err = TleRecord::from_tle(line1).unwrap_err();
//! assert_eq!(err, TleError::LineCount(1));
//! ```
pub mod constants;
pub mod time;
pub mod tle;
pub mod tle_errors;

pub use constants::{JulianDate, Radian, MINUTES_PER_DAY, RADEG, XPDOTP};
pub use tle::{
    fields::TleField, is_valid_tle, parse_tle_set, Classification, InternationalDesignator,
    TleRecord,
};
pub use tle_errors::{ChecksumFailure, DataLine, TleError};
