//! # Line splitting
//!
//! Turns a raw TLE text block into a title (optional) and two data lines.
//! Any line-ending convention is accepted (`\r\n`, `\n` or a lone `\r`).
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    multi::separated_list0,
    IResult, Parser,
};

use crate::{
    constants::TLE_DATA_LINE_LEN,
    tle_errors::{DataLine, TleError},
};

/// Borrowed view over the lines of a single TLE.
///
/// Data lines are stored without trailing whitespace, are pure ASCII and hold at
/// least [`TLE_DATA_LINE_LEN`] characters, so fixed column slices never panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TleLines<'a> {
    pub(crate) title: Option<&'a str>,
    pub(crate) line1: &'a str,
    pub(crate) line2: &'a str,
}

impl<'a> TleLines<'a> {
    /// Split a raw TLE text block.
    ///
    /// A single trailing line terminator is ignored. Any other empty line counts as a line.
    ///
    /// Return
    /// ------
    /// * [`TleError::LineCount`] when the text does not hold exactly 2 or 3 lines
    /// * [`TleError::LineTooShort`] / [`TleError::NonAsciiLine`] on a malformed data line
    pub fn split(text: &'a str) -> Result<Self, TleError> {
        let lines = split_lines(text);

        let (title, line1, line2) = match lines.as_slice() {
            [line1, line2] => (None, *line1, *line2),
            [title, line1, line2] => (Some(title.trim()), *line1, *line2),
            _ => return Err(TleError::LineCount(lines.len())),
        };

        Ok(TleLines {
            title,
            line1: check_data_line(line1, DataLine::Line1)?,
            line2: check_data_line(line2, DataLine::Line2)?,
        })
    }

    /// Title line, trimmed, when the TLE has three lines.
    pub fn title(&self) -> Option<&'a str> {
        self.title
    }

    pub fn get(&self, line: DataLine) -> &'a str {
        match line {
            DataLine::Line1 => self.line1,
            DataLine::Line2 => self.line2,
        }
    }
}

/// Line terminator: `\r\n`, `\n` or a lone `\r`.
fn line_terminator(input: &str) -> IResult<&str, &str> {
    alt((tag("\r\n"), tag("\n"), tag("\r"))).parse(input)
}

/// Every line of `input`, terminators excluded. Never fails on complete input.
fn text_lines(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list0(line_terminator, take_till(|c: char| c == '\r' || c == '\n')).parse(input)
}

/// Split on `\r\n`, `\n` or `\r`, dropping one trailing terminator.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text);

    match text_lines(text) {
        Ok((_, lines)) => lines,
        Err(_) => vec![text],
    }
}

fn check_data_line(raw: &str, line: DataLine) -> Result<&str, TleError> {
    let trimmed = raw.trim_end();
    if !trimmed.is_ascii() {
        return Err(TleError::NonAsciiLine(line));
    }
    if trimmed.len() < TLE_DATA_LINE_LEN {
        return Err(TleError::LineTooShort {
            line,
            len: trimmed.len(),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod lines_test {
    use super::*;

    const L1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const L2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn test_split_line_endings() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\r\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\rb\rc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\r\nb\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb\n\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\rb\r\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_line_terminator() {
        assert_eq!(line_terminator("\r\nx"), Ok(("x", "\r\n")));
        assert_eq!(line_terminator("\rx"), Ok(("x", "\r")));
        assert_eq!(line_terminator("\nx"), Ok(("x", "\n")));
        assert!(line_terminator("x").is_err());
    }

    #[test]
    fn test_two_and_three_lines() {
        let two = format!("{L1}\n{L2}");
        let lines = TleLines::split(&two).unwrap();
        assert_eq!(lines.title(), None);
        assert_eq!(lines.get(DataLine::Line1), L1);
        assert_eq!(lines.get(DataLine::Line2), L2);

        let three = format!("ISS (ZARYA)   \r\n{L1}\r\n{L2}\r\n");
        let lines = TleLines::split(&three).unwrap();
        assert_eq!(lines.title(), Some("ISS (ZARYA)"));
        assert_eq!(lines.line1, L1);
    }

    #[test]
    fn test_wrong_line_count() {
        assert_eq!(TleLines::split(L1), Err(TleError::LineCount(1)));
        let four = format!("ISS\n{L1}\n{L2}\nextra");
        assert_eq!(TleLines::split(&four), Err(TleError::LineCount(4)));
        assert_eq!(TleLines::split(""), Err(TleError::LineCount(1)));
    }

    #[test]
    fn test_malformed_data_lines() {
        let short = format!("{}\n{L2}", &L1[..60]);
        assert_eq!(
            TleLines::split(&short),
            Err(TleError::LineTooShort {
                line: DataLine::Line1,
                len: 60
            })
        );

        let accented = format!("{L1}\n{}é", &L2[..68]);
        assert_eq!(
            TleLines::split(&accented),
            Err(TleError::NonAsciiLine(DataLine::Line2))
        );

        let padded = format!("{L1}           \n{L2}");
        assert_eq!(TleLines::split(&padded).unwrap().line1, L1);
    }
}
