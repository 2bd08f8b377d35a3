//! Delivery window parser using nom
//!
//! Window format:
//! ```text
//! <Weekday> <H|HH><AM|PM> - <H|HH><AM|PM>
//! ```
//!
//! e.g. `Wednesday 8AM - 2PM` parses to hours `(8, 14)`. Query bounds use the
//! bare clock form (`9AM`, `12PM`) without weekday or range.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while_m_n},
    character::complete::{alpha1, space0, space1},
    combinator::{all_consuming, map_res, value},
    sequence::{delimited, pair, preceded, separated_pair, terminated},
    IResult,
};
use thiserror::Error;

use crate::model::Hour;

/// A window or clock string that does not follow the expected grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{input}': {reason}")]
pub struct ParseError {
    input: String,
    reason: String,
}

impl ParseError {
    /// Create a parse error for the given input
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// The string that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why it failed
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// A 12h clock reading as written, before conversion
type Clock = (u8, Meridiem);

fn meridiem(input: &str) -> IResult<&str, Meridiem> {
    alt((
        value(Meridiem::Am, tag_no_case("AM")),
        value(Meridiem::Pm, tag_no_case("PM")),
    ))(input)
}

fn clock(input: &str) -> IResult<&str, Clock> {
    pair(
        map_res(take_while_m_n(1, 2, |c: char| c.is_ascii_digit()), str::parse::<u8>),
        meridiem,
    )(input)
}

/// `Wednesday 8AM - 2PM`: any leading word is taken as the weekday
fn window(input: &str) -> IResult<&str, (Clock, Clock)> {
    preceded(
        terminated(alpha1, space1),
        separated_pair(clock, delimited(space0, tag("-"), space0), clock),
    )(input)
}

/// Convert a 12h reading to the 24h clock: 12AM is 0, 12PM is 12
fn to_hour(input: &str, (hour, meridiem): Clock) -> Result<Hour, ParseError> {
    if !(1..=12).contains(&hour) {
        return Err(ParseError::new(input, format!("hour {hour} is outside 1-12")));
    }

    let value = match (hour, meridiem) {
        (12, Meridiem::Am) => 0,
        (12, Meridiem::Pm) => 12,
        (hour, Meridiem::Am) => hour,
        (hour, Meridiem::Pm) => hour + 12,
    };

    Hour::new(value).ok_or_else(|| ParseError::new(input, format!("hour {value} is outside 0-23")))
}

fn reject(input: &str, err: nom::Err<nom::error::Error<&str>>) -> ParseError {
    let rest = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
        nom::Err::Incomplete(_) => "",
    };

    if rest.is_empty() {
        ParseError::new(input, "unexpected end of input")
    } else {
        ParseError::new(input, format!("unexpected input at '{rest}'"))
    }
}

/// Parse a delivery window into its start and end hours
pub fn parse_window(input: &str) -> Result<(Hour, Hour), ParseError> {
    let trimmed = input.trim();
    let (_, (start, end)) = all_consuming(window)(trimmed).map_err(|e| reject(input, e))?;

    Ok((to_hour(input, start)?, to_hour(input, end)?))
}

/// Parse a standalone 12h time such as `5PM` into its 24h hour
pub fn parse_clock(input: &str) -> Result<Hour, ParseError> {
    let trimmed = input.trim();
    let (_, reading) = all_consuming(clock)(trimmed).map_err(|e| reject(input, e))?;

    to_hour(input, reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(input: &str) -> (u8, u8) {
        let (from, to) = parse_window(input).unwrap();
        (from.value(), to.value())
    }

    #[test]
    fn test_parse_clock_full_day() {
        let expectations = [
            ("12AM", 0),
            ("1AM", 1),
            ("2AM", 2),
            ("9AM", 9),
            ("10AM", 10),
            ("11AM", 11),
            ("12PM", 12),
            ("1PM", 13),
            ("2PM", 14),
            ("5PM", 17),
            ("10PM", 22),
            ("11PM", 23),
        ];

        for (time, expected) in expectations {
            assert_eq!(parse_clock(time).unwrap().value(), expected, "{time}");
        }
    }

    #[test]
    fn test_parse_clock_every_hour_in_range() {
        for hour in 1..=12u8 {
            for suffix in ["AM", "PM"] {
                let parsed = parse_clock(&format!("{hour}{suffix}")).unwrap();
                assert!(parsed.index() < 24);
            }
        }
    }

    #[test]
    fn test_parse_clock_lenient_case_and_spacing() {
        assert_eq!(parse_clock(" 7pm ").unwrap().value(), 19);
        assert_eq!(parse_clock("12am").unwrap().value(), 0);
    }

    #[test]
    fn test_parse_clock_rejects_malformed() {
        for bad in ["", "PM", "7", "7XM", "123AM", "13PM", "0AM", "7 PM", "Monday 7PM"] {
            let err = parse_clock(bad).unwrap_err();
            assert_eq!(err.input(), bad);
        }
    }

    #[test]
    fn test_parse_clock_out_of_range_reason() {
        let err = parse_clock("13PM").unwrap_err();
        assert_eq!(err.reason(), "hour 13 is outside 1-12");
    }

    #[test]
    fn test_parse_window() {
        assert_eq!(hours("Wednesday 8AM - 2PM"), (8, 14));
        assert_eq!(hours("Saturday 10AM - 12PM"), (10, 12));
        assert_eq!(hours("Sunday 12AM - 11PM"), (0, 23));
        assert_eq!(hours("Thursday 11AM - 1PM"), (11, 13));
        assert_eq!(hours("Monday 12PM - 5PM"), (12, 17));
    }

    #[test]
    fn test_parse_window_crossing_midnight() {
        assert_eq!(hours("Friday 10PM - 2AM"), (22, 2));
    }

    #[test]
    fn test_parse_window_any_weekday_word() {
        assert_eq!(hours("Tue 9AM - 5PM"), (9, 17));
        assert_eq!(hours("Someday 9AM-5PM"), (9, 17));
    }

    #[test]
    fn test_parse_window_rejects_malformed() {
        for bad in [
            "8AM - 2PM",
            "Wednesday 8AM",
            "Wednesday 8AM - ",
            "Wednesday 8 - 2PM",
            "Wednesday 8AM to 2PM",
            "Wednesday 8AM - 2PM extra",
        ] {
            assert!(parse_window(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_parse_window_error_points_at_failure() {
        let err = parse_window("Wednesday 8AM - 2XM").unwrap_err();

        assert_eq!(err.input(), "Wednesday 8AM - 2XM");
        assert_eq!(err.reason(), "unexpected input at 'XM'");
    }
}
