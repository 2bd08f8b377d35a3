//! Value types shared by the keepers

use std::fmt;

use serde::Deserialize;

use crate::parser::{parse_window, ParseError};

/// Number of hour slots in a day; also the side of a postcode's delivery matrix
pub const HOURS_PER_DAY: usize = 24;

/// Hour of day on the 24h clock, always in `0..=23`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// Midnight
    pub const MIDNIGHT: Hour = Hour(0);

    /// Last hour of the day
    pub const LAST: Hour = Hour(23);

    /// Create an hour, rejecting values past 23
    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < HOURS_PER_DAY).then_some(Hour(value))
    }

    /// The raw 24h value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Position of this hour along a matrix axis
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A distinct recipe and how many times it was delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Exact, case-sensitive recipe name
    pub name: String,
    /// Occurrences seen so far, at least 1
    pub count: usize,
}

impl Recipe {
    /// A recipe seen once
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 1,
        }
    }
}

/// A single delivery to a postcode within an hour window
///
/// `from` may be later than `to`; windows crossing midnight are stored as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Destination postcode
    pub postcode: String,
    /// Window start
    pub from: Hour,
    /// Window end
    pub to: Hour,
}

impl Delivery {
    /// Create a delivery
    pub fn new(postcode: impl Into<String>, from: Hour, to: Hour) -> Self {
        Self {
            postcode: postcode.into(),
            from,
            to,
        }
    }
}

/// One row of the input document, before its delivery window is parsed
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Recipe name
    pub recipe: String,
    /// Destination postcode
    pub postcode: String,
    /// Window such as `"Wednesday 8AM - 2PM"`
    pub delivery: String,
}

impl RawRecord {
    /// Parse the delivery window, producing a typed record
    pub fn parse(self) -> Result<Record, ParseError> {
        let (from, to) = parse_window(&self.delivery)?;

        Ok(Record {
            recipe: self.recipe,
            delivery: Delivery::new(self.postcode, from, to),
        })
    }
}

/// A fully parsed input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Recipe name
    pub recipe: String,
    /// Delivery carrying the postcode and hour window
    pub delivery: Delivery,
}

impl Record {
    /// Create a record
    pub fn new(recipe: impl Into<String>, delivery: Delivery) -> Self {
        Self {
            recipe: recipe.into(),
            delivery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_bounds() {
        assert_eq!(Hour::new(0), Some(Hour::MIDNIGHT));
        assert_eq!(Hour::new(23), Some(Hour::LAST));
        assert_eq!(Hour::new(24), None);
        assert_eq!(Hour::new(17).unwrap().index(), 17);
    }

    #[test]
    fn test_raw_record_parse() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"postcode":"10224","recipe":"Creamy Dill Chicken","delivery":"Wednesday 1AM - 7PM"}"#,
        )
        .unwrap();
        let record = raw.parse().unwrap();

        assert_eq!(record.recipe, "Creamy Dill Chicken");
        assert_eq!(record.delivery.postcode, "10224");
        assert_eq!(record.delivery.from.value(), 1);
        assert_eq!(record.delivery.to.value(), 19);
    }

    #[test]
    fn test_raw_record_bad_window() {
        let raw = RawRecord {
            recipe: "Speedy Steak Fajitas".to_string(),
            postcode: "10150".to_string(),
            delivery: "Friday noon - 2PM".to_string(),
        };

        let err = raw.parse().unwrap_err();
        assert_eq!(err.input(), "Friday noon - 2PM");
    }
}
