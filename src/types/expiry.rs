//! Card expiry dates in `MM/YY` form

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Month/year a card expires
///
/// Two-digit years `00`-`49` map to 2000-2049 and `50`-`99` to 1950-1999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpiryDate {
    year: i32,
    month: u32,
}

/// An expiry string that is not a valid `MM/YY` value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid expiry date '{0}', expected MM/YY")]
pub struct InvalidExpiry(pub String);

impl ExpiryDate {
    /// Create an expiry date from a full year and a month (1-12)
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(ExpiryDate { year, month })
    }

    /// Full four-digit year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the expiry month
    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Whether the card has expired as of `today`
    ///
    /// The card counts as expired once today's date is past the first day
    /// of the expiry month.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.first_day() < today
    }
}

fn parse_two_digits(field: &str) -> Option<u32> {
    if field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}

impl FromStr for ExpiryDate {
    type Err = InvalidExpiry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidExpiry(s.to_string());

        let (month, year) = s.split_once('/').ok_or_else(invalid)?;
        let month = parse_two_digits(month).ok_or_else(invalid)?;
        let yy = parse_two_digits(year).ok_or_else(invalid)? as i32;
        let year = if yy < 50 { 2000 + yy } else { 1900 + yy };

        ExpiryDate::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}
