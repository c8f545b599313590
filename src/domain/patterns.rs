//! Pattern table for date and range detection
//!
//! Every regex the parser and extractor rely on lives here so edge cases
//! (single-digit months, four-digit years, odd spacing) can be tested in one
//! place.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// `M/D/YY` with optional zero padding. Unanchored: `12/25/2026` matches as `12/25/20`.
pub static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{2})").expect("valid date pattern"));

/// The word "Through" between the two ends of a multi-day request
pub static THROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bThrough\b").expect("valid through pattern"));

/// A request ending exactly at midnight, which does not occupy its last date
pub static MIDNIGHT_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ends\s+12:00\s*AM").expect("valid midnight pattern"));

/// Two-digit years below this map to 20xx, the rest to 19xx
const CENTURY_PIVOT: u32 = 69;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Not a date fragment: '{0}'")]
    Malformed(String),

    #[error("No such calendar date: '{0}'")]
    OutOfRange(String),
}

/// Returns true if the text contains at least one date fragment
pub fn contains_date(text: &str) -> bool {
    DATE_RE.is_match(text)
}

/// Returns every date fragment in the text, in order of appearance
pub fn find_dates(text: &str) -> Vec<&str> {
    DATE_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Parses an `M/D/YY` fragment into a calendar date
pub fn parse_mdyy(fragment: &str) -> Result<NaiveDate, DateError> {
    let caps = DATE_RE
        .captures(fragment)
        .filter(|c| c.get(0).map(|m| m.as_str()) == Some(fragment))
        .ok_or_else(|| DateError::Malformed(fragment.to_string()))?;

    let field = |i: usize| -> Result<u32, DateError> {
        caps[i]
            .parse()
            .map_err(|_| DateError::Malformed(fragment.to_string()))
    };

    let month = field(1)?;
    let day = field(2)?;
    let yy = field(3)?;
    let year = if yy < CENTURY_PIVOT { 2000 + yy } else { 1900 + yy };

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| DateError::OutOfRange(fragment.to_string()))
}
