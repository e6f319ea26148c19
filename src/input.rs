//! Boundary validation for user-supplied dates.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::analyzer;
use crate::result::AnalysisResult;

pub const MONTH_RANGE: RangeInclusive<i64> = 1..=12;
pub const DAY_RANGE: RangeInclusive<i64> = 1..=31;
pub const YEAR_RANGE: RangeInclusive<i64> = 1..=2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Month,
    Day,
    Year,
}

impl Field {
    fn range(self) -> RangeInclusive<i64> {
        match self {
            Field::Month => MONTH_RANGE,
            Field::Day => DAY_RANGE,
            Field::Year => YEAR_RANGE,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Month => "month",
            Field::Day => "day",
            Field::Year => "year",
        })
    }
}

/// Reasons a date is turned away before it reaches the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a number, got {value:?}")]
    NonNumeric { field: Field, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// A month/day/year triple that passed range checks. Calendar validity is
/// not checked, so February 30 is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateInput {
    month: u32,
    day: u32,
    year: u32,
}

impl DateInput {
    pub fn new(month: i64, day: i64, year: i64) -> Result<Self, InputError> {
        Ok(Self {
            month: check_range(Field::Month, month)?,
            day: check_range(Field::Day, day)?,
            year: check_range(Field::Year, year)?,
        })
    }

    /// Parses three text fields. Every field is checked for being numeric
    /// before any range check runs.
    pub fn parse(month: &str, day: &str, year: &str) -> Result<Self, InputError> {
        let month = parse_field(Field::Month, month)?;
        let day = parse_field(Field::Day, day)?;
        let year = parse_field(Field::Year, year)?;
        Self::new(month, day, year)
    }

    pub fn from_naive_date(date: NaiveDate) -> Result<Self, InputError> {
        Self::new(
            i64::from(date.month()),
            i64::from(date.day()),
            i64::from(date.year()),
        )
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn digit_string(&self) -> String {
        analyzer::digit_string(self.month, self.day, self.year)
    }

    pub fn analyze(&self) -> AnalysisResult {
        analyzer::analyze(self.month, self.day, self.year)
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

fn parse_field(field: Field, raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::NonNumeric {
        field,
        value: raw.to_string(),
    })
}

fn check_range(field: Field, value: i64) -> Result<u32, InputError> {
    let range = field.range();
    if !range.contains(&value) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    // bounded by the range above
    Ok(value as u32)
}
