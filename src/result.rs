use serde::Serialize;

use crate::input::DateInput;

/// Everything computed for one date. Built only by [`crate::analyze`], and
/// always with every field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub is_prime: bool,
    pub is_palindrome: bool,
    pub is_pythagorean: bool,
    pub is_perfect_power: bool,
    pub is_armstrong: bool,
    pub is_equation: bool,
    /// `#MMDDYY`, then `#DDMMYY`.
    pub hex_codes: (String, String),
    /// `hsl(MM, DD%, YY%)`, then `hsl(DD, MM%, YY%)`.
    pub hsl_codes: (String, String),
}

/// What the command line prints: the date, its digit string and the
/// analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateReport {
    pub date: DateInput,
    pub digit_string: String,
    pub result: AnalysisResult,
}

impl DateReport {
    pub fn new(date: DateInput) -> Self {
        Self {
            date,
            digit_string: date.digit_string(),
            result: date.analyze(),
        }
    }
}
