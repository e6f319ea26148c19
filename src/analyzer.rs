//! Date analysis core.
//!
//! Everything here is a pure function of the three date components. The
//! numeric predicates work on the digit string, the concatenation of month,
//! day and year with no separators and no zero padding.

use crate::result::AnalysisResult;

/// Largest exponent tried by [`is_perfect_power`].
const MAX_EXPONENT: u32 = 9;

/// Runs every predicate and formatter against a date.
///
/// Input is assumed to have passed boundary validation already. Arithmetic
/// is still checked, so oversized components give `false` instead of a
/// panic.
pub fn analyze(month: u32, day: u32, year: u32) -> AnalysisResult {
    let digits = digit_string(month, day, year);

    AnalysisResult {
        is_prime: is_prime(&digits),
        is_palindrome: is_palindrome(&digits),
        is_pythagorean: is_pythagorean(day, month, year),
        is_perfect_power: is_perfect_power(&digits),
        is_armstrong: is_armstrong(&digits),
        is_equation: is_equation(day, month, year),
        hex_codes: to_hex_pair(month, day, year),
        hsl_codes: to_hsl_pair(month, day, year),
    }
}

/// `3, 14, 2024` becomes `"3142024"`.
pub fn digit_string(month: u32, day: u32, year: u32) -> String {
    format!("{month}{day}{year}")
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

pub fn is_prime(s: &str) -> bool {
    let Some(n) = parse_digits(s) else {
        return false;
    };
    if n <= 1 {
        return false;
    }

    let mut i: u64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

pub fn is_pythagorean(day: u32, month: u32, year: u32) -> bool {
    let (d, m, y) = (u64::from(day), u64::from(month), u64::from(year));
    // squares of u32 values fit in u64; only the sum can overflow
    let lhs = (d * d).checked_add(m * m);
    lhs.is_some_and(|sum| sum == y * y)
}

/// True when the value equals `base^exp` for some base in `2..=sqrt(n)` and
/// exponent in `2..=9`.
pub fn is_perfect_power(s: &str) -> bool {
    let Some(n) = parse_digits(s) else {
        return false;
    };
    if n <= 1 {
        return false;
    }

    let mut base: u64 = 2;
    while base <= n / base {
        for exp in 2..=MAX_EXPONENT {
            match base.checked_pow(exp) {
                Some(p) if p == n => return true,
                Some(p) if p < n => {}
                _ => break,
            }
        }
        base += 1;
    }
    false
}

/// Narcissistic number test using the string's own length as the exponent.
pub fn is_armstrong(s: &str) -> bool {
    let Some(n) = parse_digits(s) else {
        return false;
    };
    let Ok(width) = u32::try_from(s.len()) else {
        return false;
    };

    let mut sum: u64 = 0;
    for c in s.chars() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        match u64::from(digit)
            .checked_pow(width)
            .and_then(|term| sum.checked_add(term))
        {
            Some(next) => sum = next,
            None => return false,
        }
    }
    sum == n
}

/// Checks the fixed set of arithmetic relations between the components.
pub fn is_equation(day: u32, month: u32, year: u32) -> bool {
    let (d, m, y) = (i64::from(day), i64::from(month), i64::from(year));

    d + m == y
        || d - m == y
        || d.checked_mul(m).is_some_and(|p| p == y)
        // only an exact quotient can equal an integer year
        || (m != 0 && d % m == 0 && d / m == y)
        || d.checked_pow(month).is_some_and(|p| p == y)
}

/// `#MMDDYY` and `#DDMMYY`, two-digit year.
pub fn to_hex_pair(month: u32, day: u32, year: u32) -> (String, String) {
    let yy = year % 100;
    (
        format!("#{month:02}{day:02}{yy:02}"),
        format!("#{day:02}{month:02}{yy:02}"),
    )
}

/// Values pass through unclamped, so a hue or percentage may fall outside
/// the CSS ranges.
pub fn to_hsl_pair(month: u32, day: u32, year: u32) -> (String, String) {
    let yy = year % 100;
    (
        format!("hsl({month}, {day}%, {yy}%)"),
        format!("hsl({day}, {month}%, {yy}%)"),
    )
}
