//! Free-text parsing for user-supplied week numbers and dates.
//!
//! Parse failures never reach the conversion core: callers substitute
//! [`BAD_INPUT`] as the displayed result instead of propagating an error.

use chrono::NaiveDate;

/// Literal shown in place of a result when user text fails to parse.
pub const BAD_INPUT: &str = "Badly formatted string";

/// Parses free text as a week number.
pub fn parse_week(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Parses free text as a `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
