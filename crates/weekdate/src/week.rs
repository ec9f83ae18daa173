//! Date -> week-number conversion.

use chrono::{Datelike, Duration, NaiveDate};

use crate::rule::WeekRule;

/// Returns the first day of week 1 of `year` under `rule`.
///
/// Week 1 is the first week (starting on `rule.first_day`) that contains
/// at least `rule.min_days_in_first_week` days of January. The returned
/// date may fall in late December of the previous year.
pub(crate) fn first_week_start(year: i32, rule: WeekRule) -> NaiveDate {
    // NaiveDate guarantees any year it holds can also represent Jan 1.
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).expect("Jan 1 is valid for any in-range year");
    let into_week = jan1.weekday().days_since(rule.first_day);
    let week_start = jan1 - Duration::days(i64::from(into_week));
    let days_in_january = 7 - into_week as u8;
    if days_in_january >= rule.min_days_in_first_week {
        week_start
    } else {
        week_start + Duration::days(7)
    }
}

/// Computes the week-of-year number of `date` under `rule`.
///
/// Dates on or after the start of week 1 are numbered by straight
/// seven-day arithmetic, so late-December dates may report week 53
/// within their own year. Dates before the start of week 1 belong to the
/// previous year's numbering and report its last week (52 or 53).
///
/// Total over all representable dates; no error conditions.
///
/// # Examples
///
/// ```ignore
/// // Jan 1 2024 is a Monday and its week holds all of Jan 1-7:
/// assert_eq!(week_number(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), WeekRule::ISO_8601), 1);
///
/// // Jan 1 2023 is a Sunday; its week holds a single January day, so it
/// // closes out 2022's numbering:
/// assert_eq!(week_number(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), WeekRule::ISO_8601), 52);
/// ```
pub fn week_number(date: NaiveDate, rule: WeekRule) -> u32 {
    let start = first_week_start(date.year(), rule);
    if date < start {
        // Dec 31 is never before its own year's week 1, so this recurses
        // at most once.
        let prev_dec31 = NaiveDate::from_ymd_opt(date.year() - 1, 12, 31)
            .expect("Dec 31 is valid for any in-range year");
        return week_number(prev_dec31, rule);
    }
    ((date - start).num_days() / 7 + 1) as u32
}
