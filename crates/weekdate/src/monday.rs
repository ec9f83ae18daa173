//! Week-number -> Monday-date conversion.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::WeekDateError;
use crate::rule::WeekRule;
use crate::week::week_number;

/// Returns the Monday that starts week `week_of_year` of `reference_year`.
///
/// The projection anchors on the Thursday nearest January 1 (computed on
/// Sunday-based weekday numbers, so a Friday/Saturday/Sunday January 1
/// resolves to the previous year's last Thursday). That Thursday always
/// sits in the week whose number the anchor year reports first, which
/// keeps the projection in the right year; when it already numbers as
/// week 1 the requested week is decremented by one before projecting.
/// Stepping back three days from the projected Thursday lands on Monday.
///
/// Week 53 is accepted even for a 52-week reference year; the projected
/// Monday then falls in the following January.
///
/// # Errors
///
/// Returns [`WeekDateError::InvalidWeek`] if `week_of_year` is not in
/// 1..=53, and [`WeekDateError::YearOutOfRange`] if `reference_year`
/// cannot be represented as a date.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     first_monday_of_week(1, 2024, WeekRule::ISO_8601).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
/// );
/// assert_eq!(
///     first_monday_of_week(10, 2024, WeekRule::ISO_8601).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
/// );
/// ```
pub fn first_monday_of_week(
    week_of_year: u32,
    reference_year: i32,
    rule: WeekRule,
) -> Result<NaiveDate, WeekDateError> {
    if !(1..=53).contains(&week_of_year) {
        return Err(WeekDateError::InvalidWeek { week: week_of_year });
    }
    let jan1 = NaiveDate::from_ymd_opt(reference_year, 1, 1).ok_or(
        WeekDateError::YearOutOfRange {
            year: reference_year,
        },
    )?;

    let days_to_thursday = i64::from(Weekday::Thu.num_days_from_sunday())
        - i64::from(jan1.weekday().num_days_from_sunday());
    let anchor_thursday = jan1 + Duration::days(days_to_thursday);

    let mut weeks_ahead = i64::from(week_of_year);
    if week_number(anchor_thursday, rule) == 1 {
        weeks_ahead -= 1;
    }

    Ok(anchor_thursday + Duration::days(weeks_ahead * 7 - 3))
}
