//! # weektray-weekdate
//!
//! Pure date arithmetic for week-of-year numbering under the
//! first-four-day-week, Monday-start rule.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use weektray_weekdate::{WeekRule, first_monday_of_week, week_number};
//!
//! // Date -> week number
//! let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! assert_eq!(week_number(date, WeekRule::ISO_8601), 10);
//!
//! // Week number -> Monday date
//! let monday = first_monday_of_week(10, 2024, WeekRule::ISO_8601).unwrap();
//! assert_eq!(monday, date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `rule` | The week-numbering rule constant |
//! | `week` | Date -> week-number conversion |
//! | `monday` | Week-number -> Monday-date conversion |
//! | `error` | Error types |

mod error;
mod monday;
mod rule;
mod week;

pub use error::WeekDateError;
pub use monday::first_monday_of_week;
pub use rule::WeekRule;
pub use week::week_number;
