//! Conversion commands: week number -> Monday date and date -> week number.

use anyhow::Result;
use chrono::{Datelike, Local};
use tracing::{info, info_span, warn};

use weektray_weekdate::{WeekRule, first_monday_of_week, week_number};

use crate::cli::{ToDateArgs, ToWeekArgs};
use crate::config::WeektrayConfig;
use crate::input::{self, BAD_INPUT};

/// Run the week-to-date conversion.
///
/// The reference year is resolved as CLI flag, then config, then the
/// current local year.
pub fn run_to_date(args: &ToDateArgs, config: &WeektrayConfig) -> Result<()> {
    let _cmd = info_span!("to_date").entered();

    let Some(week) = input::parse_week(&args.week) else {
        warn!(text = %args.week, "week input did not parse");
        println!("{BAD_INPUT}");
        return Ok(());
    };

    let year = resolve_reference_year(args.year, config, Local::now().date_naive().year());
    let monday = first_monday_of_week(week, year, WeekRule::ISO_8601)?;
    info!(week, year, %monday, "week resolved to Monday date");
    println!("{}", monday.format("%Y-%m-%d"));
    Ok(())
}

/// Run the date-to-week conversion.
pub fn run_to_week(args: &ToWeekArgs) -> Result<()> {
    let _cmd = info_span!("to_week").entered();

    let Some(date) = input::parse_date(&args.date) else {
        warn!(text = %args.date, "date input did not parse");
        println!("{BAD_INPUT}");
        return Ok(());
    };

    let week = week_number(date, WeekRule::ISO_8601);
    info!(%date, week, "date resolved to week number");
    println!("{week}");
    Ok(())
}

/// Picks the reference year: CLI flag, then config, then the current year.
fn resolve_reference_year(flag: Option<i32>, config: &WeektrayConfig, current: i32) -> i32 {
    flag.or(config.convert.reference_year).unwrap_or(current)
}
