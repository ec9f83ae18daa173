//! Now command: print the current week number.

use anyhow::Result;
use chrono::Local;
use tracing::{info, info_span};

use weektray_weekdate::{WeekRule, week_number};

/// Print the week number of today per the local clock.
pub fn run() -> Result<()> {
    let _cmd = info_span!("now").entered();
    let today = Local::now().date_naive();
    let week = week_number(today, WeekRule::ISO_8601);
    info!(%today, week, "current week computed");
    println!("{week}");
    Ok(())
}
