//! Watch command: print the week number now and re-check periodically.
//!
//! Mirrors an always-on week display: the number is printed immediately,
//! then re-checked on the interval so a machine left running across a
//! week boundary still shows the right value.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use tracing::{debug, info, info_span};

use weektray_weekdate::{WeekRule, week_number};

use crate::cli::WatchArgs;
use crate::config::WeektrayConfig;

/// Run the watch loop. Re-prints only when the week number changes.
pub fn run(args: &WatchArgs, config: &WeektrayConfig) -> Result<()> {
    let _cmd = info_span!("watch").entered();
    let interval = Duration::from_secs(args.interval.unwrap_or(config.watch.interval_secs));
    info!(interval_secs = interval.as_secs(), "watching week number");

    let mut current = None;
    loop {
        let today = Local::now().date_naive();
        let week = week_number(today, WeekRule::ISO_8601);
        if current != Some(week) {
            info!(%today, week, "week number changed");
            println!("{week}");
            current = Some(week);
        } else {
            debug!(%today, week, "week number unchanged");
        }
        thread::sleep(interval);
    }
}
