use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// How often the line is redrawn.
const POLL_SECONDS: u64 = 10;

pub fn run(name: &str, minutes: i64) -> Result<(), String> {
    if minutes < 1 {
        return Err("the interval must be at least one minute".into());
    }
    let start = Utc::now();
    loop {
        print!("{}\r", status_line(name, minutes, start, Utc::now()));
        io::stdout().flush().map_err(|e| e.to_string())?;
        thread::sleep(Duration::from_secs(POLL_SECONDS));
    }
}

/// One status line: how many full intervals have passed since `start`.
fn status_line(name: &str, minutes: i64, start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let intervals = now.signed_duration_since(start).num_minutes() / minutes;
    format!("{name} | {minutes} min interval | {intervals} intervals")
}
