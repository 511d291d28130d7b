//! Soft relative-age labels for entries.
//!
//! # Responsibility
//! - Map a creation instant plus an explicit "now" into a coarse label.
//!
//! # Invariants
//! - `humanize` is pure; the wall clock is only read by `now_epoch_ms`.
//! - Months are fixed 30-day spans and years fixed 365-day spans.
//! - Negative ages (created after `now`) are clamped to zero.

use std::time::{SystemTime, UNIX_EPOCH};

const MINUTE_SECS: i64 = 60;
const HOUR_SECS: i64 = 60 * MINUTE_SECS;
const DAY_SECS: i64 = 24 * HOUR_SECS;
const WEEK_SECS: i64 = 7 * DAY_SECS;
const MONTH_SECS: i64 = 30 * DAY_SECS;
const YEAR_SECS: i64 = 365 * DAY_SECS;

/// Returns the current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Labels the age of `created_at_ms` as seen at `now_ms`.
///
/// Both inputs are Unix epoch milliseconds. Examples: "Just now",
/// "A minute ago", "2 hours ago", "A week ago", "Few months ago".
pub fn humanize(created_at_ms: i64, now_ms: i64) -> String {
    let age_secs = now_ms.saturating_sub(created_at_ms).max(0) / 1000;

    if age_secs < MINUTE_SECS {
        return "Just now".to_string();
    }

    if age_secs < HOUR_SECS {
        return plural(age_secs / MINUTE_SECS, "A minute ago", "minutes");
    }

    if age_secs < DAY_SECS {
        return plural(age_secs / HOUR_SECS, "An hour ago", "hours");
    }

    if age_secs < WEEK_SECS {
        return plural(age_secs / DAY_SECS, "A day ago", "days");
    }

    if age_secs < MONTH_SECS {
        return plural(age_secs / WEEK_SECS, "A week ago", "weeks");
    }

    if age_secs < YEAR_SECS {
        let months = age_secs / MONTH_SECS;
        return match months {
            1 => "A month ago".to_string(),
            2 => "Few months ago".to_string(),
            _ => format!("{months} months ago"),
        };
    }

    plural(age_secs / YEAR_SECS, "A year ago", "years")
}

fn plural(count: i64, singular: &str, unit: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{count} {unit} ago")
    }
}
