use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Coarse "time ago" label for a Unix timestamp in seconds.
///
/// Buckets into the largest whole unit: days, then hours, then minutes.
/// A missing, zero or out-of-range timestamp reads "recently"; anything under
/// a minute, including timestamps in the future, reads "just now".
pub fn relative_time(timestamp: Option<i64>, now: DateTime<Utc>) -> String {
    let Some(seconds) = timestamp.filter(|&ts| ts != 0) else {
        return "recently".to_string();
    };

    // Epochs too far out to subtract in milliseconds are treated as unknown
    let Some(elapsed_ms) = seconds
        .checked_mul(1000)
        .and_then(|ms| now.timestamp_millis().checked_sub(ms))
    else {
        return "recently".to_string();
    };

    let days = elapsed_ms / DAY_MS;
    let hours = elapsed_ms / HOUR_MS;
    let minutes = elapsed_ms / MINUTE_MS;

    if days > 0 {
        format!("{} day{} ago", days, plural(days))
    } else if hours > 0 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if minutes > 0 {
        format!("{} min ago", minutes)
    } else {
        "just now".to_string()
    }
}

fn plural(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}
