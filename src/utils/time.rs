use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_timestamp(ts: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .context("Failed to parse timestamp")
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp for display
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Whole days elapsed between `created` and `now`, rounded down.
///
/// A creation time in the future yields a negative age.
pub fn age_days(created: &DateTime<Utc>, now: &DateTime<Utc>) -> i64 {
    now.signed_duration_since(*created)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// A key is stale once its age is strictly greater than `max_age_days`.
pub fn is_stale(age_days: i64, max_age_days: i64) -> bool {
    age_days > max_age_days
}
