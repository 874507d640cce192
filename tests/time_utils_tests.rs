use aws_credentials_tools::utils::time::{age_days, format_timestamp, is_stale, parse_timestamp};
use chrono::{Datelike, Duration, Timelike};

#[test]
fn test_parse_valid_timestamp() {
    let dt = parse_timestamp("2025-10-07T10:30:45.123456Z").unwrap();
    assert_eq!(dt.year(), 2025);
    assert_eq!(dt.month(), 10);
    assert_eq!(dt.day(), 7);
    assert_eq!(dt.hour(), 10);
    assert_eq!(dt.minute(), 30);
    assert_eq!(dt.second(), 45);
}

#[test]
fn test_parse_timestamp_with_offset_converts_to_utc() {
    let dt = parse_timestamp("2025-10-07T12:30:45+02:00").unwrap();
    assert_eq!(dt.hour(), 10);
}

#[test]
fn test_parse_invalid_timestamp() {
    assert!(parse_timestamp("not-a-timestamp").is_err());
    assert!(parse_timestamp("").is_err());
}

#[test]
fn test_format_timestamp() {
    let dt = parse_timestamp("2025-10-07T10:30:45Z").unwrap();
    assert_eq!(format_timestamp(&dt), "2025-10-07 10:30:45 UTC");
}

#[test]
fn test_age_is_floor_of_hours_over_24() {
    let now = parse_timestamp("2025-10-07T10:30:45Z").unwrap();
    for hours in [0i64, 1, 23, 24, 25, 71, 72, 2400, 2401] {
        let created = now - Duration::hours(hours);
        assert_eq!(age_days(&created, &now), hours / 24, "hours = {}", hours);
    }
}

#[test]
fn test_age_ignores_partial_days() {
    let now = parse_timestamp("2025-10-07T10:30:45Z").unwrap();
    let created = now - Duration::days(90) - Duration::minutes(59);
    assert_eq!(age_days(&created, &now), 90);
    assert!(!is_stale(age_days(&created, &now), 90));
}

#[test]
fn test_staleness_across_threshold() {
    let now = parse_timestamp("2025-10-07T00:00:00Z").unwrap();
    let threshold = 90;
    for days in 0..200 {
        let created = now - Duration::days(days);
        let age = age_days(&created, &now);
        assert_eq!(is_stale(age, threshold), days > threshold);
    }
}
