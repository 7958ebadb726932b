//! Integration tests for periods and dates

use std::time::Duration;

use chrono::{TimeZone, Utc};
use trove_util::{format_period, format_relative, parse_date, parse_period};

#[test]
fn periods_parse_and_format() {
    let period = parse_period("1 day, 2 hours 30 minutes").unwrap();
    assert_eq!(period, Duration::from_secs(86_400 + 2 * 3_600 + 30 * 60));
    assert_eq!(format_period(period), "1d 2h 30m");
}

#[test]
fn dates_and_relative_times() {
    let posted = parse_date("2024-05-01 09:00:00").unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap();
    assert_eq!(format_relative(posted, now), "2 days ago");
    assert_eq!(format_relative(now, posted), "in 2 days");
}
