//! Durations and dates in human-readable form.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;

/// Milliseconds per unit. An empty unit means milliseconds.
fn unit_millis(unit: &str) -> Option<f64> {
    let millis = match unit.to_ascii_lowercase().as_str() {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "w" | "wk" | "wks" | "week" | "weeks" => WEEK,
        _ => return None,
    };
    Some(millis)
}

/// Parses a period such as `"1h 30m"`, `"2.5 days"`, or `"1500"` (ms).
///
/// Terms may be separated by whitespace or commas. Returns `None` for
/// anything unrecognized.
#[must_use]
pub fn parse_period(input: &str) -> Option<Duration> {
    let mut rest = input.trim();
    if rest.is_empty() {
        return None;
    }

    let mut total = 0.0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_end == 0 {
            return None;
        }
        let amount: f64 = rest[..number_end].parse().ok()?;
        rest = rest[number_end..].trim_start();

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        total += amount * unit_millis(&rest[..unit_end])?;
        rest = rest[unit_end..].trim_start_matches(|c: char| c.is_whitespace() || c == ',');
    }

    Duration::try_from_secs_f64(total / SECOND).ok()
}

/// Formats a duration with its largest units, e.g. `"1d 2h 5m"`.
///
/// Sub-millisecond remainders are dropped; zero formats as `"0ms"`.
#[must_use]
pub fn format_period(duration: Duration) -> String {
    let mut millis = duration.as_millis();
    if millis == 0 {
        return "0ms".to_string();
    }

    let mut parts = Vec::new();
    for (unit, size) in [("d", 86_400_000), ("h", 3_600_000), ("m", 60_000), ("s", 1_000), ("ms", 1)] {
        let count = millis / size;
        if count > 0 {
            parts.push(format!("{count}{unit}"));
            millis %= size;
        }
    }
    parts.join(" ")
}

/// Parses an RFC 3339 timestamp, `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS`
/// (also with a `T` separator). Naive forms are taken as UTC.
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Describes `from` as seen from `to`: `"3 hours ago"`, `"in 2 days"`, or
/// `"just now"` within 45 seconds.
#[must_use]
pub fn format_relative(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let delta = to.signed_duration_since(from);
    let seconds = delta.num_seconds().unsigned_abs();
    if seconds < 45 {
        return "just now".to_string();
    }

    let (count, unit) = relative_unit(seconds);
    let plural = if count == 1 { "" } else { "s" };

    if delta.num_seconds() >= 0 {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}

/// Rounded count and unit for a span. Each unit hands over to the next once
/// its rounded count would reach the next unit's size.
fn relative_unit(seconds: u64) -> (u64, &'static str) {
    let minutes = (seconds + 30) / 60;
    if minutes < 60 {
        return (minutes.max(1), "minute");
    }
    let hours = (seconds + 1_800) / 3_600;
    if hours < 24 {
        return (hours, "hour");
    }
    let days = (seconds + 43_200) / 86_400;
    if days < 30 {
        return (days, "day");
    }
    let months = days / 30;
    if months < 12 {
        return (months, "month");
    }
    ((days / 365).max(1), "year")
}
