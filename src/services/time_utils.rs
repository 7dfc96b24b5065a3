use chrono::{Datelike, NaiveDate, Weekday};
use serde_json::json;

use crate::error::{AppError, AppResult};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|err| {
        AppError::validation_with_details(
            "invalid date format",
            json!({"value": value, "error": err.to_string()}),
        )
    })
}

pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parses "H:MM", "HH:MM" or "HH:MM:SS" into minutes since midnight.
/// Malformed clock strings are rejected loudly; a silent mis-parse here
/// would corrupt every downstream hours comparison.
pub fn to_minutes(value: &str) -> AppResult<i64> {
    let trimmed = value.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(malformed_clock(value, "expected HH:MM or HH:MM:SS"));
    }

    let hours: i64 = parts[0]
        .parse()
        .map_err(|_| malformed_clock(value, "hour is not a number"))?;
    let minutes: i64 = parts[1]
        .parse()
        .map_err(|_| malformed_clock(value, "minute is not a number"))?;
    if !(0..=24).contains(&hours) {
        return Err(malformed_clock(value, "hour out of range"));
    }
    if !(0..60).contains(&minutes) {
        return Err(malformed_clock(value, "minute out of range"));
    }
    if let Some(raw_seconds) = parts.get(2) {
        let seconds: i64 = raw_seconds
            .parse()
            .map_err(|_| malformed_clock(value, "second is not a number"))?;
        if !(0..60).contains(&seconds) {
            return Err(malformed_clock(value, "second out of range"));
        }
    }

    Ok(hours * 60 + minutes)
}

/// Close times numerically before the open time wrap past midnight.
pub fn adjusted_close(open: i64, close: i64) -> i64 {
    if close < open {
        close + MINUTES_PER_DAY
    } else {
        close
    }
}

/// Inclusive-endpoint overlap between a venue's open interval and a
/// requested window, both in minutes since midnight. Either side may wrap
/// past midnight, so the window is also tested shifted a day in each
/// direction (a 22:00-02:00 venue must match both 23:00-01:00 and
/// 00:30-01:30).
pub fn windows_overlap(open: i64, close: i64, range_start: i64, range_end: i64) -> bool {
    let close = adjusted_close(open, close);
    let range_end = adjusted_close(range_start, range_end);

    let hit = |start: i64, end: i64| open <= end && close >= start;
    hit(range_start, range_end)
        || hit(range_start + MINUTES_PER_DAY, range_end + MINUTES_PER_DAY)
        || hit(range_start - MINUTES_PER_DAY, range_end - MINUTES_PER_DAY)
}

fn malformed_clock(value: &str, problem: &str) -> AppError {
    AppError::validation_with_details(
        "invalid clock time",
        json!({"value": value, "problem": problem}),
    )
}
