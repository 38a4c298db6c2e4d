use crate::object::{self, NullOrder};
use crate::utils::error::{Result, UtilError};
use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

/// Tries each pattern in order. Patterns without a time component produce
/// midnight of the parsed day.
pub fn parse(s: &str, patterns: &[&str]) -> Result<NaiveDateTime> {
    if patterns.is_empty() {
        return Err(UtilError::empty_input("date patterns"));
    }

    let s = s.trim();
    for pattern in patterns {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(s, pattern) {
            tracing::debug!("parsed '{}' with pattern '{}'", s, pattern);
            return Ok(parsed);
        }
        if let Ok(day) = NaiveDate::parse_from_str(s, pattern) {
            tracing::debug!("parsed '{}' as a date with pattern '{}'", s, pattern);
            return Ok(day.and_time(NaiveTime::MIN));
        }
    }

    Err(UtilError::ParseDate {
        value: s.to_string(),
        patterns: patterns.join(", "),
    })
}

pub fn parse_or(s: Option<&str>, patterns: &[&str], default: NaiveDateTime) -> NaiveDateTime {
    s.and_then(|s| parse(s, patterns).ok()).unwrap_or(default)
}

/// `Ok(None)` for a missing date; an unusable pattern is an error.
pub fn format(date: Option<&NaiveDateTime>, pattern: &str) -> Result<Option<String>> {
    let Some(date) = date else {
        return Ok(None);
    };

    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).map_err(|_| UtilError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: "unsupported strftime specifier".to_string(),
    })?;
    Ok(Some(out))
}

/// Milliseconds since the Unix epoch, interpreted as UTC.
pub fn from_millis(millis: Option<i64>) -> Option<NaiveDateTime> {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.naive_utc())
}

pub fn to_millis(date: &NaiveDateTime) -> i64 {
    date.and_utc().timestamp_millis()
}

pub fn add_days(date: &NaiveDateTime, days: i64) -> Result<NaiveDateTime> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| overflow(format!("add {} days", days)))
}

pub fn add_hours(date: &NaiveDateTime, hours: i64) -> Result<NaiveDateTime> {
    TimeDelta::try_hours(hours)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| overflow(format!("add {} hours", hours)))
}

/// Lands on the last day of the month when the day does not exist there.
pub fn add_months(date: &NaiveDateTime, months: i32) -> Result<NaiveDateTime> {
    let delta = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    };
    shifted.ok_or_else(|| overflow(format!("add {} months", months)))
}

pub fn truncate(date: &NaiveDateTime, unit: DateUnit) -> NaiveDateTime {
    let midnight = date.date().and_time(NaiveTime::MIN);
    let truncated = match unit {
        DateUnit::Second => date.with_nanosecond(0),
        DateUnit::Minute => date.with_nanosecond(0).and_then(|d| d.with_second(0)),
        DateUnit::Hour => date
            .with_nanosecond(0)
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_minute(0)),
        DateUnit::Day => Some(midnight),
        DateUnit::Month => midnight.with_day(1),
        DateUnit::Year => midnight.with_ordinal(1),
    };
    truncated.unwrap_or(midnight)
}

pub fn is_same_day(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn compare(a: Option<&NaiveDateTime>, b: Option<&NaiveDateTime>, nulls: NullOrder) -> Ordering {
    object::compare(a, b, nulls)
}

fn overflow(operation: String) -> UtilError {
    UtilError::DateOverflow { operation }
}
