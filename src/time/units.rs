//! Fixed unit ratios and the conversions between seconds and larger units.
//!
//! The `seconds_to_*` helpers return fractional values and never round;
//! flooring is left to the formatter.

pub const SECONDS_IN_MINUTE: i64 = 60;
pub const MINUTES_IN_HOUR: i64 = 60;
pub const HOURS_IN_DAY: i64 = 24;
pub const DAYS_IN_WEEK: i64 = 7;

pub const ONE_MINUTE: i64 = SECONDS_IN_MINUTE;
pub const ONE_HOUR: i64 = ONE_MINUTE * MINUTES_IN_HOUR;
pub const ONE_DAY: i64 = ONE_HOUR * HOURS_IN_DAY;
pub const ONE_WEEK: i64 = ONE_DAY * DAYS_IN_WEEK;

pub fn seconds_to_weeks(seconds: i64) -> f64 {
    seconds as f64 * (1.0 / ONE_WEEK as f64)
}

pub fn seconds_to_days(seconds: i64) -> f64 {
    seconds as f64 * (1.0 / ONE_DAY as f64)
}

pub fn seconds_to_hours(seconds: i64) -> f64 {
    seconds as f64 * (1.0 / ONE_HOUR as f64)
}

pub fn seconds_to_minutes(seconds: i64) -> f64 {
    seconds as f64 * (1.0 / ONE_MINUTE as f64)
}

pub fn weeks_to_seconds(weeks: i64) -> i64 {
    weeks * ONE_WEEK
}

pub fn days_to_seconds(days: i64) -> i64 {
    days * ONE_DAY
}

pub fn hours_to_seconds(hours: i64) -> i64 {
    hours * ONE_HOUR
}

pub fn minutes_to_seconds(minutes: i64) -> i64 {
    minutes * ONE_MINUTE
}
