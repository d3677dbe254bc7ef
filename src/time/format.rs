use crate::error::{Error, Result};
use crate::time::units::{
    ONE_DAY, ONE_HOUR, ONE_MINUTE, ONE_WEEK, days_to_seconds, hours_to_seconds,
    minutes_to_seconds, weeks_to_seconds,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which larger units are broken out, and whether values are zero padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatOptions {
    pub include_weeks: bool,
    pub include_days: bool,
    pub include_hours: bool,
    /// Left-pad every value after the leading one to 2 digits, so the output
    /// reads clock style: `"1 hr 02 min 03 sec"`, `"1 wks 00 sec"`.
    ///
    /// The leading value is intentionally left as-is; `61` with padding is
    /// `"1 min 01 sec"`, not `"01 min 01 sec"`.
    pub pad: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_weeks: false,
            include_days: false,
            include_hours: true,
            pad: true,
        }
    }
}

impl FormatOptions {
    pub fn all() -> Self {
        Self {
            include_weeks: true,
            include_days: true,
            include_hours: true,
            pad: true,
        }
    }

    pub fn none() -> Self {
        Self {
            include_weeks: false,
            include_days: false,
            include_hours: false,
            pad: false,
        }
    }

    pub fn with_weeks(mut self, on: bool) -> Self {
        self.include_weeks = on;
        self
    }

    pub fn with_days(mut self, on: bool) -> Self {
        self.include_days = on;
        self
    }

    pub fn with_hours(mut self, on: bool) -> Self {
        self.include_hours = on;
        self
    }

    pub fn with_pad(mut self, on: bool) -> Self {
        self.pad = on;
        self
    }
}

/// Per-unit values of a duration. Units whose flag was off are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Breakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<i64>,
    pub minutes: i64,
    pub seconds: i64,
}

impl Breakdown {
    /// Sum of all units in seconds. Saturates at `i64::MAX` for hand-built
    /// values; anything produced by [`breakdown`] is always exact.
    pub fn total_seconds(&self) -> i64 {
        let parts = [
            self.weeks.unwrap_or(0).saturating_mul(ONE_WEEK),
            self.days.unwrap_or(0).saturating_mul(ONE_DAY),
            self.hours.unwrap_or(0).saturating_mul(ONE_HOUR),
            self.minutes.saturating_mul(ONE_MINUTE),
            self.seconds,
        ];
        parts.into_iter().fold(0i64, i64::saturating_add)
    }

    fn is_zero(&self) -> bool {
        self.weeks.unwrap_or(0) == 0
            && self.days.unwrap_or(0) == 0
            && self.hours.unwrap_or(0) == 0
            && self.minutes == 0
            && self.seconds == 0
    }

    /// Render as e.g. `"1 days 01 hr 01 min 01 sec"`.
    ///
    /// Zero-valued units are skipped, except seconds which always close the
    /// string. With `pad`, every value after the leading one is padded to two
    /// digits. An all-zero breakdown renders as `"0 sec"`.
    pub fn render(&self, pad: bool) -> String {
        if self.is_zero() {
            return "0 sec".to_string();
        }

        let fragments = [
            (self.weeks.unwrap_or(0), "wks"),
            (self.days.unwrap_or(0), "days"),
            (self.hours.unwrap_or(0), "hr"),
            (self.minutes, "min"),
        ];

        let mut out = String::new();
        for (value, label) in fragments.into_iter().filter(|(v, _)| *v > 0) {
            push_fragment(&mut out, value, label, pad);
        }
        push_fragment(&mut out, self.seconds, "sec", pad);

        out.trim().to_string()
    }
}

fn push_fragment(out: &mut String, value: i64, label: &str, pad: bool) {
    if pad && !out.is_empty() {
        out.push_str(&format!("{:02} {} ", value, label));
    } else {
        out.push_str(&format!("{} {} ", value, label));
    }
}

/// Split `seconds` into the units enabled in `options`, largest first.
pub fn breakdown(seconds: i64, options: FormatOptions) -> Result<Breakdown> {
    if seconds < 0 {
        return Err(Error::InvalidArgument(format!(
            "duration must be non-negative, got {}",
            seconds
        )));
    }

    let mut remaining = seconds;
    let mut take = |unit: i64, to_seconds: fn(i64) -> i64| {
        let whole = remaining / unit;
        remaining -= to_seconds(whole);
        whole
    };

    let weeks = options
        .include_weeks
        .then(|| take(ONE_WEEK, weeks_to_seconds));
    let days = options.include_days.then(|| take(ONE_DAY, days_to_seconds));
    let hours = options
        .include_hours
        .then(|| take(ONE_HOUR, hours_to_seconds));
    let minutes = take(ONE_MINUTE, minutes_to_seconds);

    Ok(Breakdown {
        weeks,
        days,
        hours,
        minutes,
        seconds: remaining,
    })
}

/// A validated duration ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanReadableTime {
    breakdown: Breakdown,
    pad: bool,
}

impl HumanReadableTime {
    pub fn new(seconds: i64, options: FormatOptions) -> Result<Self> {
        Ok(Self {
            breakdown: breakdown(seconds, options)?,
            pad: options.pad,
        })
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }
}

impl fmt::Display for HumanReadableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.breakdown.render(self.pad))
    }
}

/// Converts a value in seconds to a human readable time string such as
/// `"1 hr 02 min 03 sec"`.
///
/// Fails with [`Error::InvalidArgument`] when `seconds` is negative.
pub fn human_readable_time(seconds: i64, options: FormatOptions) -> Result<String> {
    if seconds == 0 {
        return Ok("0 sec".to_string());
    }
    Ok(HumanReadableTime::new(seconds, options)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days_hours() -> FormatOptions {
        FormatOptions::none()
            .with_days(true)
            .with_hours(true)
            .with_pad(true)
    }

    #[test]
    fn test_zero_is_literal() {
        assert_eq!(human_readable_time(0, FormatOptions::default()).unwrap(), "0 sec");
        assert_eq!(human_readable_time(0, FormatOptions::all()).unwrap(), "0 sec");
        assert_eq!(human_readable_time(0, FormatOptions::none()).unwrap(), "0 sec");
    }

    #[test]
    fn test_negative_is_invalid_argument() {
        for seconds in [-1, -60, i64::MIN] {
            let err = human_readable_time(seconds, FormatOptions::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_defaults() {
        let opts = FormatOptions::default();
        assert_eq!(human_readable_time(61, opts).unwrap(), "1 min 01 sec");
        assert_eq!(human_readable_time(3661, opts).unwrap(), "1 hr 01 min 01 sec");
        assert_eq!(human_readable_time(5, opts).unwrap(), "5 sec");
    }

    #[test]
    fn test_leading_value_unpadded() {
        let opts = FormatOptions::default();
        assert_eq!(human_readable_time(3600, opts).unwrap(), "1 hr 00 sec");
        assert_eq!(human_readable_time(3723, opts).unwrap(), "1 hr 02 min 03 sec");
        assert_eq!(human_readable_time(45_296, opts).unwrap(), "12 hr 34 min 56 sec");
    }

    #[test]
    fn test_days_and_hours() {
        assert_eq!(
            human_readable_time(90061, days_hours()).unwrap(),
            "1 days 01 hr 01 min 01 sec"
        );
    }

    #[test]
    fn test_week_consumes_everything() {
        let opts = FormatOptions::none().with_weeks(true).with_pad(true);
        assert_eq!(human_readable_time(604_800, opts).unwrap(), "1 wks 00 sec");
    }

    #[test]
    fn test_all_units() {
        let opts = FormatOptions::all();
        assert_eq!(
            human_readable_time(2 * ONE_WEEK + ONE_DAY + 5, opts).unwrap(),
            "2 wks 01 days 05 sec"
        );
        assert_eq!(
            human_readable_time(ONE_WEEK + 2 * ONE_DAY + 3 * ONE_HOUR + 4 * ONE_MINUTE + 5, opts)
                .unwrap(),
            "1 wks 02 days 03 hr 04 min 05 sec"
        );
    }

    #[test]
    fn test_padding_after_leading_value() {
        let opts = FormatOptions::all();
        for seconds in [1, 61, 3_601, 86_401, 604_801, 1_000_000, 9_876_543] {
            let text = human_readable_time(seconds, opts).unwrap();
            let values: Vec<&str> = text.split(' ').step_by(2).collect();
            for value in &values[1..] {
                assert!(value.len() >= 2, "{} in {:?}", value, text);
            }
        }
    }

    #[test]
    fn test_unpadded() {
        let opts = FormatOptions::default().with_pad(false);
        assert_eq!(human_readable_time(3661, opts).unwrap(), "1 hr 1 min 1 sec");
        assert_eq!(human_readable_time(60, opts).unwrap(), "1 min 0 sec");
    }

    #[test]
    fn test_hours_excluded_folds_into_minutes() {
        let opts = FormatOptions::none().with_pad(true);
        assert_eq!(human_readable_time(3661, opts).unwrap(), "61 min 01 sec");
    }

    #[test]
    fn test_days_without_hours() {
        let opts = FormatOptions::none().with_days(true);
        assert_eq!(human_readable_time(ONE_DAY + 3601, opts).unwrap(), "1 days 60 min 1 sec");
    }

    #[test]
    fn test_large_duration() {
        let b = breakdown(i64::MAX, FormatOptions::all()).unwrap();
        assert_eq!(b.total_seconds(), i64::MAX);
        assert!(human_readable_time(i64::MAX, FormatOptions::all()).unwrap().ends_with("07 sec"));
    }

    #[test]
    fn test_breakdown_skips_disabled_units() {
        let b = breakdown(90061, FormatOptions::default()).unwrap();
        assert_eq!(b.weeks, None);
        assert_eq!(b.days, None);
        assert_eq!(b.hours, Some(25));
        assert_eq!(b.minutes, 1);
        assert_eq!(b.seconds, 1);
    }

    #[test]
    fn test_round_trip_all_option_combinations() {
        let samples = [1, 59, 60, 61, 3599, 3600, 86_399, 86_400, 90_061, 604_799, 604_800, 1_234_567];
        for mask in 0..16u8 {
            let opts = FormatOptions {
                include_weeks: mask & 1 != 0,
                include_days: mask & 2 != 0,
                include_hours: mask & 4 != 0,
                pad: mask & 8 != 0,
            };
            for seconds in samples {
                let b = breakdown(seconds, opts).unwrap();
                assert_eq!(b.total_seconds(), seconds, "{:?} {}", opts, seconds);
            }
        }
    }

    #[test]
    fn test_hand_built_breakdown_does_not_overflow() {
        let b = Breakdown {
            weeks: Some(i64::MAX),
            days: Some(i64::MAX),
            minutes: 1,
            ..Default::default()
        };
        assert_eq!(b.total_seconds(), i64::MAX);
        assert!(b.render(true).starts_with(&format!("{} wks ", i64::MAX)));
        assert_eq!(Breakdown::default().render(true), "0 sec");
    }

    #[test]
    fn test_single_digit_leading_minutes() {
        let opts = FormatOptions::default();
        assert_eq!(human_readable_time(61, opts).unwrap(), "1 min 01 sec");
        assert_ne!(human_readable_time(61, opts).unwrap(), "01 min 01 sec");
    }

    #[test]
    fn test_display_matches_function() {
        let hrt = HumanReadableTime::new(3661, FormatOptions::default()).unwrap();
        assert_eq!(hrt.to_string(), "1 hr 01 min 01 sec");
        assert_eq!(hrt.breakdown().hours, Some(1));
    }
}
