use crate::OutputFormat;
use crate::time::{Breakdown, FormatOptions, HumanReadableTime, human_readable_time};
use anyhow::{Context, Result};
use serde::Serialize;

/// Per-flag overrides from the command line. `None` keeps the config value.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub weeks: Option<bool>,
    pub days: Option<bool>,
    pub hours: Option<bool>,
    pub pad: Option<bool>,
}

impl OptionOverrides {
    pub fn apply(&self, base: FormatOptions) -> FormatOptions {
        FormatOptions {
            include_weeks: self.weeks.unwrap_or(base.include_weeks),
            include_days: self.days.unwrap_or(base.include_days),
            include_hours: self.hours.unwrap_or(base.include_hours),
            pad: self.pad.unwrap_or(base.pad),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FormatReport {
    pub seconds: i64,
    pub text: String,
    pub breakdown: Breakdown,
}

pub fn report(seconds: i64, options: FormatOptions) -> Result<FormatReport> {
    let hrt = HumanReadableTime::new(seconds, options)?;
    Ok(FormatReport {
        seconds,
        text: hrt.to_string(),
        breakdown: *hrt.breakdown(),
    })
}

pub fn render(seconds: i64, options: FormatOptions, output: OutputFormat) -> Result<String> {
    tracing::debug!(seconds, ?options, "formatting duration");

    match output {
        OutputFormat::Text => Ok(human_readable_time(seconds, options)?),
        OutputFormat::Json => {
            let report = report(seconds, options)?;
            serde_json::to_string_pretty(&report).context("Failed to serialize report")
        }
    }
}

pub fn format(seconds: i64, options: FormatOptions, output: OutputFormat) -> Result<()> {
    println!("{}", render(seconds, options, output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_touch_set_flags() {
        let overrides = OptionOverrides {
            days: Some(true),
            pad: Some(false),
            ..Default::default()
        };
        let opts = overrides.apply(FormatOptions::default());
        assert!(!opts.include_weeks);
        assert!(opts.include_days);
        assert!(opts.include_hours);
        assert!(!opts.pad);
    }

    #[test]
    fn test_render_text() {
        let text = render(3661, FormatOptions::default(), OutputFormat::Text).unwrap();
        assert_eq!(text, "1 hr 01 min 01 sec");
    }

    #[test]
    fn test_render_json() {
        let json = render(90061, FormatOptions::all(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["seconds"], 90061);
        assert_eq!(value["text"], "1 days 01 hr 01 min 01 sec");
        assert_eq!(value["breakdown"]["weeks"], 0);
        assert_eq!(value["breakdown"]["days"], 1);
        assert_eq!(value["breakdown"]["seconds"], 1);
    }

    #[test]
    fn test_render_json_omits_disabled_units() {
        let json = render(61, FormatOptions::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["breakdown"].get("weeks").is_none());
        assert_eq!(value["breakdown"]["hours"], 0);
        assert_eq!(value["breakdown"]["minutes"], 1);
    }

    #[test]
    fn test_render_negative_fails() {
        let err = render(-1, FormatOptions::default(), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }
}
