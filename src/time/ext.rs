use crate::error::{Error, Result};
use crate::time::format::{FormatOptions, human_readable_time};

pub trait HumanReadableTimeExt {
    /// displays the duration in whole seconds, e.g. "1 hr 02 min 03 sec"
    fn human_readable(&self, options: FormatOptions) -> Result<String>;
}

impl HumanReadableTimeExt for std::time::Duration {
    fn human_readable(&self, options: FormatOptions) -> Result<String> {
        let seconds = i64::try_from(self.as_secs()).map_err(|_| {
            Error::OutOfRange(format!("{} seconds does not fit in i64", self.as_secs()))
        })?;
        human_readable_time(seconds, options)
    }
}

impl HumanReadableTimeExt for chrono::TimeDelta {
    fn human_readable(&self, options: FormatOptions) -> Result<String> {
        // num_seconds truncates toward zero, so check the sign first
        if *self < chrono::TimeDelta::zero() {
            return Err(Error::InvalidArgument(format!(
                "duration must be non-negative, got {}",
                self
            )));
        }
        human_readable_time(self.num_seconds(), options)
    }
}
