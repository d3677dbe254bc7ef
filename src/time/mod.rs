pub mod ext;
pub mod format;
pub mod units;

pub use ext::HumanReadableTimeExt;
pub use format::{Breakdown, FormatOptions, HumanReadableTime, breakdown, human_readable_time};
