use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// input the formatter refuses, e.g. a negative duration
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// a duration that does not fit into i64 seconds
    #[error("Out of range: {0}")]
    OutOfRange(String),
}
