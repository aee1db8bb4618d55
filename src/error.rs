use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failure raised when a structural precondition of a call is violated.
///
/// Missing data (empty rows, absent categories, all-NaN columns) is never an
/// error; it yields zero or empty aggregates instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
