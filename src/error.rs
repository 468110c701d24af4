use thiserror::Error;

/// Errors from parsing squares and directions given on the command line.
/// Table generation itself cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("invalid square: {0} (expected a name like e4 or an index 0-63)")]
  InvalidSquare(String),

  #[error("invalid direction: {0}")]
  InvalidDirection(String),
}
