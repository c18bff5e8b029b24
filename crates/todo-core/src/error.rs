//! Error types for `todo-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A write payload broke a model-level constraint.
  #[error("{field} {reason}")]
  Validation {
    field:  &'static str,
    reason: &'static str,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
