//! Application-level errors (wraps domain errors)

use std::ops::Range;

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot draw {count} distinct keys from {}..{}", .range.start, .range.end)]
    InvalidSample { count: usize, range: Range<i64> },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
