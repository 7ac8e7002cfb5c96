//! API Errors
//!
//! Every failure collapses into the operation that failed; the underlying
//! cause is kept only for logging.

use std::fmt;
use thiserror::Error;

/// Which remote call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Static message shown to the user
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to load users. Please try again later.",
            Operation::Create => "Failed to create user. Please try again.",
            Operation::Update => "Failed to update user. Please try again.",
            Operation::Delete => "Failed to delete user. Please try again.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Fetch => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
#[error("{operation} failed")]
pub struct ApiError {
    pub operation: Operation,
    #[source]
    cause: BoxError,
}

impl ApiError {
    pub fn new(operation: Operation, cause: impl Into<BoxError>) -> Self {
        Self {
            operation,
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
