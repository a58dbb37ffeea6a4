//! Domain errors for user operations.

use thiserror::Error;

use crate::users::model::UserId;

/// Expected, locally-anticipated failures of a user operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// A required creation field was missing or empty.
    #[error("Name and email are required")]
    InvalidInput,

    /// No record carries the requested id.
    #[error("User not found")]
    NotFound(UserId),
}

pub type UserResult<T> = Result<T, UserError>;
