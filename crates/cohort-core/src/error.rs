//! Error types for the Cohort system.

use thiserror::Error;

/// Validation and lookup failures reported by the registries.
///
/// Every variant is recoverable by the caller: validation runs before
/// any write, so a failed operation leaves the stored collections
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CohortError {
    /// A required field was empty after trimming.
    #[error("required field is empty: {field}")]
    MissingField { field: &'static str },

    #[error("email already exists: {email}")]
    DuplicateEmail { email: String },

    #[error("username already exists: {username}")]
    DuplicateUsername { username: String },

    #[error("name already exists: {name}")]
    DuplicateName { name: String },

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A membership operation was invoked with nothing selected.
    #[error("no {entity} selected")]
    EmptySelection { entity: &'static str },

    #[error("storage error: {0}")]
    Storage(String),
}

pub type CohortResult<T> = Result<T, CohortError>;
