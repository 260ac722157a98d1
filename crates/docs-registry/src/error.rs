//! Error types for registry operations

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised by `register` / `unregister`.
///
/// Reads never fail: an empty registry is a valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Another entry already uses this display name
    #[error("duplicate service name: '{0}' is already registered")]
    DuplicateName(String),

    /// Another entry already points at this documentation path
    #[error("duplicate docs path: '{0}' is already registered")]
    DuplicatePath(String),

    /// No entry with this display name
    #[error("service not found: '{0}'")]
    NotFound(String),

    /// Entry violates the input constraints (empty name, absolute URL, ...)
    #[error("invalid service entry: {0}")]
    InvalidEntry(String),

    /// The registry was frozen at startup and accepts no further writes
    #[error("registry is read-only")]
    ReadOnly,
}

impl RegistryError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RegistryError::DuplicateName(_) => 409,
            RegistryError::DuplicatePath(_) => 409,
            RegistryError::NotFound(_) => 404,
            RegistryError::InvalidEntry(_) => 400,
            RegistryError::ReadOnly => 403,
        }
    }
}
