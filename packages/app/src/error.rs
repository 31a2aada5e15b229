use api::ApiError;
use thiserror::Error;

/// Failures of session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Transport or server failure from the backend.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotAuthenticated,
}
