//! Error types for annolink.

use thiserror::Error;

/// Result type for annolink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for annolink operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The ranking endpoint could not be reached or refused the request.
    #[error("Ranking transport failed: {0}")]
    Transport(String),

    /// The ranking endpoint answered with something we could not interpret.
    #[error("Invalid ranking response: {0}")]
    InvalidResponse(String),

    /// The referenced project does not exist.
    #[error("Project [{0}] does not exist")]
    ProjectNotFound(u64),

    /// The user may not view the requested project data.
    #[error("User [{user}] has no permission to access project [{project}]")]
    PermissionDenied {
        /// Username of the denied user.
        user: String,
        /// Identifier of the project.
        project: u64,
    },

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport(msg.into())
    }

    /// Create an invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Error::InvalidResponse(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a permission denied error.
    pub fn permission_denied(user: impl Into<String>, project: u64) -> Self {
        Error::PermissionDenied {
            user: user.into(),
            project,
        }
    }
}
