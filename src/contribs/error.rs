use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContribsError {
    #[error("Failed to fetch data ({0})")]
    Transport(String),

    #[error("Request timed out.")]
    Timeout,

    #[error("Invalid response - {0}")]
    MalformedResponse(String),

    #[error("{message} - User '{username}' may not exist.")]
    UserNotFound { username: String, message: String },

    #[error("Username cannot be empty.")]
    EmptyInput,

    #[error("Cancelled.")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ContribsError {
    fn from(err: serde_json::Error) -> Self {
        ContribsError::MalformedResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContribsError>;
