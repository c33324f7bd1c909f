use social_graph::GraphError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't open the current directory: {0}")]
    RootNotFound(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Invalid signup: {0}")]
    InvalidSignup(String),

    #[error("Login failed for {0}")]
    LoginFailed(String),

    #[error("No pending friend request from {0} to {1}")]
    RequestNotFound(String, String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    GraphError(#[from] GraphError),
}
