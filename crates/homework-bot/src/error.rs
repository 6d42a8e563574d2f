//! Application-wide error types using thiserror.

use homework_common::HomeworkError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration or client construction error.
    #[error("{0}")]
    Homework(#[from] HomeworkError),

    /// Required secrets are absent from the environment.
    #[error("Required environment variables are not set: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// The log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
