//! Error taxonomy shared by every stage of the polling loop.

use thiserror::Error;

/// Result type alias for homework bot operations
pub type Result<T> = std::result::Result<T, HomeworkError>;

/// Main error type for homework bot operations.
///
/// The `Display` text of each variant is what ends up in the chat when the
/// polling loop reports a failure, so it is written for the end user.
#[derive(Error, Debug)]
pub enum HomeworkError {
    /// The request never completed (DNS, connect, timeout, TLS)
    #[error("Эндпойнт недоступен: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request completed with a status other than 200 OK
    #[error("Неверный статус GET запроса: {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be decoded as JSON
    #[error("Ответ API не удалось разобрать как JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A value has the wrong shape
    #[error("{message}")]
    Type { message: String },

    /// A required key is missing from the API response
    #[error("В ответе API нет ключа \"{key}\"")]
    MissingKey { key: &'static str },

    /// A submission record lacks a required field, or it is empty
    #[error("Значение ключа \"{field}\" не существует")]
    MissingField { field: &'static str },

    /// A submission record carries a status outside the known verdicts
    #[error("В ответе API неожиданный статус: {status}")]
    UnknownStatus { status: String },

    /// No submission record was given to interpret
    #[error("Этого домашнего задания не существует")]
    AbsentRecord,

    /// The messaging sink rejected or failed to deliver a message
    #[error("Сообщение не отправлено: {message}")]
    Delivery {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors
    #[error("Ошибка конфигурации: {message}")]
    Config { message: String },
}

impl HomeworkError {
    /// Create a new connectivity error with source
    pub fn connection_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Connection {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new unexpected-status error
    pub const fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    /// Create a new type error
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type {
            message: msg.into(),
        }
    }

    /// Create a new missing-key error
    pub const fn missing_key(key: &'static str) -> Self {
        Self::MissingKey { key }
    }

    /// Create a new missing-field error
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a new unknown-status error
    pub fn unknown_status(status: impl Into<String>) -> Self {
        Self::UnknownStatus {
            status: status.into(),
        }
    }

    /// Create a new delivery error
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new delivery error with source
    pub fn delivery_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Delivery {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Short machine-friendly name of the error kind, used as a log field
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "connection",
            Self::UnexpectedStatus { .. } => "unexpected_status",
            Self::Decode(_) => "decode",
            Self::Type { .. } => "type",
            Self::MissingKey { .. } => "missing_key",
            Self::MissingField { .. } => "missing_field",
            Self::UnknownStatus { .. } => "unknown_status",
            Self::AbsentRecord => "absent_record",
            Self::Delivery { .. } => "delivery",
            Self::Config { .. } => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HomeworkError::missing_key("homeworks").to_string(),
            "В ответе API нет ключа \"homeworks\""
        );
        assert_eq!(
            HomeworkError::unknown_status("archived").to_string(),
            "В ответе API неожиданный статус: archived"
        );
        assert_eq!(
            HomeworkError::unexpected_status(503).to_string(),
            "Неверный статус GET запроса: 503"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(HomeworkError::AbsentRecord.kind(), "absent_record");
        assert_eq!(HomeworkError::missing_field("status").kind(), "missing_field");
        assert_eq!(HomeworkError::type_error("bad").kind(), "type");
        assert_eq!(HomeworkError::config("bad").kind(), "config");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = HomeworkError::connection_with_source("connection refused", io);
        assert!(err.source().is_some());
        assert_eq!(err.kind(), "connection");
    }
}
