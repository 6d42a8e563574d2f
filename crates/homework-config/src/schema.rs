//! Configuration schema definitions.

use homework_common::{ChatId, HomeworkError};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Main configuration structure for the homework bot.
///
/// Built once at startup and handed to every component that needs it.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Practicum homework API configuration.
    pub practicum: PracticumConfig,
    /// Telegram bot configuration.
    pub telegram: TelegramConfig,
    /// Polling cadence.
    pub polling: PollingConfig,
}

/// Practicum homework API configuration.
#[derive(Clone, Serialize)]
pub struct PracticumConfig {
    /// OAuth token for the homework API.
    #[serde(skip_serializing)]
    pub token: String,
    /// Homework statuses endpoint.
    pub endpoint: String,
}

/// Telegram bot configuration.
#[derive(Clone, Serialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather.
    #[serde(skip_serializing)]
    pub token: String,
    /// Chat that receives the notifications.
    pub chat_id: ChatId,
    /// Base URL of the Bot API.
    pub api_url: String,
}

/// Polling configuration.
#[derive(Debug, Clone, Serialize)]
pub struct PollingConfig {
    /// Seconds to sleep between two polls.
    pub retry_period_secs: u64,
}

impl PollingConfig {
    /// The sleep between two iterations.
    pub const fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for PracticumConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumConfig")
            .field("token", &redact(&self.token))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &redact(&self.token))
            .field("chat_id", &self.chat_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<(), HomeworkError> {
    let url = Url::parse(value)
        .map_err(|e| HomeworkError::config(format!("{name} is not a valid URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(HomeworkError::config(format!(
            "{name} must use http or https, got {other}"
        ))),
    }
}

impl Config {
    /// Validates the non-secret parts of the configuration.
    ///
    /// Secrets are checked separately by [`crate::check_tokens`] so the
    /// caller can report them with the right severity.
    pub fn validate(&self) -> Result<(), HomeworkError> {
        validate_http_url("PRACTICUM_ENDPOINT", &self.practicum.endpoint)?;
        validate_http_url("TELEGRAM_API_URL", &self.telegram.api_url)?;

        if self.polling.retry_period_secs == 0 {
            return Err(HomeworkError::config(
                "RETRY_PERIOD must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_tokens() {
        let mut config = Config::default();
        config.practicum.token = "practicum-secret".to_string();
        config.telegram.token = "telegram-secret".to_string();

        let debug = format!("{config:?}");
        assert!(!debug.contains("practicum-secret"));
        assert!(!debug.contains("telegram-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_retry_period_duration() {
        let polling = PollingConfig {
            retry_period_secs: 42,
        };
        assert_eq!(polling.retry_period(), Duration::from_secs(42));
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = Config::default();
        config.practicum.endpoint = "ftp://example.com/".to_string();
        assert!(config.validate().is_err());

        config.practicum.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_retry_period() {
        let mut config = Config::default();
        config.polling.retry_period_secs = 0;
        assert!(config.validate().is_err());
    }
}
