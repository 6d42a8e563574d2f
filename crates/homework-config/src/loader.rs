//! Configuration loading from the process environment.

use crate::defaults::*;
use crate::schema::Config;
use homework_common::{ChatId, HomeworkError, Result};
use tracing::debug;

/// Loads [`Config`] from environment variables, after reading a `.env` file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Creates a loader that reads `.env` from the working directory.
    pub const fn new() -> Self {
        Self
    }

    /// Loads configuration from the process environment.
    ///
    /// A missing dotenv file is not an error; variables may come from the
    /// real environment. Missing secrets are left empty for
    /// [`crate::check_tokens`] to report.
    pub fn load(&self) -> Result<Config> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No dotenv file loaded: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        config.practicum.token = lookup(PRACTICUM_TOKEN_VAR).unwrap_or_default();
        config.telegram.token = lookup(TELEGRAM_TOKEN_VAR).unwrap_or_default();
        config.telegram.chat_id = ChatId(lookup(TELEGRAM_CHAT_ID_VAR).unwrap_or_default());

        if let Some(endpoint) = non_blank(lookup(ENDPOINT_VAR)) {
            config.practicum.endpoint = endpoint;
        }

        if let Some(api_url) = non_blank(lookup(TELEGRAM_API_URL_VAR)) {
            config.telegram.api_url = api_url;
        }

        if let Some(period) = non_blank(lookup(RETRY_PERIOD_VAR)) {
            config.polling.retry_period_secs = period.trim().parse().map_err(|e| {
                HomeworkError::config(format!(
                    "{RETRY_PERIOD_VAR} must be a whole number of seconds, got {period:?}: {e}"
                ))
            })?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
