//! Default values and environment variable names.

use crate::schema::*;
use homework_common::ChatId;

/// Seconds between two polls of the homework API.
pub const RETRY_PERIOD: u64 = 600;

/// Homework statuses endpoint.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Telegram Bot API base URL.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Environment variable holding the homework API token.
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat.
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
/// Optional override for [`RETRY_PERIOD`].
pub const RETRY_PERIOD_VAR: &str = "RETRY_PERIOD";
/// Optional override for [`ENDPOINT`].
pub const ENDPOINT_VAR: &str = "PRACTICUM_ENDPOINT";
/// Optional override for [`TELEGRAM_API_URL`].
pub const TELEGRAM_API_URL_VAR: &str = "TELEGRAM_API_URL";

impl Default for Config {
    fn default() -> Self {
        Self {
            practicum: PracticumConfig::default(),
            telegram: TelegramConfig::default(),
            polling: PollingConfig::default(),
        }
    }
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            endpoint: ENDPOINT.to_string(),
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            chat_id: ChatId(String::new()),
            api_url: TELEGRAM_API_URL.to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            retry_period_secs: RETRY_PERIOD,
        }
    }
}
