//! Startup credential check.

use crate::defaults::{PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR};
use crate::schema::Config;

/// Names of the required secrets that are unset or blank.
pub fn missing_tokens(config: &Config) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if config.practicum.token.trim().is_empty() {
        missing.push(PRACTICUM_TOKEN_VAR);
    }
    if config.telegram.token.trim().is_empty() {
        missing.push(TELEGRAM_TOKEN_VAR);
    }
    if config.telegram.chat_id.is_empty() {
        missing.push(TELEGRAM_CHAT_ID_VAR);
    }

    missing
}

/// Whether all three required secrets are present and non-empty.
pub fn check_tokens(config: &Config) -> bool {
    missing_tokens(config).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use homework_common::ChatId;

    fn complete() -> Config {
        let mut config = Config::default();
        config.practicum.token = "practicum".to_string();
        config.telegram.token = "telegram".to_string();
        config.telegram.chat_id = ChatId::from("100500");
        config
    }

    #[test]
    fn test_all_present() {
        let config = complete();
        assert!(check_tokens(&config));
        assert!(missing_tokens(&config).is_empty());
    }

    #[test]
    fn test_any_single_missing_fails() {
        let mut config = complete();
        config.practicum.token.clear();
        assert!(!check_tokens(&config));
        assert_eq!(missing_tokens(&config), vec!["PRACTICUM_TOKEN"]);

        let mut config = complete();
        config.telegram.token.clear();
        assert!(!check_tokens(&config));
        assert_eq!(missing_tokens(&config), vec!["TELEGRAM_TOKEN"]);

        let mut config = complete();
        config.telegram.chat_id = ChatId::from("");
        assert!(!check_tokens(&config));
        assert_eq!(missing_tokens(&config), vec!["TELEGRAM_CHAT_ID"]);
    }

    #[test]
    fn test_all_missing() {
        let config = Config::default();
        assert!(!check_tokens(&config));
        assert_eq!(
            missing_tokens(&config),
            vec!["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"]
        );
    }
}
