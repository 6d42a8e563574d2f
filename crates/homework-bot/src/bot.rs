//! Wiring of the production fetcher, sink, and polling loop.

use crate::error::{BotError, BotResult};
use crate::notifier::{Notifier, TelegramSink};
use crate::poller::Poller;
use homework_api::PracticumClient;
use homework_config::{check_tokens, missing_tokens, Config};
use std::sync::Arc;
use tracing::{error, info};

/// Checks secrets and settings once at startup.
///
/// Failures are logged as CRITICAL; the caller is expected to exit.
pub fn verify_config(config: &Config) -> BotResult<()> {
    if !check_tokens(config) {
        let err = BotError::MissingCredentials(missing_tokens(config));
        error!(severity = "CRITICAL", "{}", err);
        return Err(err);
    }

    if let Err(e) = config.validate() {
        error!(severity = "CRITICAL", "Invalid configuration: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Main bot structure.
pub struct HomeworkBot {
    config: Arc<Config>,
}

impl HomeworkBot {
    /// Creates a new bot instance from a configuration that passed
    /// [`verify_config`].
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration the bot runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the production poller with its window starting now.
    pub fn poller(&self) -> BotResult<Poller<PracticumClient, TelegramSink>> {
        let source = PracticumClient::new(&self.config.practicum)?;
        let sink = TelegramSink::new(&self.config.telegram)?;
        let notifier = Notifier::new(sink, self.config.telegram.chat_id.clone());

        Ok(Poller::new(
            source,
            notifier,
            self.config.polling.retry_period(),
            chrono::Utc::now().timestamp(),
        ))
    }

    /// Starts the bot. Only returns if the clients cannot be built.
    pub async fn start(&self) -> BotResult<()> {
        info!(
            endpoint = %self.config.practicum.endpoint,
            chat_id = %self.config.telegram.chat_id,
            "Starting homework status bot"
        );

        let mut poller = self.poller()?;
        poller.run().await;
        Ok(())
    }
}
