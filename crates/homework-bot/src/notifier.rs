//! Delivery of notifications to the configured Telegram chat.

use async_trait::async_trait;
use homework_common::{ChatId, HomeworkError, Result};
use homework_config::TelegramConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Capability to send a text message to a chat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Sends `text` to `chat_id`.
    async fn send_text(&self, chat_id: &ChatId, text: &str) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API sink using `sendMessage`.
#[derive(Clone)]
pub struct TelegramSink {
    client: Client,
    send_message_url: String,
}

impl TelegramSink {
    /// Creates a sink for the bot described by `config`.
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| HomeworkError::delivery_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            send_message_url: format!(
                "{}/bot{}/sendMessage",
                config.api_url.trim_end_matches('/'),
                config.token
            ),
        })
    }
}

#[async_trait]
impl MessageSink for TelegramSink {
    #[instrument(skip(self, chat_id, text), fields(chat_id = %chat_id))]
    async fn send_text(&self, chat_id: &ChatId, text: &str) -> Result<()> {
        let request = SendMessageRequest {
            chat_id: chat_id.as_str(),
            text,
        };

        // The URL embeds the bot token; keep it out of error messages.
        let response = self
            .client
            .post(&self.send_message_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                HomeworkError::delivery_with_source(e.to_string(), e)
            })?;

        let status = response.status();
        let reply: Option<TelegramReply> = response.json().await.ok();

        match reply {
            Some(reply) if status.is_success() && reply.ok => Ok(()),
            Some(reply) => Err(HomeworkError::delivery(format!(
                "Telegram API returned {status}: {}",
                reply.description.unwrap_or_else(|| "no description".to_string())
            ))),
            None => Err(HomeworkError::delivery(format!(
                "Telegram API returned {status} with an unreadable body"
            ))),
        }
    }
}

/// Sends messages to the one configured chat, never failing the caller.
pub struct Notifier<M> {
    sink: M,
    chat_id: ChatId,
}

impl<M: MessageSink> Notifier<M> {
    /// Creates a notifier that delivers to `chat_id` through `sink`.
    pub const fn new(sink: M, chat_id: ChatId) -> Self {
        Self { sink, chat_id }
    }

    /// Attempts delivery and reports whether it succeeded.
    pub async fn send_message(&self, message: &str) -> bool {
        match self.sink.send_text(&self.chat_id, message).await {
            Ok(()) => {
                debug!("Message sent to chat {}", self.chat_id);
                true
            }
            Err(e) => {
                error!(kind = e.kind(), "Message not sent: {}", e);
                false
            }
        }
    }
}
