//! The poll/detect/notify loop.
//!
//! Every iteration fetches the homework answer, validates it, renders the
//! status of the most recent submission, and notifies the chat when that
//! status changed. Failures become a rendered error message that is sent
//! only when it differs from the previous one. The loop sleeps a fixed
//! period after every iteration and never ends on its own.

use crate::notifier::{MessageSink, Notifier};
use homework_api::{check_response, parse_status, HomeworkSource};
use homework_common::{HomeworkError, Result, UnixTimestamp};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Prefix of every error notification.
pub const ERROR_PREFIX: &str = "Сбой в работе программы";

/// What a single iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    /// The status changed and a notification was attempted.
    StatusNotified {
        /// Whether the sink accepted the message.
        delivered: bool,
    },
    /// The status equals the last notified one.
    StatusUnchanged,
    /// The answer held no submissions.
    NoSubmissions,
    /// A new error was reported to the chat.
    ErrorNotified {
        /// Whether the sink accepted the message.
        delivered: bool,
    },
    /// The same error as last time; logged only.
    ErrorRepeated,
}

/// Renders the chat message for a failed iteration.
pub fn render_error(error: &HomeworkError) -> String {
    format!("{ERROR_PREFIX}: {error}")
}

/// Loop controller holding the poll window and both dedup strings.
pub struct Poller<S, M> {
    source: S,
    notifier: Notifier<M>,
    retry_period: Duration,
    timestamp: UnixTimestamp,
    status: String,
    message: String,
}

impl<S, M> Poller<S, M>
where
    S: HomeworkSource,
    M: MessageSink,
{
    /// Creates a poller whose window starts at `timestamp`.
    pub const fn new(
        source: S,
        notifier: Notifier<M>,
        retry_period: Duration,
        timestamp: UnixTimestamp,
    ) -> Self {
        Self {
            source,
            notifier,
            retry_period,
            timestamp,
            status: String::new(),
            message: String::new(),
        }
    }

    /// Current lower bound of the poll window.
    pub const fn timestamp(&self) -> UnixTimestamp {
        self.timestamp
    }

    /// Last status message that was notified.
    pub fn last_status(&self) -> &str {
        &self.status
    }

    /// Last error message that was notified.
    pub fn last_error(&self) -> &str {
        &self.message
    }

    /// Runs iterations forever, sleeping the retry period after each one.
    pub async fn run(&mut self) {
        info!(
            retry_period_secs = self.retry_period.as_secs(),
            from_date = self.timestamp,
            "Polling homework statuses"
        );

        loop {
            let outcome = self.run_iteration().await;
            debug!(?outcome, "Iteration finished");
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Performs one fetch/validate/interpret/notify pass.
    #[instrument(skip(self), fields(from_date = self.timestamp))]
    pub async fn run_iteration(&mut self) -> Iteration {
        match self.poll().await {
            Ok(outcome) => outcome,
            Err(e) => self.report_error(e).await,
        }
    }

    async fn poll(&mut self) -> Result<Iteration> {
        let answer = self.source.get_api_answer(self.timestamp).await?;
        let batch = check_response(answer)?;

        let outcome = if batch.is_empty() {
            debug!("No homework updates in this window");
            Iteration::NoSubmissions
        } else {
            let updated_status = parse_status(batch.latest()?.as_ref())?;

            if updated_status == self.status {
                debug!("Homework status has not changed");
                Iteration::StatusUnchanged
            } else {
                info!("Homework status changed: {}", updated_status);
                let delivered = self.notifier.send_message(&updated_status).await;
                self.status = updated_status;
                Iteration::StatusNotified { delivered }
            }
        };

        if let Some(current_date) = batch.current_date {
            self.timestamp = current_date;
        }

        Ok(outcome)
    }

    async fn report_error(&mut self, error: HomeworkError) -> Iteration {
        let stage = match &error {
            HomeworkError::Connection { .. }
            | HomeworkError::UnexpectedStatus { .. }
            | HomeworkError::Decode(_) => "fetch",
            HomeworkError::Type { .. } | HomeworkError::MissingKey { .. } => "validate",
            HomeworkError::MissingField { .. }
            | HomeworkError::UnknownStatus { .. }
            | HomeworkError::AbsentRecord => "interpret",
            HomeworkError::Delivery { .. } | HomeworkError::Config { .. } => "internal",
        };

        let updated_message = render_error(&error);
        error!(stage, kind = error.kind(), "{}", updated_message);

        if updated_message == self.message {
            debug!("Error already reported, not notifying again");
            return Iteration::ErrorRepeated;
        }

        let delivered = self.notifier.send_message(&updated_message).await;
        self.message = updated_message;
        Iteration::ErrorNotified { delivered }
    }
}
