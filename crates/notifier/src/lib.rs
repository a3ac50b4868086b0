//! Notification delivery with duplicate suppression.
//!
//! The `MessageSink` trait is the transport seam; production uses
//! [`telegram::TelegramSink`], tests use recording fakes. The dedup policy is
//! pure string equality against the last *delivered* text: a failed send
//! never updates the marker, so a message that failed can never be suppressed
//! as a duplicate of itself.

pub mod telegram;

use async_trait::async_trait;

use reviewwatch_common::error::AppError;

pub use telegram::TelegramSink;

/// Transport seam for outbound messages.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver one plain-text message to the configured channel.
    async fn send(&self, text: &str) -> Result<(), AppError>;
}

/// Outcome of a notify call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The message was delivered through the sink.
    Sent,
    /// The message equalled the last delivered text and was not sent.
    Suppressed,
}

/// Notifier: delivers through a sink, suppressing exact repeats of the
/// immediately preceding delivered message.
pub struct Notifier<S> {
    sink: S,
}

impl<S: MessageSink> Notifier<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Deliver `text` unless it exactly equals `*last_sent`.
    ///
    /// `last_sent` is owned by the watcher's loop state and only ever records
    /// text that was actually delivered; a `Delivery` failure leaves it
    /// untouched so the send stays retryable.
    pub async fn notify(
        &self,
        last_sent: &mut Option<String>,
        text: &str,
    ) -> Result<Delivery, AppError> {
        if last_sent.as_deref() == Some(text) {
            tracing::debug!("Suppressing duplicate notification");
            return Ok(Delivery::Suppressed);
        }

        self.sink.send(text).await?;
        *last_sent = Some(text.to_string());
        tracing::info!("Notification delivered");
        Ok(Delivery::Sent)
    }
}
