//! The poll loop: fetch → validate → diff → interpret → notify.
//!
//! One cycle runs to completion before the next; `LoopState` is owned
//! exclusively by the watcher, so no locking anywhere. The watcher is the
//! outermost recovery boundary: every recoverable error is caught in
//! [`Watcher::tick`], logged, formatted as a failure report, and routed
//! through the notifier under the same duplicate-suppression rule as real
//! status notifications. Nothing escapes the loop.
//!
//! State is ephemeral — a restart forgets everything and the first fetch is
//! always treated as a change. This is acceptable because the worst case is
//! one repeated notification after a restart, not a missed transition.

use std::time::Duration;

use chrono::{DateTime, Utc};

use reviewwatch_client::{StatusSource, validate_response};
use reviewwatch_common::error::AppError;
use reviewwatch_common::types::PollResult;
use reviewwatch_engine::{failure_report, interpret, records_changed};
use reviewwatch_notifier::{Delivery, MessageSink, Notifier};

/// Fixed fetch lookback in days.
///
/// Deliberately not an advancing cursor: every fetch asks for the last 30
/// days, so the server re-returns already-seen records and correctness rests
/// on value comparison in the diff step.
const LOOKBACK_DAYS: i64 = 30;

/// Mutable loop state, owned exclusively by the watcher for the process
/// lifetime. Never persisted.
#[derive(Debug, Default)]
pub struct LoopState {
    /// Record list from the last committed cycle.
    pub last_records: PollResult,
    /// Text of the last notification actually delivered — never of a merely
    /// attempted one. The notifier's dedup keys on this.
    pub last_sent: Option<String>,
    /// When the last successfully validated fetch happened.
    pub last_poll_at: Option<DateTime<Utc>>,
}

/// What one successful cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fetched records equal the last-seen ones.
    NoUpdate,
    /// A change was detected and the head record's message went through the
    /// notifier (delivered, or suppressed as an exact repeat).
    Changed(Delivery),
    /// The record list changed to empty; state updated, nothing to interpret.
    Emptied,
}

/// Poll-loop orchestrator.
pub struct Watcher<S, M> {
    source: S,
    notifier: Notifier<M>,
    state: LoopState,
    poll_interval: Duration,
}

impl<S: StatusSource, M: MessageSink> Watcher<S, M> {
    pub fn new(source: S, sink: M, poll_interval: Duration) -> Self {
        Self {
            source,
            notifier: Notifier::new(sink),
            state: LoopState::default(),
            poll_interval,
        }
    }

    /// Read-only view of the loop state (for logging and tests).
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// One fetch–validate–diff–interpret–notify pass.
    ///
    /// Commit ordering: `last_records` is updated only after interpretation
    /// and delivery succeed. A failed delivery or an unknown status leaves it
    /// stale, so the same transition is re-detected and retried next cycle;
    /// exact-repeat suppression cannot swallow it because `last_sent` still
    /// holds the previous *delivered* text.
    async fn cycle(&mut self) -> Result<CycleOutcome, AppError> {
        let window_start = Utc::now() - chrono::Duration::days(LOOKBACK_DAYS);
        let payload = self.source.fetch(window_start).await?;
        let fresh = validate_response(&payload)?;
        self.state.last_poll_at = Some(Utc::now());

        if !records_changed(&self.state.last_records, &fresh) {
            tracing::debug!("No update");
            return Ok(CycleOutcome::NoUpdate);
        }

        if fresh.is_empty() {
            // There is no index 0 to interpret; just commit the new state.
            self.state.last_records = fresh;
            tracing::info!("Record list emptied, nothing to notify");
            return Ok(CycleOutcome::Emptied);
        }

        let message = interpret(&fresh[0])?;
        let delivery = self
            .notifier
            .notify(&mut self.state.last_sent, &message)
            .await?;
        self.state.last_records = fresh;

        tracing::info!(?delivery, "Status change handled");
        Ok(CycleOutcome::Changed(delivery))
    }

    /// One cycle plus the recovery boundary.
    ///
    /// Recoverable errors become failure reports routed through the notifier
    /// with the usual dedup, so a sustained identical failure notifies once
    /// while differing failures notify once each. A failure of the report
    /// delivery itself is logged and dropped — no recursion.
    pub async fn tick(&mut self) -> Option<CycleOutcome> {
        match self.cycle().await {
            Ok(outcome) => Some(outcome),
            Err(error) => {
                tracing::error!(error = %error, "Poll cycle failed");
                let report = failure_report(&error);
                if let Err(delivery_error) = self
                    .notifier
                    .notify(&mut self.state.last_sent, &report)
                    .await
                {
                    tracing::error!(error = %delivery_error, "Failed to deliver failure report");
                }
                None
            }
        }
    }

    /// Run ticks forever, sleeping `poll_interval` in between.
    ///
    /// Never returns; shutdown is external (the caller races this future
    /// against a signal handler, which also cancels a sleep in progress).
    pub async fn run(&mut self) {
        tracing::info!(
            poll_interval_secs = self.poll_interval.as_secs(),
            lookback_days = LOOKBACK_DAYS,
            "Watcher started"
        );
        loop {
            self.tick().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
