use std::{mem, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt as _;
use placement_evaluator::RawInputs;
use tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::{debug, error};

use crate::{
    lifecycle::{ErrorInfo, Lifecycle, Outcome, RequestState, Ticket},
    scorer::Scorer,
};

const TASK_FAILED_MESSAGE: &str = "The prediction could not be completed.";

#[derive(Debug)]
struct Settlement {
    ticket: Ticket,
    outcome: Outcome,
}

/// Runs prediction requests for a single view.
///
/// The session owns the [`Lifecycle`] and is driven from one thread. Requests run as tasks on
/// the given `tokio` runtime and report back through a channel. The owner applies completions
/// with [`poll`](Self::poll) (non-blocking) or [`settled`](Self::settled) (async).
///
/// Every spawned task reports exactly one settlement, including when the scorer panics.
///
/// Dropping the session aborts the in-flight request.
#[derive(Debug)]
pub struct PredictionSession {
    lifecycle: Lifecycle,
    scorer: Arc<dyn Scorer>,
    runtime: Handle,
    settlement_tx: UnboundedSender<Settlement>,
    settlement_rx: UnboundedReceiver<Settlement>,
    in_flight: Option<(Ticket, JoinHandle<()>)>,
}

impl PredictionSession {
    #[must_use]
    pub fn new(scorer: Arc<dyn Scorer>, runtime: Handle) -> Self {
        let (settlement_tx, settlement_rx) = mpsc::unbounded_channel();
        Self {
            lifecycle: Lifecycle::new(),
            scorer,
            runtime,
            settlement_tx,
            settlement_rx,
            in_flight: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &RequestState {
        self.lifecycle.state()
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.lifecycle.is_pending()
    }

    /// Ticket of the request currently running, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Starts a prediction for `inputs`.
    ///
    /// Returns `false` if a request is already pending or the session was torn down.
    pub fn trigger(&mut self, inputs: RawInputs) -> bool {
        let (lifecycle, ticket) = mem::take(&mut self.lifecycle).trigger(inputs);
        self.lifecycle = lifecycle;
        let Some(ticket) = ticket else {
            return false;
        };

        let scorer = Arc::clone(&self.scorer);
        let tx = self.settlement_tx.clone();
        debug!(
            scorer = scorer.name(),
            generation = ticket.generation(),
            "spawning prediction"
        );
        let handle = self.runtime.spawn(async move {
            let outcome = AssertUnwindSafe(scorer.predict(ticket.inputs()))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    error!(generation = ticket.generation(), "prediction task panicked");
                    Err(ErrorInfo::new(TASK_FAILED_MESSAGE))
                });
            // The receiver is gone once the session is dropped.
            let _ = tx.send(Settlement { ticket, outcome });
        });
        self.in_flight = Some((ticket, handle));
        true
    }

    /// Applies completed requests without blocking.
    ///
    /// Returns whether the state changed.
    pub fn poll(&mut self) -> bool {
        let before = self.lifecycle.state().clone();
        while let Ok(settlement) = self.settlement_rx.try_recv() {
            self.apply(settlement);
        }
        *self.lifecycle.state() != before
    }

    /// Waits until the pending request (if any) has settled and applies it.
    pub async fn settled(&mut self) {
        while self.in_flight.is_some() {
            // The session holds a sender, so the channel never closes.
            let Some(settlement) = self.settlement_rx.recv().await else {
                break;
            };
            self.apply(settlement);
        }
        self.poll();
    }

    /// Abandons the in-flight request and refuses further triggers.
    pub fn teardown(&mut self) {
        if let Some((_, handle)) = self.in_flight.take() {
            handle.abort();
        }
        self.lifecycle = mem::take(&mut self.lifecycle).teardown();
    }

    fn apply(&mut self, settlement: Settlement) {
        let Settlement { ticket, outcome } = settlement;
        if self
            .in_flight
            .as_ref()
            .is_some_and(|(current, _)| current.generation() == ticket.generation())
        {
            self.in_flight = None;
        }
        self.lifecycle = mem::take(&mut self.lifecycle).settle(ticket, outcome);
    }
}

impl Drop for PredictionSession {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.in_flight.take() {
            handle.abort();
        }
    }
}
