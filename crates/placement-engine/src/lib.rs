//! Prediction request lifecycle and scorer backends.
//!
//! This crate coordinates user-triggered predictions:
//!
//! - [`Scorer`] - One asynchronous prediction capability with two implementations:
//!   [`LocalScorer`] (the closed-form heuristic from `placement-evaluator`) and
//!   [`RemoteScorer`] (delegates to an HTTP inference backend). [`Backend`] selects one at
//!   configuration time.
//! - [`Lifecycle`] - Pure state machine over [`RequestState`]. Every transition consumes the
//!   current state and returns the next one, so it can be tested without any runtime.
//! - [`PredictionSession`] - Drives a [`Lifecycle`] with a [`Scorer`] on a `tokio` runtime and
//!   delivers completions back to the owning thread.
//!
//! # Request Lifecycle
//!
//! ```text
//!            trigger                 Ok(result)
//!   Idle ─────────────→ Pending ─────────────────→ Resolved(result)
//!    ↑                     │                             │
//!    │                     │ Err(error)                  │ trigger
//!    │                     ↓                             ↓
//!    │                  Failed(error) ──── trigger ──→ Pending
//!    │
//!    └──── teardown (from any state; late outcomes are discarded)
//! ```
//!
//! - Triggering while `Pending` is a no-op.
//! - Inputs are captured in a [`Ticket`] at trigger time.
//! - Each trigger bumps a generation counter. Outcomes carrying an older generation, or
//!   arriving after teardown, never touch the state.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() {
//! use std::sync::Arc;
//!
//! use placement_engine::{DelayStrategy, LocalScorer, PredictionSession, RequestState};
//! use placement_evaluator::RawInputs;
//!
//! let scorer = Arc::new(LocalScorer::new(DelayStrategy::None));
//! let mut session = PredictionSession::new(scorer, tokio::runtime::Handle::current());
//!
//! session.trigger(RawInputs::new(120.0, 8.5));
//! session.settled().await;
//!
//! if let RequestState::Resolved(result) = session.state() {
//!     println!("placed: {}", result.placed);
//! }
//! # }
//! ```

pub use self::{
    backend::{Backend, BackendKind},
    lifecycle::{ErrorInfo, Lifecycle, Outcome, RequestState, Ticket},
    scorer::{DelayStrategy, LocalScorer, RemoteScorer, Scorer},
    session::PredictionSession,
};

mod backend;
mod lifecycle;
mod scorer;
mod session;
