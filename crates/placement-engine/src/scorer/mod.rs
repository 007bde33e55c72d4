use std::fmt;

use async_trait::async_trait;
use placement_evaluator::RawInputs;

use crate::lifecycle::Outcome;

pub use self::{
    local::{DelayStrategy, LocalScorer},
    remote::RemoteScorer,
};

mod local;
mod remote;

/// Produces a prediction for captured inputs.
///
/// Implementations never fail with raw transport errors. Every failure is reported as an
/// [`ErrorInfo`](crate::ErrorInfo) that can be shown to the user as-is.
#[async_trait]
pub trait Scorer: fmt::Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    async fn predict(&self, inputs: RawInputs) -> Outcome;
}
