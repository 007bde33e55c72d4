use placement_evaluator::{PredictionResult, RawInputs};
use tracing::debug;

/// User-facing description of a failed prediction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{message}")]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    /// Message shown whenever the remote backend cannot produce a verdict.
    pub const CONNECTIVITY_MESSAGE: &'static str =
        "Could not reach the prediction backend. Verify that it is running and try again.";

    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn connectivity() -> Self {
        Self::new(Self::CONNECTIVITY_MESSAGE)
    }
}

/// Result of a single prediction request.
pub type Outcome = Result<PredictionResult, ErrorInfo>;

/// Observable state of the prediction request.
#[derive(Debug, Clone, Default, PartialEq, derive_more::IsVariant)]
pub enum RequestState {
    /// Nothing requested yet, or torn down.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The latest request produced a result.
    Resolved(PredictionResult),
    /// The latest request failed.
    Failed(ErrorInfo),
}

impl RequestState {
    #[must_use]
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Resolved(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Handle to an in-flight request: its generation and the inputs captured at trigger time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket {
    generation: u64,
    inputs: RawInputs,
}

impl Ticket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn inputs(&self) -> RawInputs {
        self.inputs
    }
}

/// Request lifecycle state machine.
///
/// Transitions take `self` by value and return the next state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lifecycle {
    state: RequestState,
    generation: u64,
    pending_inputs: Option<RawInputs>,
    torn_down: bool,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Generation of the most recent trigger (`0` before the first one).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Inputs captured by the in-flight request.
    #[must_use]
    pub fn pending_inputs(&self) -> Option<RawInputs> {
        self.pending_inputs
    }

    /// Starts a new request.
    ///
    /// Clears any previous result or error and enters `Pending`. Returns `None` without changing
    /// anything while a request is already pending or after teardown.
    #[must_use]
    pub fn trigger(mut self, inputs: RawInputs) -> (Self, Option<Ticket>) {
        if self.torn_down || self.is_pending() {
            debug!(
                generation = self.generation,
                torn_down = self.torn_down,
                "ignoring trigger"
            );
            return (self, None);
        }

        self.generation += 1;
        self.state = RequestState::Pending;
        self.pending_inputs = Some(inputs);
        debug!(generation = self.generation, ?inputs, "prediction pending");

        let ticket = Ticket {
            generation: self.generation,
            inputs,
        };
        (self, Some(ticket))
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Outcomes of superseded requests, or arriving after teardown, are dropped.
    #[must_use]
    pub fn settle(mut self, ticket: Ticket, outcome: Outcome) -> Self {
        if !self.accepts(&ticket) {
            debug!(
                ticket = ticket.generation,
                generation = self.generation,
                torn_down = self.torn_down,
                "discarding stale outcome"
            );
            return self;
        }

        self.pending_inputs = None;
        self.state = match outcome {
            Ok(result) => {
                debug!(generation = self.generation, ?result, "prediction resolved");
                RequestState::Resolved(result)
            }
            Err(error) => {
                debug!(generation = self.generation, %error, "prediction failed");
                RequestState::Failed(error)
            }
        };
        self
    }

    /// Tears the lifecycle down.
    ///
    /// Returns to `Idle`, invalidates any in-flight ticket and refuses further triggers.
    #[must_use]
    pub fn teardown(mut self) -> Self {
        debug!(generation = self.generation, "lifecycle torn down");
        self.state = RequestState::Idle;
        self.pending_inputs = None;
        self.torn_down = true;
        self
    }

    fn accepts(&self, ticket: &Ticket) -> bool {
        !self.torn_down && self.is_pending() && ticket.generation == self.generation
    }
}
