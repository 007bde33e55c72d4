//! HTTP client for a remote placement inference backend.
//!
//! The backend exposes two endpoints:
//!
//! | Method | Path       | Request body                  | Response body            |
//! |--------|------------|-------------------------------|--------------------------|
//! | `POST` | `/predict` | `{"iq": <int>, "cgpa": <num>}` | `{"prediction": 0 \| 1}` |
//! | `GET`  | `/`        | -                             | any JSON object          |
//!
//! [`InferenceClient::predict`] issues exactly one request per call and never retries.
//! Every failure (unreachable host, timeout, non-2xx status, malformed body) is reported as an
//! [`InferenceError`]. Callers that present errors to users are expected to collapse these into
//! a single user-facing message.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), placement_remote::InferenceError> {
//! use placement_evaluator::RawInputs;
//! use placement_remote::{InferenceClient, InferenceConfig};
//!
//! let client = InferenceClient::new(InferenceConfig::from_env())?;
//! let verdict = client.predict(RawInputs::new(110.0, 8.2)).await?;
//! println!("placed: {}", verdict.placed);
//! # Ok(())
//! # }
//! ```

pub use self::{
    client::{HealthStatus, InferenceClient, Verdict},
    config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, InferenceConfig},
    error::InferenceError,
    wire::{PredictRequest, PredictResponse},
};

mod client;
mod config;
mod error;
mod wire;
