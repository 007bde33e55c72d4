use placement_evaluator::RawInputs;
use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
///
/// The backend validates `iq` as an integer, so it is rounded before sending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub iq: i64,
    pub cgpa: f64,
}

impl From<RawInputs> for PredictRequest {
    #[expect(clippy::cast_possible_truncation)]
    fn from(inputs: RawInputs) -> Self {
        Self {
            iq: inputs.iq.round() as i64,
            cgpa: inputs.cgpa,
        }
    }
}

/// Body returned by `POST /predict`.
///
/// `prediction` is kept as raw JSON: only the value `1` means "placed", anything else
/// (including `0`, other numbers, strings and `null`) means "not placed". A missing field is a
/// malformed response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub prediction: serde_json::Value,
}

impl PredictResponse {
    #[must_use]
    pub fn is_placed(&self) -> bool {
        match &self.prediction {
            serde_json::Value::Number(n) => {
                n.as_i64() == Some(1) || n.as_f64().is_some_and(|v| (v - 1.0).abs() < f64::EPSILON)
            }
            _ => false,
        }
    }
}
