//! Prediction results and the local evaluation pipeline.

use serde::{Deserialize, Serialize};

use crate::{
    decision,
    heuristic::{self, HeuristicScore},
    inputs::RawInputs,
    normalization::{self, NormalizedFeatures},
    round_half_up,
};

/// Outcome of a single prediction request.
///
/// `chance`, `iq_factor` and `cgpa_factor` are only produced by the local heuristic. A remote
/// backend reports the verdict alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub placed: bool,
    pub chance: Option<u8>,
    pub iq_factor: Option<i64>,
    pub cgpa_factor: Option<i64>,
}

impl PredictionResult {
    /// Builds a result from the local heuristic.
    ///
    /// Factors are the rounded, unclamped normalized scores in percent. They may be negative or
    /// exceed 100 for out-of-range inputs.
    #[must_use]
    pub fn from_heuristic(features: &NormalizedFeatures, score: &HeuristicScore) -> Self {
        Self {
            placed: decision::is_placed(score.chance),
            chance: Some(score.chance),
            iq_factor: Some(to_factor(features.iq_score)),
            cgpa_factor: Some(to_factor(features.cgpa_score)),
        }
    }

    /// Builds a verdict-only result, as returned by a remote backend.
    #[must_use]
    pub const fn verdict(placed: bool) -> Self {
        Self {
            placed,
            chance: None,
            iq_factor: None,
            cgpa_factor: None,
        }
    }

    #[must_use]
    pub fn verdict_label(&self) -> &'static str {
        if self.placed { "Likely Placed" } else { "At Risk" }
    }
}

#[expect(clippy::cast_possible_truncation)]
fn to_factor(score: f64) -> i64 {
    round_half_up(score * 100.0) as i64
}

/// Runs the local pipeline: normalize, score and decide.
#[must_use]
pub fn evaluate(inputs: RawInputs) -> PredictionResult {
    let features = normalization::normalize(inputs);
    let score = heuristic::score(&features);
    PredictionResult::from_heuristic(&features, &score)
}
