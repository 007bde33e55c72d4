//! Heuristic scoring: a fixed weighted sum of normalized features.
//!
//! ```text
//! raw         = 0.45 · iq_score + 0.55 · cgpa_score
//! probability = clamp(raw, 0.0, 1.0)
//! chance      = round(probability · 100)
//! ```
//!
//! The weights are fixed policy constants, not learned. CGPA is weighted more heavily than
//! IQ.

use crate::{
    normalization::{InputFeature, NormalizedFeatures},
    round_half_up,
};

/// Weight of the normalized IQ score.
pub const IQ_WEIGHT: f64 = 0.45;
/// Weight of the normalized CGPA score.
pub const CGPA_WEIGHT: f64 = 0.55;

const WEIGHTS: [(InputFeature, f64); 2] =
    [(InputFeature::Iq, IQ_WEIGHT), (InputFeature::Cgpa, CGPA_WEIGHT)];

/// Output of the heuristic scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicScore {
    /// Clamped probability in \[0.0, 1.0\].
    pub probability: f64,
    /// Rounded percentage in \[0, 100\].
    pub chance: u8,
}

/// Scores normalized features.
#[must_use]
pub fn score(features: &NormalizedFeatures) -> HeuristicScore {
    let raw: f64 = WEIGHTS
        .iter()
        .map(|(feature, weight)| features.get(*feature) * weight)
        .sum();
    let probability = raw.clamp(0.0, 1.0);
    HeuristicScore {
        probability,
        chance: to_chance(probability),
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_chance(probability: f64) -> u8 {
    // NaN inputs propagate through clamp and saturate to 0 here.
    round_half_up(probability * 100.0) as u8
}
