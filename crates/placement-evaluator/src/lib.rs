//! Evaluator for campus placement predictions.
//!
//! This crate implements the local, self-contained prediction pipeline:
//!
//! 1. **Normalization** ([`normalization`]) - Maps raw IQ and CGPA values onto a common
//!    \[0.0, 1.0\]-ish scale using fixed normalization ranges.
//! 2. **Heuristic Scoring** ([`heuristic`]) - Combines the normalized features into a single
//!    placement probability with a fixed weighted sum.
//! 3. **Decision** ([`decision`]) - Thresholds the rounded chance into a placed/not-placed
//!    verdict and derives the diagnostic per-feature factors.
//!
//! # Architecture
//!
//! ```text
//! RawInputs
//!     ↓ normalize
//! NormalizedFeatures
//!     ↓ score (weighted sum, clamp, round)
//! HeuristicScore
//!     ↓ decide (chance >= 52)
//! PredictionResult
//! ```
//!
//! [`evaluate`] runs the whole pipeline in one call.
//!
//! # Design Principles
//!
//! ## Single Clamping Point
//!
//! Normalization never clamps. Inputs outside the nominal bounds produce feature values
//! outside \[0.0, 1.0\], and only the final probability is clamped. The diagnostic factors
//! keep the unclamped contribution.
//!
//! ## Deterministic
//!
//! Every stage is a closed-form pure function. Identical inputs always produce identical
//! results.
//!
//! # Example
//!
//! ```
//! use placement_evaluator::{RawInputs, evaluate};
//!
//! let result = evaluate(RawInputs::new(100.0, 7.0));
//! assert_eq!(result.chance, Some(50));
//! assert!(!result.placed);
//! ```

pub use self::{
    decision::{PLACEMENT_THRESHOLD, is_placed},
    heuristic::{CGPA_WEIGHT, HeuristicScore, IQ_WEIGHT, score},
    inputs::{CGPA_BOUNDS, IQ_BOUNDS, InputBounds, RawInputs},
    normalization::{InputFeature, NormalizationRange, NormalizedFeatures, normalize},
    prediction::{PredictionResult, evaluate},
};

pub mod decision;
pub mod heuristic;
pub mod inputs;
pub mod normalization;
pub mod prediction;

/// Rounds to the nearest integer, with ties rounded toward positive infinity.
///
/// `f64::round` rounds ties away from zero, which differs for negative halves
/// (`-12.5` becomes `-13` instead of `-12`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(49.5), 50.0);
        assert_eq!(round_half_up(49.49), 49.0);
        assert_eq!(round_half_up(-12.5), -12.0);
        assert_eq!(round_half_up(-12.51), -13.0);
    }
}
