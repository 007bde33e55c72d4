//! Feature normalization: mapping raw inputs onto a common scale.
//!
//! Each [`InputFeature`] has a fixed [`NormalizationRange`]. A raw value at the lower end of
//! the range maps to `0.0` and a value at the upper end maps to `1.0`:
//!
//! ```text
//! normalized = (raw - min) / (max - min)
//! ```
//!
//! | Feature | min | max | Formula             |
//! |---------|-----|-----|---------------------|
//! | IQ      | 60  | 140 | `(iq - 60) / 80`    |
//! | CGPA    | 4   | 10  | `(cgpa - 4) / 6`    |
//!
//! Values are **not** clamped. Out-of-range inputs yield scores below `0.0` or above `1.0`,
//! and the heuristic scorer clamps only the final probability.

use crate::inputs::RawInputs;

/// Inputs that take part in the placement estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputFeature {
    #[display("iq")]
    Iq,
    #[display("cgpa")]
    Cgpa,
}

impl InputFeature {
    #[must_use]
    pub const fn range(self) -> NormalizationRange {
        match self {
            Self::Iq => NormalizationRange::new(60.0, 140.0),
            Self::Cgpa => NormalizationRange::new(4.0, 10.0),
        }
    }

    #[must_use]
    pub fn raw_value(self, inputs: &RawInputs) -> f64 {
        match self {
            Self::Iq => inputs.iq,
            Self::Cgpa => inputs.cgpa,
        }
    }

    #[must_use]
    pub fn normalize(self, inputs: &RawInputs) -> f64 {
        self.range().normalize(self.raw_value(inputs))
    }
}

/// Linear normalization range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationRange {
    pub min: f64,
    pub max: f64,
}

impl NormalizationRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Maps `raw` linearly so that `min -> 0.0` and `max -> 1.0`, without clamping.
    #[inline]
    #[must_use]
    pub fn normalize(&self, raw: f64) -> f64 {
        (raw - self.min) / (self.max - self.min)
    }
}

/// Normalized feature values derived from [`RawInputs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFeatures {
    pub iq_score: f64,
    pub cgpa_score: f64,
}

impl NormalizedFeatures {
    #[must_use]
    pub fn get(&self, feature: InputFeature) -> f64 {
        match feature {
            InputFeature::Iq => self.iq_score,
            InputFeature::Cgpa => self.cgpa_score,
        }
    }
}

/// Normalizes raw inputs.
#[must_use]
pub fn normalize(inputs: RawInputs) -> NormalizedFeatures {
    NormalizedFeatures {
        iq_score: InputFeature::Iq.normalize(&inputs),
        cgpa_score: InputFeature::Cgpa.normalize(&inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bounds_map_to_zero() {
        let features = normalize(RawInputs::new(60.0, 4.0));
        assert_eq!(features.iq_score, 0.0);
        assert_eq!(features.cgpa_score, 0.0);
    }

    #[test]
    fn test_upper_bounds_map_to_one() {
        let features = normalize(RawInputs::new(140.0, 10.0));
        assert_eq!(features.iq_score, 1.0);
        assert_eq!(features.cgpa_score, 1.0);
    }

    #[test]
    fn test_midpoint() {
        let features = normalize(RawInputs::new(100.0, 7.0));
        assert_eq!(features.iq_score, 0.5);
        assert_eq!(features.cgpa_score, 0.5);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let features = normalize(RawInputs::new(20.0, 13.0));
        assert_eq!(features.iq_score, -0.5);
        assert_eq!(features.cgpa_score, 1.5);
    }

    #[test]
    fn test_feature_accessors() {
        let inputs = RawInputs::new(120.0, 5.5);
        let features = normalize(inputs);
        for feature in [InputFeature::Iq, InputFeature::Cgpa] {
            assert_eq!(features.get(feature), feature.normalize(&inputs));
        }
        assert_eq!(InputFeature::Iq.to_string(), "iq");
        assert_eq!(InputFeature::Cgpa.to_string(), "cgpa");
    }
}
