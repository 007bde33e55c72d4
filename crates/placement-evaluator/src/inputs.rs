//! Raw prediction inputs and their nominal bounds.
//!
//! The bounds are hints for the input widgets. The evaluator itself accepts any value and
//! never validates against them.

use serde::{Deserialize, Serialize};

/// Raw user inputs captured at trigger time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    /// IQ score, nominally in \[60, 140\].
    pub iq: f64,
    /// Cumulative grade point average, nominally in \[4.0, 10.0\].
    pub cgpa: f64,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            iq: 100.0,
            cgpa: 7.0,
        }
    }
}

impl RawInputs {
    #[must_use]
    pub const fn new(iq: f64, cgpa: f64) -> Self {
        Self { iq, cgpa }
    }
}

/// Display and clamping hints for a single input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Nominal IQ range with integer steps.
pub const IQ_BOUNDS: InputBounds = InputBounds {
    min: 60.0,
    max: 140.0,
    step: 1.0,
};

/// Nominal CGPA range with one decimal place.
pub const CGPA_BOUNDS: InputBounds = InputBounds {
    min: 4.0,
    max: 10.0,
    step: 0.1,
};

impl InputBounds {
    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Moves `value` by `steps` increments, snapping to the step grid and clamping.
    ///
    /// Snapping keeps repeated `0.1` increments from drifting (`7.0 + 0.1 * 3`
    /// lands on `7.3`, not `7.300000000000001`).
    #[must_use]
    pub fn step_by(&self, value: f64, steps: i32) -> f64 {
        let index = ((value - self.min) / self.step).round() + f64::from(steps);
        let stepped = self.min + index * self.step;
        let decimals = 10_f64.powi(self.decimal_places());
        self.clamp((stepped * decimals).round() / decimals)
    }

    /// Midpoint of the range, used for slider tick labels.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.min, self.max)
    }

    /// Position of `value` inside the range as a fraction (not clamped).
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Number of decimal places implied by `step`.
    #[must_use]
    pub fn decimal_places(&self) -> i32 {
        let mut places = 0;
        let mut step = self.step;
        while places < 6 && (step - step.round()).abs() > 1e-9 {
            step *= 10.0;
            places += 1;
        }
        places
    }
}
