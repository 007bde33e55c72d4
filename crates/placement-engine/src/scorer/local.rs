use std::time::Duration;

use async_trait::async_trait;
use placement_evaluator::{RawInputs, evaluate};

use crate::{lifecycle::Outcome, scorer::Scorer};

/// Artificial latency applied before the local heuristic resolves.
///
/// The delay only shapes the pending indicator; it carries no meaning for the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayStrategy {
    /// Resolve immediately.
    None,
    /// Sleep for a fixed duration.
    Fixed(Duration),
}

impl Default for DelayStrategy {
    fn default() -> Self {
        Self::DEMO
    }
}

impl DelayStrategy {
    /// Latency used by the interactive form.
    pub const DEMO: Self = Self::Fixed(Duration::from_millis(800));

    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            Self::None
        } else {
            Self::Fixed(Duration::from_millis(millis))
        }
    }

    async fn wait(self) {
        if let Self::Fixed(duration) = self {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Scores inputs with the closed-form heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScorer {
    delay: DelayStrategy,
}

impl LocalScorer {
    #[must_use]
    pub const fn new(delay: DelayStrategy) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Scorer for LocalScorer {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn predict(&self, inputs: RawInputs) -> Outcome {
        self.delay.wait().await;
        Ok(evaluate(inputs))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use placement_evaluator::PredictionResult;

    use super::*;

    #[test]
    fn test_delay_from_millis() {
        assert_eq!(DelayStrategy::from_millis(0), DelayStrategy::None);
        assert_eq!(
            DelayStrategy::from_millis(250),
            DelayStrategy::Fixed(Duration::from_millis(250))
        );
        assert_eq!(DelayStrategy::default(), DelayStrategy::DEMO);
    }

    #[tokio::test]
    async fn test_predict_matches_evaluator() {
        let scorer = LocalScorer::new(DelayStrategy::None);
        let inputs = RawInputs::new(100.0, 7.0);

        let result = scorer.predict(inputs).await.unwrap();

        assert_eq!(
            result,
            PredictionResult {
                placed: false,
                chance: Some(50),
                iq_factor: Some(50),
                cgpa_factor: Some(50),
            }
        );
    }

    #[tokio::test]
    async fn test_predict_is_idempotent() {
        let scorer = LocalScorer::new(DelayStrategy::None);
        let inputs = RawInputs::new(131.0, 9.1);
        assert_eq!(scorer.predict(inputs).await, scorer.predict(inputs).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_waits_before_resolving() {
        let scorer = LocalScorer::new(DelayStrategy::Fixed(Duration::from_millis(800)));
        let start = tokio::time::Instant::now();

        let result = scorer.predict(RawInputs::new(140.0, 10.0)).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(800));
        assert!(result.placed);
    }
}
