use async_trait::async_trait;
use placement_evaluator::{PredictionResult, RawInputs};
use placement_remote::{InferenceClient, InferenceConfig, InferenceError};
use tracing::warn;

use crate::{
    lifecycle::{ErrorInfo, Outcome},
    scorer::Scorer,
};

/// Delegates the verdict to a remote inference backend.
///
/// The backend only reports placed/not placed, so results carry no chance or factors.
#[derive(Debug, Clone)]
pub struct RemoteScorer {
    client: InferenceClient,
}

impl RemoteScorer {
    #[must_use]
    pub fn new(client: InferenceClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: InferenceConfig) -> Result<Self, InferenceError> {
        InferenceClient::new(config).map(Self::new)
    }
}

#[async_trait]
impl Scorer for RemoteScorer {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn predict(&self, inputs: RawInputs) -> Outcome {
        match self.client.predict(inputs).await {
            Ok(verdict) => Ok(PredictionResult::verdict(verdict.placed)),
            Err(error) => {
                warn!(
                    %error,
                    unreachable = error.is_unreachable(),
                    "remote prediction failed"
                );
                Err(ErrorInfo::connectivity())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{net::TcpListener, time::Duration};

    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use super::*;

    fn scorer_for(uri: &str) -> RemoteScorer {
        let config = InferenceConfig::default()
            .with_url(uri)
            .with_timeout(Duration::from_millis(500));
        RemoteScorer::from_config(config).unwrap()
    }

    async fn mock_prediction(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_prediction_one_yields_placed_verdict() {
        let server = MockServer::start().await;
        mock_prediction(&server, serde_json::json!({"prediction": 1})).await;

        let result = scorer_for(&server.uri())
            .predict(RawInputs::new(100.0, 7.0))
            .await
            .unwrap();

        assert_eq!(result, PredictionResult::verdict(true));
    }

    #[tokio::test]
    async fn test_prediction_zero_yields_not_placed_verdict() {
        let server = MockServer::start().await;
        mock_prediction(&server, serde_json::json!({"prediction": 0})).await;

        let result = scorer_for(&server.uri())
            .predict(RawInputs::new(140.0, 10.0))
            .await
            .unwrap();

        // The backend is authoritative even where the local heuristic would say "placed".
        assert_eq!(result, PredictionResult::verdict(false));
        assert_eq!(result.chance, None);
    }

    #[tokio::test]
    async fn test_dropped_connection_yields_connectivity_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let outcome = scorer_for(&uri).predict(RawInputs::default()).await;

        assert_eq!(outcome, Err(ErrorInfo::connectivity()));
    }

    #[tokio::test]
    async fn test_error_status_yields_connectivity_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let outcome = scorer_for(&server.uri()).predict(RawInputs::default()).await;

        assert_eq!(outcome, Err(ErrorInfo::connectivity()));
    }
}
