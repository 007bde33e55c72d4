use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use placement_evaluator::RawInputs;

use crate::{
    config::InferenceConfig,
    error::InferenceError,
    wire::{PredictRequest, PredictResponse},
};

const USER_AGENT_VALUE: &str = concat!("placement-remote/", env!("CARGO_PKG_VERSION"));

/// Binary verdict reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub placed: bool,
}

/// Response of the health probe (`GET /`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the inference backend.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    config: InferenceConfig,
    predict_url: Url,
    health_url: Url,
}

impl InferenceClient {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let base_url = config.base_url.trim_end_matches('/');
        let parse = |url: String| {
            Url::parse(&url).map_err(|source| InferenceError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            })
        };
        let predict_url = parse(format!("{base_url}/predict"))?;
        let health_url = parse(format!("{base_url}/"))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|source| InferenceError::ClientBuild { source })?;

        Ok(Self {
            http,
            config,
            predict_url,
            health_url,
        })
    }

    #[must_use]
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    #[must_use]
    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }

    /// Requests a verdict for `inputs`. Exactly one attempt is made.
    pub async fn predict(&self, inputs: RawInputs) -> Result<Verdict, InferenceError> {
        let body = PredictRequest::from(inputs);
        debug!(url = %self.predict_url, iq = body.iq, cgpa = body.cgpa, "requesting prediction");

        let request = self.http.post(self.predict_url.clone()).json(&body);
        let response: PredictResponse = self.send(request, &self.predict_url).await?;
        let placed = response.is_placed();
        debug!(prediction = %response.prediction, placed, "prediction received");

        Ok(Verdict { placed })
    }

    /// Probes `GET /` on the backend.
    pub async fn health(&self) -> Result<HealthStatus, InferenceError> {
        debug!(url = %self.health_url, "probing backend health");
        let request = self.http.get(self.health_url.clone());
        self.send(request, &self.health_url).await
    }

    async fn send<T>(&self, request: reqwest::RequestBuilder, url: &Url) -> Result<T, InferenceError>
    where
        T: DeserializeOwned,
    {
        let transport_error = |source: reqwest::Error| {
            if source.is_timeout() {
                InferenceError::Timeout {
                    url: url.to_string(),
                    timeout: self.config.timeout,
                }
            } else {
                InferenceError::Transport {
                    url: url.to_string(),
                    source,
                }
            }
        };

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, %status, "backend responded with error status");
            return Err(InferenceError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|source| InferenceError::MalformedBody {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls_ignore_trailing_slash() {
        for base in ["http://localhost:8000", "http://localhost:8000/"] {
            let client = InferenceClient::new(InferenceConfig::default().with_url(base)).unwrap();
            assert_eq!(client.predict_url().as_str(), "http://localhost:8000/predict");
            assert_eq!(client.health_url.as_str(), "http://localhost:8000/");
        }
    }

    #[test]
    fn test_endpoint_urls_keep_path_prefix() {
        let client =
            InferenceClient::new(InferenceConfig::default().with_url("http://host/api/v1")).unwrap();
        assert_eq!(client.predict_url().as_str(), "http://host/api/v1/predict");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = InferenceClient::new(InferenceConfig::default().with_url("not a url")).unwrap_err();
        assert!(matches!(err, InferenceError::InvalidBaseUrl { .. }), "{err}");
    }
}
