use std::time::Duration;

/// Base URL used when `PLACEMENT_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Request timeout used when `PLACEMENT_API_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_BASE_URL: &str = "PLACEMENT_API_URL";
const ENV_TIMEOUT_SECS: &str = "PLACEMENT_API_TIMEOUT_SECS";

/// Connection settings for the inference backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl InferenceConfig {
    /// Reads the configuration from the environment.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup(ENV_BASE_URL)
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            timeout: lookup(ENV_TIMEOUT_SECS)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|secs| secs.is_finite() && *secs > 0.0)
                .map_or(DEFAULT_TIMEOUT, Duration::from_secs_f64),
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
