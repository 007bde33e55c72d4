use std::sync::Arc;

use placement_remote::{InferenceConfig, InferenceError};

use crate::scorer::{DelayStrategy, LocalScorer, RemoteScorer, Scorer};

/// Which scorer implementation to use.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, derive_more::Display)]
pub enum BackendKind {
    #[default]
    #[display("local")]
    Local,
    #[display("remote")]
    Remote,
}

/// Scorer configuration, chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Local { delay: DelayStrategy },
    Remote(InferenceConfig),
}

impl Default for Backend {
    fn default() -> Self {
        Self::Local {
            delay: DelayStrategy::default(),
        }
    }
}

impl Backend {
    #[must_use]
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Local { .. } => BackendKind::Local,
            Self::Remote(_) => BackendKind::Remote,
        }
    }

    /// Builds the configured scorer.
    pub fn build_scorer(&self) -> Result<Arc<dyn Scorer>, InferenceError> {
        let scorer: Arc<dyn Scorer> = match self {
            Self::Local { delay } => Arc::new(LocalScorer::new(*delay)),
            Self::Remote(config) => Arc::new(RemoteScorer::from_config(config.clone())?),
        };
        Ok(scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("local".parse::<BackendKind>().unwrap(), BackendKind::Local);
        assert_eq!("Remote".parse::<BackendKind>().unwrap(), BackendKind::Remote);
        assert!("cloud".parse::<BackendKind>().is_err());
        assert_eq!(BackendKind::Remote.to_string(), "remote");
    }

    #[test]
    fn test_build_local_scorer() {
        let backend = Backend::Local {
            delay: DelayStrategy::None,
        };
        let scorer = backend.build_scorer().unwrap();
        assert_eq!(scorer.name(), "local");
        assert_eq!(backend.kind(), BackendKind::Local);
    }

    #[test]
    fn test_build_remote_scorer() {
        let backend = Backend::Remote(InferenceConfig::default());
        let scorer = backend.build_scorer().unwrap();
        assert_eq!(scorer.name(), "remote");
    }

    #[test]
    fn test_build_remote_scorer_rejects_invalid_url() {
        let backend = Backend::Remote(InferenceConfig::default().with_url("::nope::"));
        assert!(backend.build_scorer().is_err());
    }
}
