use std::{path::PathBuf, time::Duration};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use placement_engine::{Backend, BackendKind, DelayStrategy};
use placement_remote::InferenceConfig;

use crate::logging::{self, LogTarget};

use self::{form::FormArg, ping::PingArg, predict::PredictArg};

mod form;
mod ping;
mod predict;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Campus placement predictor", long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    backend: BackendArg,
    /// Write logs to this file (verbosity follows RUST_LOG)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Interactive prediction form (default)
    Form(#[clap(flatten)] FormArg),
    /// Run a single prediction and print the result as JSON
    Predict(#[clap(flatten)] PredictArg),
    /// Check that the inference backend answers
    Ping(#[clap(flatten)] PingArg),
}

/// Scorer selection shared by all modes.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BackendArg {
    /// Scorer to use: `local` heuristic or `remote` inference backend
    #[clap(long, global = true, default_value_t = BackendKind::Local)]
    backend: BackendKind,
    /// Base URL of the inference backend [default: $PLACEMENT_API_URL or http://localhost:8000]
    #[clap(long, global = true)]
    api_url: Option<String>,
    /// Inference request timeout in seconds [default: $PLACEMENT_API_TIMEOUT_SECS or 10]
    #[clap(long, global = true)]
    timeout_secs: Option<f64>,
    /// Simulated latency of the local heuristic in milliseconds
    #[clap(long, global = true)]
    latency_ms: Option<u64>,
}

impl BackendArg {
    /// Environment settings with the command-line overrides applied.
    pub(crate) fn inference_config(&self) -> anyhow::Result<InferenceConfig> {
        self.override_config(InferenceConfig::from_env())
    }

    fn override_config(&self, mut config: InferenceConfig) -> anyhow::Result<InferenceConfig> {
        if let Some(url) = &self.api_url {
            config = config.with_url(url.clone());
        }
        if let Some(secs) = self.timeout_secs {
            if !(secs.is_finite() && secs > 0.0) {
                bail!("--timeout-secs must be positive, got {secs}");
            }
            let timeout = Duration::try_from_secs_f64(secs)
                .with_context(|| format!("Invalid timeout: {secs}"))?;
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }

    /// Resolves the backend, using `default_delay` when no latency was given.
    pub(crate) fn to_backend(&self, default_delay: DelayStrategy) -> anyhow::Result<Backend> {
        let backend = match self.backend {
            BackendKind::Local => Backend::Local {
                delay: self
                    .latency_ms
                    .map_or(default_delay, DelayStrategy::from_millis),
            },
            BackendKind::Remote => Backend::Remote(self.inference_config()?),
        };
        Ok(backend)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let log_file = args.log_file.as_deref();
    match args.mode.unwrap_or(Mode::Form(FormArg::default())) {
        Mode::Form(arg) => {
            logging::init(LogTarget::for_terminal_ui(log_file))?;
            form::run(&args.backend, &arg)?;
        }
        Mode::Predict(arg) => {
            logging::init(LogTarget::for_command(log_file))?;
            predict::run(&args.backend, &arg)?;
        }
        Mode::Ping(arg) => {
            logging::init(LogTarget::for_command(log_file))?;
            ping::run(&args.backend, &arg)?;
        }
    }
    Ok(())
}

pub(crate) fn build_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandArgs {
        CommandArgs::try_parse_from(std::iter::once("placement").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_to_local_form() {
        let args = parse(&[]);
        assert!(args.mode.is_none());
        let backend = args.backend.to_backend(DelayStrategy::DEMO).unwrap();
        assert_eq!(
            backend,
            Backend::Local {
                delay: DelayStrategy::DEMO
            }
        );
    }

    #[test]
    fn test_latency_override() {
        let args = parse(&["predict", "--iq", "100", "--cgpa", "7", "--latency-ms", "0"]);
        let backend = args.backend.to_backend(DelayStrategy::DEMO).unwrap();
        assert_eq!(
            backend,
            Backend::Local {
                delay: DelayStrategy::None
            }
        );
    }

    #[test]
    fn test_remote_backend() {
        let args = parse(&[
            "--backend",
            "remote",
            "--api-url",
            "http://inference.test:9000",
            "--timeout-secs",
            "2",
            "ping",
        ]);
        let backend = args.backend.to_backend(DelayStrategy::None).unwrap();
        assert_eq!(
            backend,
            Backend::Remote(InferenceConfig {
                base_url: "http://inference.test:9000".to_owned(),
                timeout: Duration::from_secs(2),
            })
        );
    }

    #[test]
    fn test_flags_override_environment_config() {
        let base = InferenceConfig::default()
            .with_url("http://from-env:8000")
            .with_timeout(Duration::from_secs(3));

        let args = parse(&["ping"]);
        assert_eq!(args.backend.override_config(base.clone()).unwrap(), base);

        let args = parse(&["--timeout-secs", "1.5", "ping"]);
        let config = args.backend.override_config(base).unwrap();
        assert_eq!(config.base_url, "http://from-env:8000");
        assert_eq!(config.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_rejects_non_positive_timeout() {
        let args = parse(&["--backend", "remote", "--timeout-secs", "0"]);
        assert!(args.backend.to_backend(DelayStrategy::None).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["predict", "--iq", "90", "--cgpa", "6.5", "--backend", "remote"]);
        assert_eq!(args.backend.backend, BackendKind::Remote);
        assert!(matches!(args.mode, Some(Mode::Predict(_))));
    }
}
