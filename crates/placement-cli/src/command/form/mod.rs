use anyhow::{Context, bail};
use placement_engine::{DelayStrategy, PredictionSession};

use crate::{
    command::{BackendArg, build_runtime, form::app::FormApp},
    tui::Runtime,
};

mod app;
mod screen;

const DEFAULT_REFRESH_RATE: f64 = 20.0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FormArg {
    /// Redraw rate of the pending indicator (Hz)
    #[clap(long, default_value_t = DEFAULT_REFRESH_RATE)]
    refresh_rate: f64,
}

impl Default for FormArg {
    fn default() -> Self {
        Self {
            refresh_rate: DEFAULT_REFRESH_RATE,
        }
    }
}

pub(crate) fn run(backend_arg: &BackendArg, arg: &FormArg) -> anyhow::Result<()> {
    let FormArg { refresh_rate } = arg;
    if !(refresh_rate.is_finite() && *refresh_rate > 0.0) {
        bail!("--refresh-rate must be positive, got {refresh_rate}");
    }

    let backend = backend_arg.to_backend(DelayStrategy::DEMO)?;
    let scorer = backend
        .build_scorer()
        .context("Failed to configure scorer")?;
    let runtime = build_runtime()?;
    let session = PredictionSession::new(scorer, runtime.handle().clone());

    let mut app = FormApp::new(session, backend.kind(), *refresh_rate);
    Runtime::new().run(&mut app)?;

    Ok(())
}
