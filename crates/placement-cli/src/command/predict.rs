use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use placement_engine::{DelayStrategy, PredictionSession, RequestState};
use placement_evaluator::{PredictionResult, RawInputs};
use serde::Serialize;
use tracing::info;

use crate::command::{BackendArg, build_runtime};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PredictArg {
    /// IQ score (nominal range 60-140)
    #[clap(long, allow_negative_numbers = true)]
    iq: f64,
    /// CGPA (nominal range 4.0-10.0)
    #[clap(long, allow_negative_numbers = true)]
    cgpa: f64,
    /// Output file path (default: stdout)
    #[clap(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PredictionReport {
    backend: String,
    inputs: RawInputs,
    result: PredictionResult,
}

pub(crate) fn run(backend_arg: &BackendArg, arg: &PredictArg) -> anyhow::Result<()> {
    let PredictArg { iq, cgpa, output } = arg;
    let inputs = RawInputs::new(*iq, *cgpa);

    let backend = backend_arg.to_backend(DelayStrategy::None)?;
    let scorer = backend
        .build_scorer()
        .context("Failed to configure scorer")?;
    let runtime = build_runtime()?;

    let mut session = PredictionSession::new(scorer, runtime.handle().clone());
    session.trigger(inputs);
    runtime.block_on(session.settled());

    let result = match session.state() {
        RequestState::Resolved(result) => *result,
        RequestState::Failed(error) => bail!("{error}"),
        state @ (RequestState::Idle | RequestState::Pending) => {
            bail!("Prediction did not settle (state: {state:?})")
        }
    };
    info!(
        backend = %backend.kind(),
        placed = result.placed,
        chance = ?result.chance,
        "prediction complete"
    );

    let report = PredictionReport {
        backend: backend.kind().to_string(),
        inputs,
        result,
    };
    match output {
        Some(path) => write_json(BufWriter::new(create_file(path)?), &report)
            .with_context(|| format!("Failed to write JSON to {}", path.display()))?,
        None => write_json(io::stdout().lock(), &report).context("Failed to write JSON to stdout")?,
    }

    Ok(())
}

fn create_file(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))
}

fn write_json<W, T>(mut writer: W, value: &T) -> io::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}
