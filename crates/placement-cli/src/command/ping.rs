use anyhow::Context;
use placement_remote::InferenceClient;

use crate::command::{BackendArg, build_runtime};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PingArg {}

pub(crate) fn run(backend_arg: &BackendArg, _arg: &PingArg) -> anyhow::Result<()> {
    let config = backend_arg.inference_config()?;
    let client = InferenceClient::new(config).context("Failed to configure inference client")?;
    let runtime = build_runtime()?;

    let status = runtime
        .block_on(client.health())
        .with_context(|| format!("Inference backend at {} is not reachable", client.config().base_url))?;

    match status.message {
        Some(message) => println!("{}: ok ({message})", client.config().base_url),
        None => println!("{}: ok", client.config().base_url),
    }
    Ok(())
}
