use crate::api::{self, ClickUp};
use crate::libs::{config::Config, import, messages::Message, view::View};
use crate::{msg_debug, msg_print};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(required = true, help = "Path to a CSV file with task_url, start_date and end_date columns")]
    pub file: PathBuf,
}

pub async fn cmd(args: BatchArgs) -> Result<()> {
    // Schema violations reject the whole file here, before any row runs.
    let rows = import::read_rows(&args.file)?;
    msg_debug!(format!("Loaded {} rows from {}", rows.len(), args.file.display()));

    let config = Config::read()?.clickup.unwrap_or_default();
    let clickup = ClickUp::new(&config, &super::api_key()?);

    // Fresh accumulator per run; a fatal mid-batch error still leaves the
    // earlier results in place, so they are rendered before propagating.
    let mut results = Vec::new();
    let outcome = api::register_all(&clickup, &rows, &mut results).await;

    if !results.is_empty() {
        View::results(&results)?;
    }
    if outcome.is_ok() {
        // Always report a completed run, even when the file held no rows.
        msg_print!(Message::BatchFinished(results.len()));
    }

    outcome
}
