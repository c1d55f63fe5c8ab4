use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

// The example file is shipped verbatim; no generation logic.
const TEMPLATE: &str = include_str!("../../data.csv");

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[arg(long, default_value = "data.csv", help = "Where to write the example file")]
    output: PathBuf,
}

pub fn cmd(args: TemplateArgs) -> Result<()> {
    fs::write(&args.output, TEMPLATE)?;
    msg_success!(Message::TemplateWritten(args.output.display().to_string()));
    Ok(())
}
