pub mod batch;
pub mod init;
pub mod register;
pub mod template;

use crate::libs::messages::Message;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Password};
use std::env;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Register a single time entry")]
    Register(register::RegisterArgs),
    #[command(about = "Register time entries in bulk from a CSV file")]
    Batch(batch::BatchArgs),
    #[command(about = "Write an example CSV file matching the expected schema")]
    Template(template::TemplateArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Register(args) => register::cmd(args).await,
            Commands::Batch(args) => batch::cmd(args).await,
            Commands::Template(args) => template::cmd(args),
        }
    }
}

/// Obtains the ClickUp API key for this invocation.
///
/// The key is read from `CLICKUP_API_KEY` or prompted for with a hidden
/// input. It is held only in memory; an empty value is allowed here and
/// rejected by the client before any request is issued.
pub(crate) fn api_key() -> Result<String> {
    if let Ok(key) = env::var("CLICKUP_API_KEY") {
        return Ok(key);
    }
    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptApiKey.to_string())
        .allow_empty_password(true)
        .interact()?;
    Ok(key)
}
