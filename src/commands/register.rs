use crate::api::{ClickUp, Registrar};
use crate::libs::{config::Config, import::DATE_FORMAT, messages::Message};
use crate::msg_info;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long, help = "ClickUp task URL, e.g. https://app.clickup.com/t/459155/AQPOPS-372")]
    pub task_url: Option<String>,
    #[arg(long, help = "Start of the entry in 'YYYY-MM-DD HH:MM' format")]
    pub start: Option<String>,
    #[arg(long, help = "End of the entry in 'YYYY-MM-DD HH:MM' format")]
    pub end: Option<String>,
}

pub async fn cmd(args: RegisterArgs) -> Result<()> {
    let task_url = match args.task_url {
        Some(url) => url,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskUrl.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    if task_url.trim().is_empty() {
        // An empty URL ends the run with a notice, not an error.
        msg_info!(Message::TaskUrlMissing);
        return Ok(());
    }

    // The form defaults: today's date, 08:00 to 09:00.
    let today = Local::now().date_naive();
    let start = prompt_or(args.start, Message::PromptStart, format!("{} 08:00", today.format("%Y-%m-%d")))?;
    let end = prompt_or(args.end, Message::PromptEnd, format!("{} 09:00", today.format("%Y-%m-%d")))?;

    let start = NaiveDateTime::parse_from_str(start.trim(), DATE_FORMAT)
        .with_context(|| Message::InvalidDateFormat(start.trim().to_string()).to_string())?;
    let end = NaiveDateTime::parse_from_str(end.trim(), DATE_FORMAT)
        .with_context(|| Message::InvalidDateFormat(end.trim().to_string()).to_string())?;

    let config = Config::read()?.clickup.unwrap_or_default();
    let clickup = ClickUp::new(&config, &super::api_key()?);

    let result = clickup.register(task_url.trim(), start, end).await?;
    msg_info!(Message::RegistrationStatus(result.status_code, result.message));

    Ok(())
}

fn prompt_or(value: Option<String>, prompt: Message, default: String) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(default)
            .interact_text()?),
    }
}
