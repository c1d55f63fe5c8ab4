//! Display implementation for tickup application messages.
//!
//! Single source of truth for all user-facing message text. Keeping the
//! strings here lets the rest of the code emit typed messages and keeps the
//! wording consistent across the CLI and the error paths.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CREDENTIAL MESSAGES ===
            Message::PromptApiKey => "Enter your ClickUp API key".to_string(),

            // === REGISTRATION MESSAGES ===
            Message::TaskRegistered(task_id) => format!("Task {} registered successfully.", task_id),
            Message::RegistrationStatus(status_code, message) => format!("[STATUS CODE: {}] {}", status_code, message),
            Message::TaskUrlMissing => "Please add your task URL.".to_string(),
            Message::PromptTaskUrl => "Task URL".to_string(),
            Message::PromptStart => "Start (YYYY-MM-DD HH:MM)".to_string(),
            Message::PromptEnd => "End (YYYY-MM-DD HH:MM)".to_string(),
            Message::InvalidDateFormat(value) => format!("Date '{}' does not match the expected format YYYY-MM-DD HH:MM", value),
            Message::BatchFinished(count) => format!("Processed {} rows", count),

            // === CSV MESSAGES ===
            Message::CsvMissingColumns => "The CSV file must have the following columns: task_url, start_date, end_date".to_string(),
            Message::CsvLoadFailed(error) => format!("Error loading file: {}", error),
            Message::TemplateWritten(path) => format!("Template written to {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptSelectModules => "Select the modules you want to configure".to_string(),
            Message::PromptApiUrl => "Enter the ClickUp API URL".to_string(),
        };

        write!(f, "{}", text)
    }
}
