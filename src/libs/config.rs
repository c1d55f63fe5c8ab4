//! Configuration management for the tickup application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and edited through an interactive setup wizard. Each
//! integration owns its configuration structure; only the ClickUp module
//! exists today, but the module-selection wizard keeps the shape open.
//!
//! The ClickUp API key is deliberately absent from this file: the credential
//! is supplied once per invocation and held only in memory.

use super::data_storage::DataStorage;
use crate::api::clickup::ClickUpConfig;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module presented in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Root configuration object.
///
/// Unconfigured modules are omitted from the JSON output, keeping the file
/// clean and letting the application run with zero setup (defaults apply).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// ClickUp API endpoint settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickup: Option<ClickUpConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are used as defaults so re-running the wizard only
    /// updates what the user changes.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![ClickUpConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "clickup" => config.clickup = Some(ClickUpConfig::init(&config.clickup)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
