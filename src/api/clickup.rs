use crate::libs::{config::ConfigModule, messages::Message};
use crate::msg_debug;
use anyhow::Result;
use chrono::{Local, LocalResult, NaiveDateTime};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Public ClickUp REST endpoint.
pub const API_URL: &str = "https://api.clickup.com/api/v2";

const TIME_ENTRIES_URL: &str = "time_entries";

/// Credential failures detected before any request is issued.
#[derive(Debug, Error, PartialEq)]
pub enum ClickUpError {
    #[error("Please add your ClickUp API key to continue.")]
    MissingApiKey,
}

/// Task coordinates extracted from a ClickUp task URL.
///
/// The URL is split on `/`: the last segment is the task id and the
/// second-to-last is the team id, unless that segment is the literal `t`
/// marking the short URL form, in which case no team id is available.
/// Nothing is validated here on purpose; a malformed URL produces
/// nonsensical ids and the remote service answers with a 4xx.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRef {
    pub task_id: String,
    pub team_id: Option<String>,
}

impl TaskRef {
    pub fn parse(task_url: &str) -> Self {
        let mut segments = task_url.rsplit('/');
        let task_id = segments.next().unwrap_or_default().to_string();
        let team_id = match segments.next() {
            Some("t") | None => None,
            Some(segment) => Some(segment.to_string()),
        };
        Self { task_id, team_id }
    }
}

/// Milliseconds between two instants. Negative when `end` precedes `start`;
/// the remote API is left to judge such entries.
pub fn task_duration_ms(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_milliseconds()
}

/// Epoch milliseconds of a naive instant interpreted in local time.
///
/// A DST fold resolves to the earlier instant; an instant skipped by a DST
/// gap falls back to the UTC interpretation.
pub fn epoch_ms(instant: NaiveDateTime) -> i64 {
    match instant.and_local_timezone(Local) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => instant.and_utc().timestamp_millis(),
    }
}

/// Wire body of a time-entry registration. Built fresh per call, never stored.
#[derive(Debug, Serialize)]
pub struct TimeEntryRequest {
    pub tid: String,
    pub duration: i64,
    pub start: i64,
}

/// Normalized outcome of one registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationResult {
    pub status_code: u16,
    pub message: String,
}

/// Error body returned by ClickUp on non-200 responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    err: Option<String>,
}

/// ClickUp time-tracking API client.
pub struct ClickUp {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ClickUp {
    pub fn new(config: &ClickUpConfig, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            api_key: api_key.to_string(),
        }
    }
}

impl super::Registrar for ClickUp {
    async fn register(&self, task_url: &str, start: NaiveDateTime, end: NaiveDateTime) -> Result<RegistrationResult> {
        if self.api_key.is_empty() {
            return Err(ClickUpError::MissingApiKey.into());
        }

        let task = TaskRef::parse(task_url);
        let entry = TimeEntryRequest {
            tid: task.task_id.clone(),
            duration: task_duration_ms(start, end),
            start: epoch_ms(start),
        };

        // Short URLs carry no team id; the empty segment is sent as-is and
        // the remote rejects it, which the result mapping reports back.
        let team_id = task.team_id.as_deref().unwrap_or_default();
        let url = format!("{}/team/{}/{}", self.api_url, team_id, TIME_ENTRIES_URL);
        msg_debug!(format!("POST {}", url));

        let res = self
            .client
            .post(url)
            .header(AUTHORIZATION, &self.api_key)
            .query(&[("custom_task_ids", "true"), ("team_id", team_id)])
            .json(&entry)
            .send()
            .await?;

        let status_code = res.status().as_u16();
        let message = match res.status() {
            StatusCode::OK => Message::TaskRegistered(task.task_id).to_string(),
            _ => res.json::<ApiErrorBody>().await?.err.unwrap_or_default(),
        };

        Ok(RegistrationResult { status_code, message })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClickUpConfig {
    pub api_url: String,
}

impl Default for ClickUpConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
        }
    }
}

impl ClickUpConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "clickup".to_string(),
            name: "ClickUp".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        println!("ClickUp settings");
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
