//! # Tickup - ClickUp time-entry registration
//!
//! A command-line utility for registering time-tracking entries against
//! ClickUp tasks, either one at a time or in bulk from a CSV file.
//!
//! ## Features
//!
//! - **Single Registration**: Register one time entry interactively or via flags
//! - **Bulk Registration**: Process a CSV of task URLs and time ranges
//! - **CSV Template**: Write an example `data.csv` matching the expected schema
//! - **Configuration**: Interactive setup wizard for the ClickUp endpoint
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tickup::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
