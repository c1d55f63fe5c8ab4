//! API client module for the ClickUp integration.
//!
//! Exposes the [`Registrar`] trait implemented by the ClickUp client and the
//! sequential batch loop that drives it. The trait seam exists so the batch
//! logic can be exercised against a mock client in tests without touching
//! the network.

use crate::libs::import::BulkRow;
use anyhow::Result;
use chrono::NaiveDateTime;

pub mod clickup;

// Re-export for easier access from command modules
pub use clickup::{ClickUp, ClickUpConfig, RegistrationResult};

/// Common interface for anything that can register one time entry.
///
/// The production implementation is [`ClickUp`]; tests substitute a mock.
#[allow(async_fn_in_trait)]
pub trait Registrar {
    /// Registers a single time entry for the task behind `task_url`.
    ///
    /// Ordinary HTTP outcomes (success or remote rejection) are folded into a
    /// [`RegistrationResult`]; transport-level failures are returned as errors.
    async fn register(&self, task_url: &str, start: NaiveDateTime, end: NaiveDateTime) -> Result<RegistrationResult>;
}

/// Registers every row of an uploaded dataset, one at a time, in input order.
///
/// Each row is trimmed and its date fields parsed before the registrar is
/// invoked; the result is pushed onto the caller-owned `results` accumulator.
/// A remote rejection on one row does not stop the next row, but a date that
/// fails to parse (or a transport failure) aborts the remainder of the batch.
/// Results accumulated before the failing row are preserved.
pub async fn register_all<R: Registrar>(registrar: &R, rows: &[BulkRow], results: &mut Vec<RegistrationResult>) -> Result<()> {
    for row in rows {
        let (task_url, start, end) = row.parsed()?;
        let result = registrar.register(&task_url, start, end).await?;
        results.push(result);
    }
    Ok(())
}
