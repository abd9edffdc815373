//! Batch job commands.
//!
//! # Usage
//!
//! ```bash
//! # Design specs for every affirmation
//! luna-cli batch design-specs --all --output out/design-specs
//!
//! # Print listing payloads for two products
//! luna-cli batch print-listings --products aff-001,aff-002 --output out/listings
//! ```

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use luna_rituals_core::ProductId;
use luna_rituals_core::design::MoodSlug;

use crate::batch::{BatchRunner, BatchTask, DesignSpecTask, PrintListingTask, Selection};

/// Run `task` over the selection and log the summary.
///
/// # Errors
///
/// Returns an error if the selection is empty or any item failed.
async fn run<T: BatchTask>(
    task: &T,
    selection: &Selection,
    delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let ids: Vec<ProductId> = selection.resolve()?;
    info!(task = task.name(), count = ids.len(), "Starting batch");

    let report = BatchRunner::new(delay).run(task, &ids).await;
    report.log_summary(task.name());

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} of {} items failed", report.failed.len(), report.total()).into())
    }
}

/// Write a design spec JSON per selected affirmation.
///
/// # Errors
///
/// Returns an error if the selection is empty or any item failed.
pub async fn design_specs(
    selection: &Selection,
    output_dir: PathBuf,
    mood: MoodSlug,
    delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let task = DesignSpecTask { output_dir, mood };
    run(&task, selection, delay).await
}

/// Write print listing payloads per selected affirmation.
///
/// # Errors
///
/// Returns an error if the selection is empty or any item failed.
pub async fn print_listings(
    selection: &Selection,
    output_dir: PathBuf,
    delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let task = PrintListingTask { output_dir };
    run(&task, selection, delay).await
}
