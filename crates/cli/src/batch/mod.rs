//! Sequential batch jobs over the affirmation catalog.
//!
//! One item completes (or fails) before the next starts, with a fixed delay
//! between items. A failed item is logged and recorded in the report; the run
//! carries on. Nothing is retried.

mod tasks;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use luna_rituals_core::ProductId;
use luna_rituals_core::catalog::{self, AffirmationCategory, CatalogError};

pub use tasks::{DesignSpecTask, PrintListingTask};

/// Errors raised while processing one batch item.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One unit of batch work, run once per product id.
pub trait BatchTask {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Process one product and return the path of the file written.
    fn process(&self, id: &ProductId) -> impl Future<Output = Result<PathBuf, BatchError>> + Send;
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<(ProductId, PathBuf)>,
    /// Failed ids with the failure reason.
    pub failed: Vec<(ProductId, String)>,
}

impl BatchReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Log the run summary.
    pub fn log_summary(&self, task: &str) {
        info!("{}", "=".repeat(60));
        info!(task, "BATCH SUMMARY");
        info!("{}", "=".repeat(60));
        info!("Successful: {}", self.succeeded.len());
        info!("Failed: {}", self.failed.len());
        info!("Total: {}", self.total());

        if !self.failed.is_empty() {
            warn!("Failed items:");
            for (id, reason) in &self.failed {
                warn!("  - {id}: {reason}");
            }
        }
    }
}

/// Runs a task over ids one at a time.
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    delay: Duration,
}

impl BatchRunner {
    /// Create a runner that waits `delay` between items.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Process every id in order.
    pub async fn run<T: BatchTask>(&self, task: &T, ids: &[ProductId]) -> BatchReport {
        let mut report = BatchReport::default();
        let total = ids.len();

        for (i, id) in ids.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            info!(task = task.name(), product_id = %id, "Processing {}/{total}", i + 1);
            match task.process(id).await {
                Ok(path) => {
                    info!(product_id = %id, path = %path.display(), "Wrote output");
                    report.succeeded.push((id.clone(), path));
                }
                Err(e) => {
                    warn!(task = task.name(), product_id = %id, error = %e, "Item failed");
                    report.failed.push((id.clone(), e.to_string()));
                }
            }
        }

        report
    }
}

/// Which affirmations a batch run covers.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub all: bool,
    /// Only the first two matches.
    pub test: bool,
    pub products: Option<Vec<ProductId>>,
    pub category: Option<AffirmationCategory>,
}

impl Selection {
    /// Ids of the selected affirmations in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error message if no selector is given or nothing matches.
    pub fn resolve(&self) -> Result<Vec<ProductId>, String> {
        if !self.all && !self.test && self.products.is_none() && self.category.is_none() {
            return Err(
                "no affirmations selected (use --all, --test, --products or --category)".to_string(),
            );
        }

        let mut ids: Vec<ProductId> = catalog::affirmations()
            .iter()
            .filter(|a| {
                self.products
                    .as_ref()
                    .is_none_or(|p| p.iter().any(|id| id.as_str() == a.id))
            })
            .filter(|a| self.category.is_none_or(|c| a.category == c))
            .filter_map(|a| ProductId::parse(a.id).ok())
            .collect();

        if self.test {
            ids.truncate(2);
        }
        if ids.is_empty() {
            return Err("no affirmations match the selection".to_string());
        }
        Ok(ids)
    }
}

/// Serialize `value` as pretty JSON to `dir/{id}.json`, creating `dir`.
async fn write_json<T: Serialize + Sync>(
    dir: &Path,
    id: &ProductId,
    value: &T,
) -> Result<PathBuf, BatchError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| BatchError::Io { path, source }
    };

    tokio::fs::create_dir_all(dir).await.map_err(io_err(dir))?;
    let path = dir.join(format!("{id}.json"));
    let json = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(&path, json).await.map_err(io_err(&path))?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Mutex;
    use std::time::Instant;

    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    /// Records call order and fails on chosen ids.
    struct Recorder {
        fail_on: &'static str,
        calls: Mutex<Vec<String>>,
    }

    impl BatchTask for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        async fn process(&self, id: &ProductId) -> Result<PathBuf, BatchError> {
            self.calls.lock().unwrap().push(id.to_string());
            if id.as_str() == self.fail_on {
                return Err(CatalogError::UnknownProduct(id.to_string()).into());
            }
            Ok(PathBuf::from(format!("{id}.json")))
        }
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_the_run() {
        let task = Recorder {
            fail_on: "aff-002",
            calls: Mutex::new(Vec::new()),
        };
        let ids = [pid("aff-001"), pid("aff-002"), pid("aff-003")];

        let report = BatchRunner::new(Duration::ZERO).run(&task, &ids).await;

        assert_eq!(*task.calls.lock().unwrap(), ["aff-001", "aff-002", "aff-003"]);
        assert_eq!(report.succeeded.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, pid("aff-002"));
        assert!(report.failed[0].1.contains("unknown product"));
        assert_eq!(report.total(), 3);
        assert!(!report.is_success());
    }

    #[tokio::test]
    async fn test_delay_between_items_only() {
        let task = Recorder {
            fail_on: "",
            calls: Mutex::new(Vec::new()),
        };
        let ids = [pid("aff-001"), pid("aff-002"), pid("aff-003")];
        let delay = Duration::from_millis(30);

        let start = Instant::now();
        let report = BatchRunner::new(delay).run(&task, &ids).await;

        assert!(start.elapsed() >= delay * 2);
        assert!(report.is_success());
    }

    #[test]
    fn test_selection_requires_a_selector() {
        assert!(Selection::default().resolve().is_err());
    }

    #[test]
    fn test_selection_filters() {
        let all = Selection {
            all: true,
            ..Selection::default()
        };
        assert_eq!(all.resolve().unwrap().len(), 24);

        let test = Selection {
            test: true,
            ..Selection::default()
        };
        assert_eq!(test.resolve().unwrap(), [pid("aff-001"), pid("aff-002")]);

        let products = Selection {
            products: Some(vec![pid("aff-010"), pid("aff-004")]),
            ..Selection::default()
        };
        assert_eq!(products.resolve().unwrap(), [pid("aff-004"), pid("aff-010")]);

        let rest = Selection {
            category: Some(AffirmationCategory::Rest),
            ..Selection::default()
        };
        let ids = rest.resolve().unwrap();
        assert!(ids.iter().all(|id| {
            catalog::find_affirmation(id).unwrap().category == AffirmationCategory::Rest
        }));
    }

    #[test]
    fn test_selection_with_no_matches() {
        let none = Selection {
            products: Some(vec![pid("aff-999")]),
            ..Selection::default()
        };
        assert!(none.resolve().is_err());
    }
}
