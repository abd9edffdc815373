//! Concrete batch tasks.

use std::path::PathBuf;

use serde::Serialize;

use luna_rituals_core::ProductId;
use luna_rituals_core::catalog::{self, Affirmation, AffirmationCategory, CatalogError};
use luna_rituals_core::design::{
    BuildSpecOptions, DesignSpec, MoodSlug, ThemeSlug, build_design_spec, render_prompt,
};
use luna_rituals_core::print::{PrintListing, build_listing, enabled_products};

use super::{BatchError, BatchTask, write_json};

fn find(id: &ProductId) -> Result<&'static Affirmation, BatchError> {
    catalog::find_affirmation(id).ok_or_else(|| CatalogError::UnknownProduct(id.to_string()).into())
}

/// Design theme used for an affirmation category.
#[must_use]
pub const fn theme_for_category(category: AffirmationCategory) -> ThemeSlug {
    match category {
        AffirmationCategory::SelfLove => ThemeSlug::Confidence,
        AffirmationCategory::Abundance => ThemeSlug::Abundance,
        AffirmationCategory::Rest => ThemeSlug::Peace,
        AffirmationCategory::Joy => ThemeSlug::Joy,
        AffirmationCategory::Strength => ThemeSlug::Strength,
    }
}

// =============================================================================
// Design specs
// =============================================================================

#[derive(Debug, Serialize)]
struct DesignSpecOutput {
    affirmation_id: String,
    title: String,
    spec: DesignSpec,
    prompt: String,
}

/// Writes `{output_dir}/{id}.json` with the design spec and generation
/// prompt of each affirmation.
#[derive(Debug, Clone)]
pub struct DesignSpecTask {
    pub output_dir: PathBuf,
    pub mood: MoodSlug,
}

impl DesignSpecTask {
    /// Spec inputs for an affirmation: theme from its category, its title as
    /// keywords.
    #[must_use]
    pub fn options_for(&self, affirmation: &Affirmation) -> BuildSpecOptions {
        let mut options =
            BuildSpecOptions::new(theme_for_category(affirmation.category), self.mood);
        options.keywords = affirmation.title.to_owned();
        options
    }
}

impl BatchTask for DesignSpecTask {
    fn name(&self) -> &'static str {
        "design-specs"
    }

    async fn process(&self, id: &ProductId) -> Result<PathBuf, BatchError> {
        let affirmation = find(id)?;
        let spec = build_design_spec(&self.options_for(affirmation));
        let output = DesignSpecOutput {
            affirmation_id: affirmation.id.to_owned(),
            title: affirmation.title.to_owned(),
            prompt: render_prompt(&spec),
            spec,
        };

        write_json(&self.output_dir, id, &output).await
    }
}

// =============================================================================
// Print listings
// =============================================================================

/// Writes `{output_dir}/{id}.json` with one listing payload per enabled
/// print product.
#[derive(Debug, Clone)]
pub struct PrintListingTask {
    pub output_dir: PathBuf,
}

impl BatchTask for PrintListingTask {
    fn name(&self) -> &'static str {
        "print-listings"
    }

    async fn process(&self, id: &ProductId) -> Result<PathBuf, BatchError> {
        let affirmation = find(id)?;
        let listings: Vec<PrintListing> = enabled_products()
            .into_iter()
            .map(|product| build_listing(affirmation, product))
            .collect();

        write_json(&self.output_dir, id, &listings).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::time::Duration;

    use serde_json::Value;

    use super::*;
    use crate::batch::BatchRunner;

    fn pid(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn read_json(path: &std::path::Path) -> Value {
        serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_design_spec_task_writes_spec_and_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let task = DesignSpecTask {
            output_dir: dir.path().join("specs"),
            mood: MoodSlug::Coastal,
        };

        let path = task.process(&pid("aff-001")).await.unwrap();
        assert_eq!(path, dir.path().join("specs").join("aff-001.json"));

        let json = read_json(&path);
        assert_eq!(json["affirmation_id"], "aff-001");
        assert_eq!(json["spec"]["mood"], "coastal");
        assert!(json["prompt"].as_str().unwrap().contains("COLOR PALETTE"));
    }

    #[tokio::test]
    async fn test_design_spec_task_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let task = DesignSpecTask {
            output_dir: dir.path().to_path_buf(),
            mood: MoodSlug::Minimalist,
        };

        let first = read_json(&task.process(&pid("aff-005")).await.unwrap());
        let second = read_json(&task.process(&pid("aff-005")).await.unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_options_use_category_theme_and_title() {
        let task = DesignSpecTask {
            output_dir: PathBuf::new(),
            mood: MoodSlug::Earthy,
        };
        let aff = catalog::find_affirmation(&pid("aff-001")).unwrap();
        let options = task.options_for(aff);
        assert_eq!(options.theme, theme_for_category(aff.category));
        assert_eq!(options.mood, MoodSlug::Earthy);
        assert_eq!(options.keywords, aff.title);
    }

    #[tokio::test]
    async fn test_print_listing_task_writes_enabled_products() {
        let dir = tempfile::tempdir().unwrap();
        let task = PrintListingTask {
            output_dir: dir.path().to_path_buf(),
        };

        let path = task.process(&pid("aff-002")).await.unwrap();
        let json = read_json(&path);
        let listings = json.as_array().unwrap();
        assert_eq!(listings.len(), enabled_products().len());
        assert!(listings.iter().all(|l| l["affirmation_id"] == "aff-002"));
        assert!(
            listings[0]["title"]
                .as_str()
                .unwrap()
                .contains(" - Premium ")
        );
    }

    #[tokio::test]
    async fn test_runner_records_unknown_ids() {
        let dir = tempfile::tempdir().unwrap();
        let task = PrintListingTask {
            output_dir: dir.path().to_path_buf(),
        };

        let report = BatchRunner::new(Duration::ZERO)
            .run(&task, &[pid("aff-001"), pid("aff-404")])
            .await;

        assert_eq!(report.succeeded.len(), 1);
        assert_eq!(report.failed[0].0, pid("aff-404"));
        assert!(!dir.path().join("aff-404.json").exists());
    }
}
