//! Build a single design spec from the command line.

use std::path::Path;

use luna_rituals_core::design::{BuildSpecOptions, DesignSpec, build_design_spec, render_prompt};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct Output<'a> {
    spec: &'a DesignSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
}

/// Render the spec (and optionally its prompt) as pretty JSON.
///
/// # Errors
///
/// Returns an error if the spec cannot be serialized.
pub fn render(options: &BuildSpecOptions, with_prompt: bool) -> serde_json::Result<String> {
    let spec = build_design_spec(options);
    let output = Output {
        prompt: with_prompt.then(|| render_prompt(&spec)),
        spec: &spec,
    };
    serde_json::to_string_pretty(&output)
}

/// Build a design spec and print it or write it to `output`.
///
/// # Errors
///
/// Returns an error if the spec cannot be serialized or the file cannot be written.
pub async fn run(
    options: &BuildSpecOptions,
    with_prompt: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = render(options, with_prompt)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            info!(path = %path.display(), "Wrote design spec");
        }
        None => {
            #[allow(clippy::print_stdout)]
            {
                println!("{json}");
            }
        }
    }
    Ok(())
}
