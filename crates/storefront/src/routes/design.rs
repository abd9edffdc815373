//! Design spec handlers.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use luna_rituals_core::design::{
    AccentType, BuildSpecOptions, DesignSpec, EnergyLevel, LayoutArchetype, MoodSlug,
    PaletteToken, ThemeSlug, TypoSet, build_design_spec, render_prompt,
};

/// Build request: the builder options plus whether to render the prompt.
#[derive(Debug, Deserialize)]
pub struct DesignSpecRequest {
    #[serde(flatten)]
    pub options: BuildSpecOptions,
    #[serde(default)]
    pub include_prompt: bool,
}

#[derive(Debug, Serialize)]
pub struct DesignSpecResponse {
    pub spec: DesignSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ThemeView {
    pub slug: ThemeSlug,
    pub emotion: &'static str,
    pub energy_level: EnergyLevel,
    pub typography: TypoSet,
    pub default_layouts: &'static [LayoutArchetype],
}

#[derive(Debug, Serialize)]
pub struct MoodView {
    pub slug: MoodSlug,
    pub palette: PaletteToken,
    pub accents: &'static [AccentType],
    pub allowed_layouts: &'static [LayoutArchetype],
    pub weight: f32,
}

#[derive(Debug, Serialize)]
pub struct LayoutView {
    pub slug: LayoutArchetype,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Registry {
    pub themes: Vec<ThemeView>,
    pub moods: Vec<MoodView>,
    pub layouts: Vec<LayoutView>,
}

/// Build a design spec, optionally with its generation prompt.
#[instrument(skip(req), fields(theme = %req.options.theme, mood = %req.options.mood))]
pub async fn build(Json(req): Json<DesignSpecRequest>) -> Json<DesignSpecResponse> {
    let spec = build_design_spec(&req.options);
    let prompt = req.include_prompt.then(|| render_prompt(&spec));
    tracing::debug!(seed = %spec.seed, layout = %spec.layout_archetype, "Built design spec");

    Json(DesignSpecResponse { spec, prompt })
}

/// Theme, mood and layout registries.
#[instrument]
pub async fn registry() -> Json<Registry> {
    let themes = ThemeSlug::ALL
        .iter()
        .map(|&slug| {
            let def = slug.definition();
            ThemeView {
                slug,
                emotion: def.emotion,
                energy_level: def.energy_level,
                typography: def.typography,
                default_layouts: def.default_layouts,
            }
        })
        .collect();

    let moods = MoodSlug::ALL
        .iter()
        .map(|&slug| {
            let def = slug.definition();
            MoodView {
                slug,
                palette: def.palette.to_token(),
                accents: def.accents,
                allowed_layouts: def.allowed_layouts,
                weight: def.weight,
            }
        })
        .collect();

    let layouts = LayoutArchetype::ALL
        .iter()
        .map(|&slug| LayoutView {
            slug,
            description: slug.description(),
        })
        .collect();

    Json(Registry {
        themes,
        moods,
        layouts,
    })
}
