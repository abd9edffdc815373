//! Deterministic design specifications for affirmation artwork.
//!
//! A [`DesignSpec`] is the complete parameter bundle handed to the artwork
//! generator. The same [`BuildSpecOptions`] always yield the same spec, so a
//! preview and the final print agree.

mod builder;
mod prompt;
pub mod registry;

pub use builder::{build_design_spec, hash_string};
pub use prompt::render_prompt;
pub use registry::{
    AccentType, Contrast, EnergyLevel, LayoutArchetype, MoodSlug, PaletteToken, ThemeSlug,
    TypoSet, TypographyStyle, UnknownSlug,
};

use core::fmt;

use serde::{Deserialize, Serialize};

/// Version stamped into every spec and mixed into derived seeds.
pub const SPEC_VERSION: u32 = 1;

/// Seed of a spec: a caller-supplied number or string, or a derived hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.is_f64() => {
                // Integral floats print without a fraction: 2.0 reads as "2".
                let x = n.as_f64().unwrap_or_default();
                if x == 0.0 {
                    f.write_str("0")
                } else if x.fract() == 0.0 && x.abs() < 1e21 {
                    write!(f, "{x:.0}")
                } else {
                    write!(f, "{x}")
                }
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Fixed production constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub ratio: String,
    pub dpi: u32,
    pub ban: Vec<String>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            ratio: "4:5".to_owned(),
            dpi: 300,
            ban: vec![
                "neon".to_owned(),
                "low_legibility".to_owned(),
                "overcrowded_layout".to_owned(),
            ],
        }
    }
}

/// Inputs to [`build_design_spec`]. Variant knobs default to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpecOptions {
    pub theme: ThemeSlug,
    pub mood: MoodSlug,
    #[serde(default)]
    pub layout_override: Option<LayoutArchetype>,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub seed: Option<Seed>,
    #[serde(default)]
    pub style_variant: u32,
    #[serde(default)]
    pub accent_variant: u32,
    #[serde(default)]
    pub palette_variant: u32,
    #[serde(default)]
    pub copy_variant: u32,
    #[serde(default)]
    pub texture_variant: u32,
    #[serde(default)]
    pub custom_palette_hex: Option<Vec<String>>,
    #[serde(default)]
    pub custom_headline: Option<String>,
    #[serde(default)]
    pub custom_supporting_phrases: Option<Vec<String>>,
}

impl BuildSpecOptions {
    /// Options with only theme and mood set.
    #[must_use]
    pub const fn new(theme: ThemeSlug, mood: MoodSlug) -> Self {
        Self {
            theme,
            mood,
            layout_override: None,
            keywords: String::new(),
            seed: None,
            style_variant: 0,
            accent_variant: 0,
            palette_variant: 0,
            copy_variant: 0,
            texture_variant: 0,
            custom_palette_hex: None,
            custom_headline: None,
            custom_supporting_phrases: None,
        }
    }
}

/// The generated design specification. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSpec {
    pub theme: ThemeSlug,
    pub mood: MoodSlug,
    pub energy_level: EnergyLevel,
    pub layout_archetype: LayoutArchetype,
    pub palette_token: PaletteToken,
    pub accent_set: Vec<AccentType>,
    pub typography: TypoSet,
    pub main_affirmation: String,
    pub supporting_phrases: Vec<String>,
    pub style_variant: u32,
    pub accent_variant: u32,
    pub palette_variant: u32,
    pub copy_variant: u32,
    pub texture_variant: u32,
    pub seed: Seed,
    pub spec_version: u32,
    pub constraints: Constraints,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_accepts_any_json_number() {
        let seed: Seed = serde_json::from_str("1.5").unwrap();
        assert_eq!(seed.to_string(), "1.5");

        let seed: Seed = serde_json::from_str("-42").unwrap();
        assert_eq!(seed, Seed::Number((-42_i64).into()));
        assert_eq!(seed.to_string(), "-42");

        let seed: Seed = serde_json::from_str("2.0").unwrap();
        assert_eq!(seed.to_string(), "2");

        let seed: Seed = serde_json::from_str("\"moon\"").unwrap();
        assert_eq!(seed, Seed::Text("moon".into()));
    }

    #[test]
    fn test_seed_serializes_back_to_number() {
        let seed: Seed = serde_json::from_str("1.5").unwrap();
        assert_eq!(serde_json::to_string(&seed).unwrap(), "1.5");
    }
}
