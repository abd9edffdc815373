use super::registry::{LayoutArchetype, PaletteToken};
use super::{BuildSpecOptions, Constraints, DesignSpec, SPEC_VERSION, Seed};

/// 32-bit string hash over UTF-16 code units (`h = h * 31 + c`, wrapping),
/// returning the absolute value.
///
/// Seeds derived here must match seeds computed by the browser preview, so
/// the arithmetic is fixed: signed 32-bit wrap, UTF-16 units, absolute value
/// as unsigned so `i32::MIN` does not overflow.
#[must_use]
pub fn hash_string(s: &str) -> u32 {
    let h = s.encode_utf16().fold(0i32, |h, c| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(c))
    });
    h.unsigned_abs()
}

/// Build a design spec from options.
///
/// Custom copy and custom palettes are taken as supplied, without
/// validation.
#[must_use]
pub fn build_design_spec(options: &BuildSpecOptions) -> DesignSpec {
    let theme = options.theme.definition();
    let mood = options.mood.definition();

    let layout_archetype = options.layout_override.unwrap_or_else(|| {
        theme
            .default_layouts
            .iter()
            .copied()
            .find(|l| mood.allowed_layouts.contains(l))
            .or_else(|| theme.default_layouts.first().copied())
            .unwrap_or(LayoutArchetype::CleanSerif)
    });

    let seed = options.seed.clone().unwrap_or_else(|| {
        let seed_input = format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|v{}",
            options.theme,
            options.mood,
            layout_archetype,
            mood.palette.name,
            options.copy_variant,
            options.style_variant,
            options.accent_variant,
            options.texture_variant,
            options.keywords,
            SPEC_VERSION,
        );
        Seed::Number(hash_string(&seed_input).into())
    });

    let (main_affirmation, supporting_phrases) = match (
        options.custom_headline.as_deref().filter(|h| !h.is_empty()),
        options.custom_supporting_phrases.as_ref(),
    ) {
        (Some(headline), Some(phrases)) => (headline.to_owned(), phrases.clone()),
        _ => {
            let lexicon = theme.headline_lexicon;
            let index = hash_string(&format!("{seed}headline")) as usize % lexicon.len();
            let headline = lexicon.get(index).copied().unwrap_or_default();

            let templates = theme.phrase_templates;
            let template = templates
                .get(options.copy_variant as usize % templates.len())
                .map(|t| t.iter().map(|p| (*p).to_owned()).collect::<Vec<_>>())
                .unwrap_or_default();

            (headline.to_owned(), weave_keywords(template, &options.keywords))
        }
    };

    let palette_token = match &options.custom_palette_hex {
        Some(hex) => custom_palette(hex, &mood.palette.to_token()),
        None => mood.palette.to_token(),
    };

    DesignSpec {
        theme: options.theme,
        mood: options.mood,
        energy_level: theme.energy_level,
        layout_archetype,
        palette_token,
        accent_set: mood.accents.to_vec(),
        typography: theme.typography,
        main_affirmation,
        supporting_phrases,
        style_variant: options.style_variant,
        accent_variant: options.accent_variant,
        palette_variant: options.palette_variant,
        copy_variant: options.copy_variant,
        texture_variant: options.texture_variant,
        seed,
        spec_version: SPEC_VERSION,
        constraints: Constraints::default(),
    }
}

/// Replace the sixth phrase with the trimmed keywords, first letter
/// upper-cased. Blank keywords leave the phrases unchanged.
fn weave_keywords(mut phrases: Vec<String>, keywords: &str) -> Vec<String> {
    let keywords = keywords.trim();
    let mut chars = keywords.chars();
    let Some(first) = chars.next() else {
        return phrases;
    };
    let line: String = first.to_uppercase().chain(chars).collect();
    phrases.truncate(5);
    phrases.push(line);
    phrases
}

fn custom_palette(hex: &[String], base: &PaletteToken) -> PaletteToken {
    PaletteToken {
        name: "custom_palette".to_owned(),
        description: "Custom user-selected colors".to_owned(),
        hex: hex.to_vec(),
        contrast: base.contrast,
    }
}
