//! Print-ready generation brief rendered from a [`DesignSpec`].

use core::fmt;

use super::DesignSpec;
use super::registry::{AccentType, Contrast, EnergyLevel, PaletteToken, TypographyStyle};

const RULE: &str = "===================================================================";

/// Render the full generation brief for a spec.
#[must_use]
pub fn render_prompt(spec: &DesignSpec) -> String {
    Prompt(spec).to_string()
}

struct Prompt<'a>(&'a DesignSpec);

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.0;
        let palette = &spec.palette_token;
        let direct = spec.energy_level == EnergyLevel::Direct;

        writeln!(
            f,
            "You are an expert designer creating a PREMIUM PRINT-READY affirmation poster for professional production."
        )?;
        writeln!(
            f,
            "This will be physically printed and framed - quality and precision are paramount."
        )?;

        section(f, "COLOR PALETTE - STRICT ENFORCEMENT")?;
        write_color_guidance(f, palette)?;
        writeln!(f)?;
        writeln!(f, "ONLY use these exact hex colors: {}", palette.hex.join(" | "))?;
        writeln!(f, "NO other colors permitted. NO gradients between non-palette colors.")?;
        writeln!(f, "Palette contrast level: {}", palette.contrast)?;

        section(f, "LAYOUT ARCHITECTURE - MANDATORY STRUCTURE")?;
        writeln!(f, "LAYOUT SYSTEM: {}", spec.layout_archetype)?;
        writeln!(f, "{}", spec.layout_archetype.description())?;
        writeln!(f)?;
        writeln!(f, "THIS IS THE CORE COMPOSITION STRUCTURE - NOT NEGOTIABLE.")?;

        section(f, "REQUIRED DECORATIVE ACCENTS")?;
        let accents: Vec<&str> = spec.accent_set.iter().map(|a| accent_description(*a)).collect();
        writeln!(f, "REQUIRED ACCENTS: {}", accents.join(", "))?;
        writeln!(
            f,
            "YOU MUST INCLUDE these visual elements in the design - they are not suggestions."
        )?;

        section(f, "TYPOGRAPHY SPECIFICATION")?;
        writeln!(f, "HEADLINE FONT STYLE: {}", spec.typography.headline)?;
        writeln!(f, "{}", headline_style(spec.typography.headline))?;
        writeln!(f)?;
        writeln!(f, "SUPPORTING TEXT FONT STYLE: {}", spec.typography.support)?;
        writeln!(f, "{}", support_style(spec.typography.support))?;
        writeln!(f)?;
        writeln!(f, "{}", energy_guidance(spec.energy_level))?;
        writeln!(f)?;
        writeln!(f, "MAIN AFFIRMATION TEXT (hero text): \"{}\"", spec.main_affirmation)?;
        writeln!(f, "- Size: 3-5x larger than supporting text")?;
        writeln!(
            f,
            "- Treatment: {}",
            if direct { "Uppercase and powerful" } else { "Balanced and flowing" }
        )?;
        writeln!(
            f,
            "- Letter spacing: {}",
            if direct { "Wide (0.05-0.1em)" } else { "Normal to slightly loose" }
        )?;
        writeln!(f)?;
        writeln!(f, "SUPPORTING PHRASES (secondary text):")?;
        for (i, phrase) in spec.supporting_phrases.iter().enumerate() {
            writeln!(f, "  {}. \"{phrase}\"", i + 1)?;
        }
        writeln!(f, "- ALL phrases must be included in the final design")?;

        section(f, "THEME & MOOD DIRECTION")?;
        writeln!(
            f,
            "THEME: {} (emotion: {})",
            spec.theme.as_str().to_uppercase(),
            spec.theme.definition().emotion
        )?;
        writeln!(
            f,
            "MOOD: {} ({})",
            spec.mood.as_str().to_uppercase(),
            spec.mood.definition().palette.description
        )?;
        writeln!(f, "The theme dictates the EMOTIONAL TONE and MESSAGE.")?;
        writeln!(f, "The mood dictates the VISUAL STYLE and DECORATIVE APPROACH.")?;

        section(f, "TECHNICAL PRODUCTION REQUIREMENTS")?;
        writeln!(f, "- Aspect ratio: {} (EXACT - no deviation)", spec.constraints.ratio)?;
        writeln!(
            f,
            "- Resolution: {} DPI minimum (print-quality)",
            spec.constraints.dpi
        )?;
        writeln!(f, "- Edge treatment: FULL BLEED - extend all backgrounds to canvas edges")?;
        writeln!(f)?;
        writeln!(f, "BANNED ELEMENTS (absolutely forbidden):")?;
        for ban in &spec.constraints.ban {
            writeln!(f, "x {}", ban.replace('_', " ").to_uppercase())?;
        }

        section(f, "FINAL CHECKLIST")?;
        writeln!(
            f,
            "- Main affirmation \"{}\" is dominant and correctly spelled",
            spec.main_affirmation
        )?;
        writeln!(
            f,
            "- All {} supporting phrases are included",
            spec.supporting_phrases.len()
        )?;
        writeln!(
            f,
            "- Layout follows {} structure precisely",
            spec.layout_archetype
        )?;
        writeln!(f, "- Only palette colors {} are used", palette.hex.join(", "))?;
        writeln!(
            f,
            "- {} aspect ratio is exact, print-ready at {} DPI",
            spec.constraints.ratio, spec.constraints.dpi
        )?;
        write!(
            f,
            "Deliver a single, complete, professional-quality poster image."
        )
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{RULE}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{RULE}")
}

fn write_color_guidance(f: &mut fmt::Formatter<'_>, palette: &PaletteToken) -> fmt::Result {
    writeln!(f, "PALETTE: \"{}\" - {}", palette.name, palette.description)?;
    let listed: Vec<String> = palette
        .hex
        .iter()
        .enumerate()
        .map(|(i, h)| format!("Color {}: {h}", i + 1))
        .collect();
    writeln!(f, "AVAILABLE COLORS: {}", listed.join(" | "))?;

    if let Some(ratio) = text_background_contrast(&palette.hex) {
        writeln!(f, "Text/background contrast ratio: {ratio:.2}:1")?;
    }

    writeln!(f)?;
    writeln!(f, "COLOR USAGE INSTRUCTIONS:")?;
    match palette.hex.as_slice() {
        [primary, secondary, tertiary, ..] => {
            writeln!(f, "- PRIMARY ({primary}): Use for main affirmation text OR dominant background")?;
            writeln!(f, "- SECONDARY ({secondary}): Use for supporting text OR accent backgrounds")?;
            writeln!(f, "- TERTIARY ({tertiary}): Use for decorative accents OR subtle elements")?;
        }
        [primary, secondary] => {
            writeln!(f, "- PRIMARY ({primary}): Use for main affirmation and key elements")?;
            writeln!(f, "- SECONDARY ({secondary}): Use for supporting text and accents")?;
        }
        _ => {}
    }

    writeln!(f)?;
    writeln!(f, "CONTRAST STRATEGY ({} contrast):", palette.contrast)?;
    let rules: &[&str] = match palette.contrast {
        Contrast::High => &[
            "Ensure stark contrast between text and background",
            "Dark text on light background OR light text on dark background",
            "Avoid mid-tone combinations",
        ],
        Contrast::Medium => &[
            "Balance readability with aesthetic softness",
            "Ensure text is clearly legible but not harsh",
            "May use subtle tonal variations",
        ],
        Contrast::Low => &[
            "Soft, subtle contrasts within the same tonal family",
            "Ensure text is still readable through size and weight",
            "Compensate low contrast with larger text sizes",
        ],
    };
    for rule in rules {
        writeln!(f, "- {rule}")?;
    }
    Ok(())
}

/// WCAG contrast ratio between the darkest and lightest colour, when the
/// palette has a clear text colour (luminance < 0.3) and background (> 0.7).
fn text_background_contrast(hex: &[String]) -> Option<f64> {
    let lums: Vec<f64> = hex.iter().filter_map(|h| relative_luminance(h)).collect();
    let darkest = lums.iter().copied().reduce(f64::min)?;
    let lightest = lums.iter().copied().reduce(f64::max)?;
    (darkest < 0.3 && lightest > 0.7).then(|| (lightest + 0.05) / (darkest + 0.05))
}

/// WCAG relative luminance of a `#RRGGBB` colour.
fn relative_luminance(hex: &str) -> Option<f64> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: core::ops::Range<usize>| -> Option<f64> {
        let v = u8::from_str_radix(digits.get(range)?, 16).ok()?;
        let c = f64::from(v) / 255.0;
        Some(if c <= 0.039_28 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        })
    };
    Some(0.0722f64.mul_add(
        channel(4..6)?,
        0.2126f64.mul_add(channel(0..2)?, 0.7152 * channel(2..4)?),
    ))
}

const fn accent_description(accent: AccentType) -> &'static str {
    match accent {
        AccentType::Minimal => {
            "subtle single-line decorative elements, small geometric markers (dots, dashes)"
        }
        AccentType::Organic => "natural flowing shapes, soft curves, gentle wave patterns",
        AccentType::Botanical => {
            "MUST include leaves, branches, flowers, or plant-inspired decorative elements"
        }
        AccentType::Textured => {
            "visible paper texture, subtle grain, layered transparency effects"
        }
        AccentType::GradientHeavy => {
            "bold color gradients, smooth color transitions between palette colors"
        }
        AccentType::Playful => {
            "irregular dots, hand-drawn quality marks, asymmetric decorative touches"
        }
    }
}

const fn headline_style(style: TypographyStyle) -> &'static str {
    match style {
        TypographyStyle::Display => {
            "Large, bold display font with strong presence. Think editorial magazine headlines. High impact."
        }
        TypographyStyle::Serif => {
            "Classic serif typeface with timeless elegance. Traditional book-like quality. Sophisticated."
        }
        TypographyStyle::Sans => {
            "Clean sans-serif with modern clarity. Contemporary and straightforward. Professional."
        }
        TypographyStyle::Script => {
            "Flowing handwritten or calligraphic style. Personal and intimate. Elegant curves."
        }
    }
}

const fn support_style(style: TypographyStyle) -> &'static str {
    match style {
        TypographyStyle::Sans => {
            "Clean, highly legible sans-serif. Easy to read at smaller sizes. Modern and clear."
        }
        TypographyStyle::Serif => {
            "Traditional serif for refined readability. Classic book-text quality. Timeless."
        }
        TypographyStyle::Script => {
            "Handwritten style for personal touch. Intimate and warm. Flowing letters."
        }
        TypographyStyle::Display => "Clear, readable typeface",
    }
}

const fn energy_guidance(energy: EnergyLevel) -> &'static str {
    match energy {
        EnergyLevel::Direct => {
            "ENERGY: DIRECT & POWERFUL\n- Uppercase main affirmation for maximum impact\n- Wide letter spacing (0.05-0.1em) for presence\n- Bold, confident weights"
        }
        EnergyLevel::Soft => {
            "ENERGY: GENTLE & FLOWING\n- Mixed case for approachable warmth\n- Normal letter spacing for natural flow\n- Medium weights for softness"
        }
        EnergyLevel::Supportive | EnergyLevel::Intense => {
            "ENERGY: BALANCED & HARMONIOUS\n- Title case or selective uppercase\n- Slightly loose letter spacing (0.02-0.05em)\n- Medium to semi-bold weights"
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::design::{BuildSpecOptions, MoodSlug, ThemeSlug, build_design_spec};

    fn spec(theme: ThemeSlug, mood: MoodSlug) -> DesignSpec {
        build_design_spec(&BuildSpecOptions::new(theme, mood))
    }

    #[test]
    fn test_prompt_carries_spec_values() {
        let spec = spec(ThemeSlug::Confidence, MoodSlug::Minimalist);
        let prompt = render_prompt(&spec);

        assert!(prompt.contains("#111111 | #F6F2EC"));
        assert!(prompt.contains("LAYOUT SYSTEM: clean-serif"));
        assert!(prompt.contains(spec.layout_archetype.description()));
        assert!(prompt.contains(&format!("\"{}\"", spec.main_affirmation)));
        assert!(prompt.contains("Uppercase and powerful"));
        assert!(prompt.contains("Aspect ratio: 4:5"));
        assert!(prompt.contains("300 DPI"));
        assert!(prompt.contains("x LOW LEGIBILITY"));
        assert!(prompt.contains("x OVERCROWDED LAYOUT"));
        for (i, phrase) in spec.supporting_phrases.iter().enumerate() {
            assert!(prompt.contains(&format!("{}. \"{phrase}\"", i + 1)));
        }
    }

    #[test]
    fn test_soft_energy_is_not_uppercase() {
        let prompt = render_prompt(&spec(ThemeSlug::Peace, MoodSlug::Coastal));
        assert!(prompt.contains("Balanced and flowing"));
        assert!(prompt.contains("ENERGY: GENTLE & FLOWING"));
    }

    #[test]
    fn test_contrast_ratio_for_ink_on_cream() {
        let ratio = text_background_contrast(&["#111111".into(), "#F6F2EC".into()]).unwrap();
        assert!(ratio > 15.0 && ratio < 19.0, "{ratio}");
        assert!(text_background_contrast(&["#F7E2DA".into(), "#E6DDF7".into()]).is_none());
    }

    #[test]
    fn test_luminance_bounds() {
        assert!((relative_luminance("#000000").unwrap()).abs() < f64::EPSILON);
        assert!((relative_luminance("#FFFFFF").unwrap() - 1.0).abs() < 1e-9);
        assert!(relative_luminance("#FFF").is_none());
        assert!(relative_luminance("#\u{e9}\u{e9}\u{e9}").is_none());
    }

    #[test]
    fn test_free_form_custom_palette_renders() {
        let mut options = BuildSpecOptions::new(ThemeSlug::Joy, MoodSlug::Vibrant);
        options.custom_palette_hex = Some(vec!["#fff".into(), "rebeccapurple".into()]);
        let prompt = render_prompt(&build_design_spec(&options));
        assert!(prompt.contains("Color 1: #fff | Color 2: rebeccapurple"));
        assert!(!prompt.contains("contrast ratio"));

        options.custom_palette_hex = Some(vec![]);
        let prompt = render_prompt(&build_design_spec(&options));
        assert!(prompt.contains("PALETTE: \"custom_palette\""));
    }
}
