//! Theme, mood and layout registries.
//!
//! A theme sets the emotional tone (copy, typography, energy); a mood sets
//! the visual treatment (palette, accents, which layouts fit). Both are keyed
//! by closed slug enums so an unknown slug fails at parse time.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a slug does not name a registry entry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownSlug {
    pub kind: &'static str,
    pub value: String,
}

/// Define a closed enum of slugs with `ALL`, `as_str`, `Display`, `FromStr`
/// and serde support.
macro_rules! slug_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $slug:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $slug)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownSlug;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownSlug {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

slug_enum!(
    /// Emotional theme of a design.
    ThemeSlug, "theme" {
        Confidence => "confidence",
        Peace => "peace",
        Focus => "focus",
        Gratitude => "gratitude",
        Abundance => "abundance",
        Healing => "healing",
        Strength => "strength",
        Joy => "joy",
        Balance => "balance",
        Courage => "courage",
        Clarity => "clarity",
        Renewal => "renewal",
        Freedom => "freedom",
        Passion => "passion",
        Wisdom => "wisdom",
    }
);

slug_enum!(
    /// Visual mood of a design.
    MoodSlug, "mood" {
        Minimalist => "minimalist",
        ModernSerif => "modern-serif",
        Bohemian => "bohemian",
        Coastal => "coastal",
        Earthy => "earthy",
        Vibrant => "vibrant",
        Pastel => "pastel",
        Monochrome => "monochrome",
        Sunset => "sunset",
        Forest => "forest",
    }
);

slug_enum!(
    /// Composition archetype.
    LayoutArchetype, "layout" {
        CleanSerif => "clean-serif",
        Botanical => "botanical",
        GritDirectional => "grit-directional",
        HaloOrbital => "halo-orbital",
    }
);

slug_enum!(
    /// How forcefully the copy speaks.
    EnergyLevel, "energy level" {
        Soft => "soft",
        Supportive => "supportive",
        Direct => "direct",
        Intense => "intense",
    }
);

slug_enum!(
    /// Decorative accent family.
    AccentType, "accent" {
        Minimal => "minimal",
        Organic => "organic",
        Botanical => "botanical",
        Textured => "textured",
        GradientHeavy => "gradient-heavy",
        Playful => "playful",
    }
);

slug_enum!(
    TypographyStyle, "typography style" {
        Serif => "serif",
        Sans => "sans",
        Display => "display",
        Script => "script",
    }
);

slug_enum!(
    Contrast, "contrast" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

/// Headline and supporting typefaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoSet {
    pub headline: TypographyStyle,
    pub support: TypographyStyle,
}

/// A named colour palette as carried in a design spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteToken {
    pub name: String,
    pub description: String,
    pub hex: Vec<String>,
    pub contrast: Contrast,
}

/// Registry form of [`PaletteToken`].
#[derive(Debug, Clone, Copy)]
pub struct PaletteDef {
    pub name: &'static str,
    pub description: &'static str,
    pub hex: &'static [&'static str],
    pub contrast: Contrast,
}

impl PaletteDef {
    #[must_use]
    pub fn to_token(&self) -> PaletteToken {
        PaletteToken {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            hex: self.hex.iter().map(|h| (*h).to_owned()).collect(),
            contrast: self.contrast,
        }
    }
}

#[derive(Debug)]
pub struct ThemeDefinition {
    pub emotion: &'static str,
    pub headline_lexicon: &'static [&'static str],
    pub default_layouts: &'static [LayoutArchetype],
    pub typography: TypoSet,
    pub energy_level: EnergyLevel,
    pub phrase_templates: &'static [[&'static str; 6]],
}

#[derive(Debug)]
pub struct MoodDefinition {
    pub palette: PaletteDef,
    pub accents: &'static [AccentType],
    pub allowed_layouts: &'static [LayoutArchetype],
    /// Sampling weight in `0..=1`.
    pub weight: f32,
}

impl ThemeSlug {
    #[must_use]
    pub fn definition(self) -> &'static ThemeDefinition {
        match self {
            Self::Confidence => &CONFIDENCE,
            Self::Peace => &PEACE,
            Self::Focus => &FOCUS,
            Self::Gratitude => &GRATITUDE,
            Self::Abundance => &ABUNDANCE,
            Self::Healing => &HEALING,
            Self::Strength => &STRENGTH,
            Self::Joy => &JOY,
            Self::Balance => &BALANCE,
            Self::Courage => &COURAGE,
            Self::Clarity => &CLARITY,
            Self::Renewal => &RENEWAL,
            Self::Freedom => &FREEDOM,
            Self::Passion => &PASSION,
            Self::Wisdom => &WISDOM,
        }
    }
}

impl MoodSlug {
    #[must_use]
    pub fn definition(self) -> &'static MoodDefinition {
        match self {
            Self::Minimalist => &MOOD_MINIMALIST,
            Self::ModernSerif => &MOOD_MODERN_SERIF,
            Self::Bohemian => &MOOD_BOHEMIAN,
            Self::Coastal => &MOOD_COASTAL,
            Self::Earthy => &MOOD_EARTHY,
            Self::Vibrant => &MOOD_VIBRANT,
            Self::Pastel => &MOOD_PASTEL,
            Self::Monochrome => &MOOD_MONOCHROME,
            Self::Sunset => &MOOD_SUNSET,
            Self::Forest => &MOOD_FOREST,
        }
    }
}

impl LayoutArchetype {
    /// Composition brief used in generation prompts.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CleanSerif => "Centered headline with horizontal rules or underlines, clear grid rhythm, generous margins. Typography-forward with minimal decoration. Strong vertical alignment.",
            Self::Botanical => "Curved, organic text flow with leaf and floral accents. Soft edges, nature-inspired ornaments. Text may wrap gently or follow natural curves.",
            Self::GritDirectional => "Dynamic composition with angled text fragments, arrows, or compass motifs. Directional energy, bold hierarchy, assertive placement.",
            Self::HaloOrbital => "Circular or radial text arrangement with dot clusters or radiating lines. Central focal point with orbital supporting elements.",
        }
    }
}

// =============================================================================
// Themes
// =============================================================================

static CONFIDENCE: ThemeDefinition = ThemeDefinition {
    emotion: "assertive",
    headline_lexicon: &[
        "I AM CAPABLE",
        "I AM UNSTOPPABLE",
        "IN MY POWER",
        "I TRUST MYSELF",
        "MY VOICE MATTERS",
    ],
    default_layouts: &[LayoutArchetype::CleanSerif, LayoutArchetype::GritDirectional],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Sans,
    },
    energy_level: EnergyLevel::Direct,
    phrase_templates: &[
        [
            "My voice matters",
            "I trust my decisions",
            "Doubt does not define me",
            "Courage lives within",
            "I stand in my power",
            "I am enough, always",
        ],
        [
            "I choose confidence",
            "My strength is real",
            "I believe in me",
            "Fear does not lead",
            "I am worthy",
            "My path is clear",
        ],
        [
            "Bold and grounded",
            "I rise with certainty",
            "Self-doubt fades",
            "I own my story",
            "Confident in becoming",
            "I lead with heart",
        ],
        [
            "Inner strength guides me",
            "I trust my voice",
            "Capable and clear",
            "My power is mine",
            "I am the one",
            "Steady and strong",
        ],
    ],
};

static PEACE: ThemeDefinition = ThemeDefinition {
    emotion: "calm",
    headline_lexicon: &[
        "INNER CALM",
        "SOFT WITHIN",
        "QUIET IS POWER",
        "I AM AT PEACE",
        "STILLNESS FLOWS",
    ],
    default_layouts: &[LayoutArchetype::Botanical],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Script,
    },
    energy_level: EnergyLevel::Soft,
    phrase_templates: &[
        [
            "I breathe in calm",
            "Stillness holds me",
            "Peace is my nature",
            "Gentle and whole",
            "I rest in quiet",
            "Softness is strength",
        ],
        [
            "Calm surrounds me",
            "I release tension",
            "Peace flows through",
            "I am centered",
            "Quiet heals me",
            "I choose stillness",
        ],
        [
            "In this moment, peace",
            "I soften",
            "Ease finds me",
            "I am held",
            "Tranquil and safe",
            "Peace is here",
        ],
        [
            "I rest deeply",
            "Calm is mine",
            "I let go gently",
            "Peace lives within",
            "I am at ease",
            "Stillness guides",
        ],
    ],
};

static FOCUS: ThemeDefinition = ThemeDefinition {
    emotion: "disciplined",
    headline_lexicon: &[
        "CLEAR MIND",
        "LOCKED IN",
        "ONE TASK",
        "I AM FOCUSED",
        "PRESENT NOW",
    ],
    default_layouts: &[LayoutArchetype::CleanSerif],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Sans,
    },
    energy_level: EnergyLevel::Direct,
    phrase_templates: &[
        [
            "One thing at a time",
            "Clarity guides me",
            "I am present",
            "Distractions fade",
            "My mind is sharp",
            "I complete with care",
        ],
        [
            "Focused and clear",
            "I see what matters",
            "Present in this moment",
            "My attention is mine",
            "I choose depth",
            "One step forward",
        ],
        [
            "Clear vision ahead",
            "I work with purpose",
            "My mind is steady",
            "I eliminate noise",
            "Concentration flows",
            "I am here now",
        ],
        [
            "Laser focus on now",
            "I finish what I start",
            "My energy is directed",
            "I prioritize wisely",
            "Deep work mode",
            "Clarity is power",
        ],
    ],
};

static GRATITUDE: ThemeDefinition = ThemeDefinition {
    emotion: "warm",
    headline_lexicon: &[
        "I AM GRATEFUL",
        "JOY IS HERE",
        "BLESSED BY THIS",
        "THANKFUL HEART",
        "ABUNDANCE SURROUNDS",
    ],
    default_layouts: &[LayoutArchetype::HaloOrbital],
    typography: TypoSet {
        headline: TypographyStyle::Display,
        support: TypographyStyle::Serif,
    },
    energy_level: EnergyLevel::Supportive,
    phrase_templates: &[
        [
            "I see the good",
            "Grateful for today",
            "Joy lives here",
            "I appreciate this moment",
            "Thankful for growth",
            "Blessings surround me",
        ],
        [
            "I notice beauty",
            "Gratitude fills me",
            "I am blessed",
            "Joy is abundant",
            "I honor what I have",
            "Grateful heart, full life",
        ],
        [
            "Today I am thankful",
            "Small joys matter",
            "I celebrate this",
            "Gratitude opens doors",
            "I appreciate the journey",
            "Blessed beyond measure",
        ],
        [
            "I give thanks",
            "Joy in simple things",
            "My heart is full",
            "I see abundance",
            "Grateful for me",
            "Life is generous",
        ],
    ],
};

static ABUNDANCE: ThemeDefinition = ThemeDefinition {
    emotion: "rich",
    headline_lexicon: &[
        "OPEN TO MORE",
        "ABUNDANCE FLOWS",
        "I RECEIVE",
        "PROSPERITY IS MINE",
        "LIMITLESS LIFE",
    ],
    default_layouts: &[LayoutArchetype::HaloOrbital],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Script,
    },
    energy_level: EnergyLevel::Supportive,
    phrase_templates: &[
        [
            "I am open to receiving",
            "Abundance is my nature",
            "More flows to me",
            "I welcome prosperity",
            "There is enough",
            "I attract good things",
        ],
        [
            "I receive with ease",
            "Wealth finds me",
            "I am a magnet for abundance",
            "Prosperity surrounds",
            "I deserve plenty",
            "Overflow is natural",
        ],
        [
            "I open to overflow",
            "Riches in all forms",
            "I say yes to more",
            "Abundance is everywhere",
            "I trust the flow",
            "I am worthy of wealth",
        ],
        [
            "Money loves me",
            "I attract opportunities",
            "My cup overflows",
            "I live in plenty",
            "I receive freely",
            "Abundance is infinite",
        ],
    ],
};

static HEALING: ThemeDefinition = ThemeDefinition {
    emotion: "restorative",
    headline_lexicon: &[
        "GENTLE HEALING",
        "I MEND",
        "RESTORATION FLOWS",
        "I AM HEALING",
        "SOFTLY WHOLE",
    ],
    default_layouts: &[LayoutArchetype::Botanical],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Script,
    },
    energy_level: EnergyLevel::Soft,
    phrase_templates: &[
        [
            "I heal gently",
            "Time restores me",
            "I am mending",
            "Softness heals",
            "I allow recovery",
            "Peace aids healing",
        ],
        [
            "I give myself time",
            "Healing is happening",
            "I am becoming whole",
            "Tender with myself",
            "I rest to heal",
            "My body knows healing",
        ],
        [
            "I trust the process",
            "Healing flows through",
            "I am patient",
            "I nurture myself",
            "Recovery is mine",
            "I am gentle with me",
        ],
        [
            "I heal at my pace",
            "Restoration is natural",
            "I honor my healing",
            "I am rebuilding",
            "Softly, I mend",
            "I am healing now",
        ],
    ],
};

static STRENGTH: ThemeDefinition = ThemeDefinition {
    emotion: "solid",
    headline_lexicon: &[
        "UNSHAKEABLE",
        "BUILT STRONG",
        "I AM RESILIENT",
        "SOLID GROUND",
        "INNER FORTRESS",
    ],
    default_layouts: &[LayoutArchetype::GritDirectional],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Sans,
    },
    energy_level: EnergyLevel::Intense,
    phrase_templates: &[
        [
            "I am unbreakable",
            "My foundation is solid",
            "I withstand storms",
            "Strong and steady",
            "I endure",
            "My core is steel",
        ],
        [
            "I rise from challenges",
            "Strength is my nature",
            "I am resilient",
            "I stand firm",
            "I do not crumble",
            "Built to last",
        ],
        [
            "I am fortified",
            "My spirit is strong",
            "I overcome",
            "I am durable",
            "Power within",
            "I hold my ground",
        ],
        [
            "I am my anchor",
            "Strength from within",
            "I persist",
            "Unshaken by trials",
            "I am solid",
            "Resilience is mine",
        ],
    ],
};

static JOY: ThemeDefinition = ThemeDefinition {
    emotion: "bright",
    headline_lexicon: &[
        "JOY RISING",
        "LIGHT WITHIN",
        "I CHOOSE JOY",
        "RADIANT LIFE",
        "HAPPINESS FLOWS",
    ],
    default_layouts: &[LayoutArchetype::HaloOrbital],
    typography: TypoSet {
        headline: TypographyStyle::Display,
        support: TypographyStyle::Sans,
    },
    energy_level: EnergyLevel::Supportive,
    phrase_templates: &[
        [
            "Joy is my choice",
            "I radiate light",
            "Happiness is here",
            "I feel delight",
            "Joy flows freely",
            "I celebrate life",
        ],
        [
            "I find joy daily",
            "Brightness surrounds me",
            "I laugh often",
            "Joy is abundant",
            "I am full of light",
            "Happiness is natural",
        ],
        [
            "I choose to smile",
            "Joy lives in me",
            "I sparkle",
            "Light fills my heart",
            "I am joyful",
            "Radiance is mine",
        ],
        [
            "I embrace joy",
            "Happiness finds me",
            "I shine brightly",
            "Joy is easy",
            "I feel alive",
            "My heart is light",
        ],
    ],
};

static BALANCE: ThemeDefinition = ThemeDefinition {
    emotion: "steady",
    headline_lexicon: &[
        "IN BALANCE",
        "CENTER HELD",
        "I AM ALIGNED",
        "HARMONY WITHIN",
        "STEADY GROUND",
    ],
    default_layouts: &[LayoutArchetype::CleanSerif],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Sans,
    },
    energy_level: EnergyLevel::Supportive,
    phrase_templates: &[
        [
            "I find my center",
            "Balance is natural",
            "I am aligned",
            "Harmony flows",
            "I adjust with ease",
            "Steady and whole",
        ],
        [
            "I hold my balance",
            "Centered in chaos",
            "I am grounded",
            "Equilibrium is mine",
            "I stay steady",
            "Balance guides me",
        ],
        [
            "I live in harmony",
            "My life is balanced",
            "I prioritize well",
            "Centered and calm",
            "I adjust as needed",
            "Balance is strength",
        ],
        [
            "I maintain equilibrium",
            "Harmony within",
            "I am centered",
            "Balance flows through",
            "I stay grounded",
            "My center is strong",
        ],
    ],
};

static COURAGE: ThemeDefinition = ThemeDefinition {
    emotion: "brave",
    headline_lexicon: &[
        "BRAVE HEART",
        "I MOVE ANYWAY",
        "COURAGE LIVES",
        "I FACE FEAR",
        "BOLD STEPS",
    ],
    default_layouts: &[LayoutArchetype::GritDirectional],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Sans,
    },
    energy_level: EnergyLevel::Direct,
    phrase_templates: &[
        [
            "I act despite fear",
            "Courage is my choice",
            "I move forward",
            "Brave and bold",
            "I face what comes",
            "Fear does not stop me",
        ],
        [
            "I am courageous",
            "I take the leap",
            "Bravery lives in me",
            "I do it scared",
            "I choose courage",
            "Bold in action",
        ],
        [
            "I step into fear",
            "Courage guides me",
            "I am brave enough",
            "I face the unknown",
            "Fear makes me stronger",
            "I move with courage",
        ],
        [
            "I am fearless",
            "Bravery flows through",
            "I act boldly",
            "Courage is mine",
            "I rise brave",
            "I do hard things",
        ],
    ],
};

static CLARITY: ThemeDefinition = ThemeDefinition {
    emotion: "clear",
    headline_lexicon: &[
        "CRYSTAL CLEAR",
        "SEE TRUE",
        "I KNOW",
        "VISION IS MINE",
        "CLEAR SIGHT",
    ],
    default_layouts: &[LayoutArchetype::CleanSerif],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Sans,
    },
    energy_level: EnergyLevel::Direct,
    phrase_templates: &[
        [
            "I see clearly",
            "My vision is sharp",
            "Clarity comes easily",
            "I know my path",
            "I trust my sight",
            "Clear and certain",
        ],
        [
            "I understand now",
            "Clarity guides me",
            "I see what matters",
            "My mind is clear",
            "I know the truth",
            "Vision is mine",
        ],
        [
            "I see through fog",
            "Clarity is my gift",
            "I discern well",
            "I trust my knowing",
            "Clear-headed always",
            "I see beyond",
        ],
        [
            "I perceive truth",
            "Clarity flows",
            "I understand deeply",
            "My vision is true",
            "I see the way",
            "Clarity is power",
        ],
    ],
};

static RENEWAL: ThemeDefinition = ThemeDefinition {
    emotion: "fresh",
    headline_lexicon: &[
        "BEGIN AGAIN",
        "NEW LIGHT",
        "I RENEW",
        "FRESH START",
        "REBIRTH NOW",
    ],
    default_layouts: &[LayoutArchetype::Botanical],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Script,
    },
    energy_level: EnergyLevel::Soft,
    phrase_templates: &[
        [
            "I start fresh",
            "New beginnings are mine",
            "I renew myself",
            "Today is new",
            "I release the old",
            "Fresh energy flows",
        ],
        [
            "I begin again",
            "Renewal is natural",
            "I shed what was",
            "New life emerges",
            "I am reborn",
            "Fresh start today",
        ],
        [
            "I embrace new beginnings",
            "Renewal flows through",
            "I start over",
            "I am made new",
            "Fresh perspective",
            "I bloom again",
        ],
        [
            "I let go and renew",
            "New chapter now",
            "I refresh my spirit",
            "Rebirth is mine",
            "I am renewed",
            "Fresh and free",
        ],
    ],
};

static FREEDOM: ThemeDefinition = ThemeDefinition {
    emotion: "open",
    headline_lexicon: &[
        "I AM FREE",
        "WIDE OPEN",
        "UNBOUND LIFE",
        "LIBERATION",
        "FREE TO BE",
    ],
    default_layouts: &[LayoutArchetype::GritDirectional],
    typography: TypoSet {
        headline: TypographyStyle::Display,
        support: TypographyStyle::Sans,
    },
    energy_level: EnergyLevel::Direct,
    phrase_templates: &[
        [
            "I am liberated",
            "Freedom is mine",
            "I break free",
            "Unbound and wild",
            "I choose freedom",
            "I am limitless",
        ],
        [
            "I release constraints",
            "Freedom flows",
            "I am unchained",
            "Open and free",
            "I live freely",
            "Liberation is here",
        ],
        [
            "I am unrestricted",
            "Freedom is my right",
            "I break the chains",
            "I live untethered",
            "Wide open life",
            "I am free now",
        ],
        [
            "I claim my freedom",
            "Unbound spirit",
            "I am sovereign",
            "Freedom guides me",
            "I am liberated",
            "I fly free",
        ],
    ],
};

static PASSION: ThemeDefinition = ThemeDefinition {
    emotion: "fiery",
    headline_lexicon: &[
        "BURN BRIGHT",
        "FULL FLAME",
        "I AM FIRE",
        "PASSION LIVES",
        "IGNITED HEART",
    ],
    default_layouts: &[LayoutArchetype::GritDirectional],
    typography: TypoSet {
        headline: TypographyStyle::Display,
        support: TypographyStyle::Serif,
    },
    energy_level: EnergyLevel::Intense,
    phrase_templates: &[
        [
            "I burn with purpose",
            "Passion fuels me",
            "I am on fire",
            "My heart blazes",
            "I live fully",
            "Flame within",
        ],
        [
            "I ignite my dreams",
            "Passion drives me",
            "I am fully alive",
            "Fire in my soul",
            "I burn brightly",
            "Passion is power",
        ],
        [
            "I live with fire",
            "My passion is fierce",
            "I am ablaze",
            "I burn for this",
            "Ignited and alive",
            "Passion flows",
        ],
        [
            "I am passionate",
            "Fire guides me",
            "I burn with love",
            "My flame is strong",
            "I live intensely",
            "Passion is mine",
        ],
    ],
};

static WISDOM: ThemeDefinition = ThemeDefinition {
    emotion: "knowing",
    headline_lexicon: &[
        "INNER WISDOM",
        "I KNOW",
        "WISE HEART",
        "TRUTH WITHIN",
        "I TRUST MY KNOWING",
    ],
    default_layouts: &[LayoutArchetype::CleanSerif],
    typography: TypoSet {
        headline: TypographyStyle::Serif,
        support: TypographyStyle::Serif,
    },
    energy_level: EnergyLevel::Supportive,
    phrase_templates: &[
        [
            "I trust my wisdom",
            "Inner knowing guides",
            "I am wise",
            "My insight is deep",
            "I listen within",
            "Wisdom is mine",
        ],
        [
            "I know what I need",
            "My wisdom is true",
            "I trust my intuition",
            "Wise and aware",
            "I see clearly",
            "Inner truth guides",
        ],
        [
            "I am discerning",
            "Wisdom flows through",
            "I know deeply",
            "My knowing is strong",
            "I trust myself",
            "Wise in all ways",
        ],
        [
            "I listen to wisdom",
            "My inner voice is clear",
            "I know my truth",
            "Wisdom lives in me",
            "I am guided",
            "I trust my knowing",
        ],
    ],
};

// =============================================================================
// Moods
// =============================================================================

static MOOD_MINIMALIST: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "ink_on_cream_high_contrast",
        description: "black on warm cream",
        hex: &["#111111", "#F6F2EC"],
        contrast: Contrast::High,
    },
    accents: &[AccentType::Minimal, AccentType::Organic],
    allowed_layouts: &[LayoutArchetype::CleanSerif],
    weight: 0.45,
};

static MOOD_MODERN_SERIF: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "charcoal_blush_ivory",
        description: "charcoal, soft blush, ivory",
        hex: &["#2E2E2E", "#EBD6D0", "#FAF8F6"],
        contrast: Contrast::Medium,
    },
    accents: &[AccentType::Minimal, AccentType::Organic, AccentType::Textured],
    allowed_layouts: &[LayoutArchetype::CleanSerif],
    weight: 0.35,
};

static MOOD_BOHEMIAN: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "terracotta_sage_cream",
        description: "terracotta, sage, cream",
        hex: &["#B5654D", "#7B8F6D", "#F3EEE6"],
        contrast: Contrast::Low,
    },
    accents: &[AccentType::Botanical, AccentType::Organic, AccentType::Textured],
    allowed_layouts: &[LayoutArchetype::Botanical, LayoutArchetype::HaloOrbital],
    weight: 0.30,
};

static MOOD_COASTAL: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "seafoam_sand_driftwood",
        description: "seafoam, sand, driftwood",
        hex: &["#BFDAD0", "#E6D8C4", "#9A9A93"],
        contrast: Contrast::Low,
    },
    accents: &[AccentType::Organic, AccentType::Botanical, AccentType::Minimal],
    allowed_layouts: &[LayoutArchetype::CleanSerif, LayoutArchetype::Botanical],
    weight: 0.25,
};

static MOOD_EARTHY: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "forest_clay_cream",
        description: "forest green, clay, cream",
        hex: &["#2D5A4A", "#B6896B", "#F3EEE6"],
        contrast: Contrast::Medium,
    },
    accents: &[AccentType::Organic, AccentType::Botanical, AccentType::Textured],
    allowed_layouts: &[LayoutArchetype::Botanical, LayoutArchetype::HaloOrbital],
    weight: 0.30,
};

static MOOD_VIBRANT: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "ink_plus_accent",
        description: "black with bright accents",
        hex: &["#121212", "#0EA5E9", "#EF4444", "#F59E0B"],
        contrast: Contrast::High,
    },
    accents: &[AccentType::Organic, AccentType::Botanical, AccentType::GradientHeavy],
    allowed_layouts: &[LayoutArchetype::GritDirectional, LayoutArchetype::CleanSerif],
    weight: 0.15,
};

static MOOD_PASTEL: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "soft_peach_lavender_mint",
        description: "soft peach, lavender, mint",
        hex: &["#F7E2DA", "#E6DDF7", "#D7F2EA"],
        contrast: Contrast::Low,
    },
    accents: &[AccentType::Organic, AccentType::Minimal, AccentType::Botanical],
    allowed_layouts: &[LayoutArchetype::HaloOrbital, LayoutArchetype::Botanical],
    weight: 0.25,
};

static MOOD_MONOCHROME: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "ink_on_cream_mono",
        description: "black, cream, gray",
        hex: &["#111111", "#F6F2EC", "#777777"],
        contrast: Contrast::High,
    },
    accents: &[AccentType::Minimal, AccentType::Organic, AccentType::Textured],
    allowed_layouts: &[LayoutArchetype::CleanSerif],
    weight: 0.40,
};

static MOOD_SUNSET: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "coral_amber_blush",
        description: "coral, amber, blush",
        hex: &["#F28C6B", "#FFC36A", "#F6B1B1"],
        contrast: Contrast::Medium,
    },
    accents: &[AccentType::Organic, AccentType::GradientHeavy, AccentType::Botanical],
    allowed_layouts: &[LayoutArchetype::HaloOrbital, LayoutArchetype::Botanical],
    weight: 0.20,
};

static MOOD_FOREST: MoodDefinition = MoodDefinition {
    palette: PaletteDef {
        name: "deep_green_olive_moss",
        description: "deep green, olive, moss, cream",
        hex: &["#1F3D32", "#4B5E3C", "#7C8F5A", "#EDE9DF"],
        contrast: Contrast::Medium,
    },
    accents: &[AccentType::Botanical, AccentType::Organic, AccentType::Textured],
    allowed_layouts: &[LayoutArchetype::Botanical, LayoutArchetype::CleanSerif],
    weight: 0.30,
};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_sizes() {
        assert_eq!(ThemeSlug::ALL.len(), 15);
        assert_eq!(MoodSlug::ALL.len(), 10);
        assert_eq!(LayoutArchetype::ALL.len(), 4);
    }

    #[test]
    fn test_every_theme_is_complete() {
        for theme in ThemeSlug::ALL {
            let def = theme.definition();
            assert_eq!(def.headline_lexicon.len(), 5, "{theme}");
            assert_eq!(def.phrase_templates.len(), 4, "{theme}");
            assert!(!def.default_layouts.is_empty(), "{theme}");
        }
    }

    #[test]
    fn test_palette_hex_codes_are_well_formed() {
        for mood in MoodSlug::ALL {
            for hex in mood.definition().palette.hex {
                assert_eq!(hex.len(), 7, "{mood}: {hex}");
                assert!(hex.starts_with('#'), "{mood}: {hex}");
                assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()), "{mood}: {hex}");
            }
        }
    }

    #[test]
    fn test_slug_round_trip() {
        assert_eq!("modern-serif".parse::<MoodSlug>().unwrap(), MoodSlug::ModernSerif);
        assert_eq!(LayoutArchetype::GritDirectional.as_str(), "grit-directional");
        assert_eq!(
            serde_json::to_string(&AccentType::GradientHeavy).unwrap(),
            "\"gradient-heavy\""
        );
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        let err = "serenity".parse::<ThemeSlug>().unwrap_err();
        assert_eq!(err.kind, "theme");
        assert!(serde_json::from_str::<MoodSlug>("\"neon\"").is_err());
    }
}
