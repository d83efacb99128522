//! Buff classification for the discovery panel
//!
//! Keyword tables are generated at build time from `data/*.txt` and matched
//! by substring against the lowercased buff name. Harmful wins over
//! beneficial ground when a name hits both tables.

use serde::Serialize;
use showbuff_types::{Language, Rgba, Text};

include!(concat!(env!("OUT_DIR"), "/effect_keywords.rs"));

/// Substrings that mark a buff harmful even without a table entry.
/// `ground_`/`_ground` treat every unlisted ground effect as harmful.
const HARMFUL_HINTS: &[&str] = &["curse", "debuff", "afflict", "weaken", "ground_", "_ground"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectClass {
    Neutral,
    Harmful,
    BeneficialGround,
}

impl EffectClass {
    /// Tag shown next to the buff, if any
    pub fn tag(self, language: Language) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Harmful => Some(Text::HarmfulTag.get(language)),
            Self::BeneficialGround => Some(Text::BeneficialTag.get(language)),
        }
    }

    pub fn tag_color(self) -> Option<Rgba> {
        match self {
            Self::Neutral => None,
            Self::Harmful => Some([255, 77, 77, 255]),
            Self::BeneficialGround => Some([77, 255, 77, 255]),
        }
    }
}

pub fn is_harmful(name: &str) -> bool {
    let lower = name.to_lowercase();
    contains_any(&lower, HARMFUL_KEYWORDS.iter().copied())
        || contains_any(&lower, HARMFUL_HINTS.iter().copied())
}

pub fn is_beneficial_ground(name: &str) -> bool {
    let lower = name.to_lowercase();
    contains_any(&lower, BENEFICIAL_GROUND_KEYWORDS.iter().copied())
}

/// Classify a buff by name. Empty names are neutral.
pub fn classify(name: &str) -> EffectClass {
    if name.is_empty() {
        EffectClass::Neutral
    } else if is_harmful(name) {
        EffectClass::Harmful
    } else if is_beneficial_ground(name) {
        EffectClass::BeneficialGround
    } else {
        EffectClass::Neutral
    }
}

fn contains_any<'a>(haystack: &str, mut needles: impl Iterator<Item = &'a str>) -> bool {
    needles.any(|needle| haystack.contains(needle))
}
