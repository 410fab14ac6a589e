//! Static interpretation tables.
//!
//! Each palace has a base reading and a coarse fortune category. A second
//! table comments on the final palace paired with each of the six palaces,
//! itself included.

use serde::{Deserialize, Serialize};

use crate::palace::{PALACE_COUNT, Palace};

/// Coarse fortune category of a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FortuneCategory {
    /// Clearly favourable.
    MajorAuspicious,
    /// Favourable with reservations.
    MinorAuspicious,
    /// Unfavourable.
    Inauspicious,
}

impl std::fmt::Display for FortuneCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MajorAuspicious => write!(f, "major-auspicious"),
            Self::MinorAuspicious => write!(f, "minor-auspicious"),
            Self::Inauspicious => write!(f, "inauspicious"),
        }
    }
}

/// Commentary on the final palace paired with another palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationText {
    /// The paired palace.
    pub other: Palace,
    /// The commentary.
    pub text: String,
}

/// Full reading for a final palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// The palace being read.
    pub palace: Palace,
    /// One-line verdict.
    pub verdict: String,
    /// The base reading.
    pub base_text: String,
    /// Fortune category.
    pub category: FortuneCategory,
    /// Commentary for each pairing, in ring order.
    pub combinations: Vec<CombinationText>,
}

struct Reading {
    verdict: &'static str,
    text: &'static str,
    category: FortuneCategory,
}

const READINGS: [Reading; PALACE_COUNT] = [
    Reading {
        verdict: "Stillness brings safety",
        text: "Things are settled and secure. Plans proceed steadily if you stay where \
               you are; travellers are safe, the sick recover, lost things are found \
               nearby. Favour patience over haste.",
        category: FortuneCategory::MajorAuspicious,
    },
    Reading {
        verdict: "Matters drag on",
        text: "Progress stalls and news is slow to come. Negotiations stretch out, \
               people you wait for are delayed, and documents go astray. Do not push; \
               revisit the question once the obstruction has passed.",
        category: FortuneCategory::Inauspicious,
    },
    Reading {
        verdict: "Good news arrives quickly",
        text: "Joyful tidings come soon, often from the south. Act now: seekers find, \
               travellers return, and requests meet a warm reply. Delay wastes the \
               moment.",
        category: FortuneCategory::MajorAuspicious,
    },
    Reading {
        verdict: "Beware quarrels and harsh words",
        text: "Disputes, gossip, and legal trouble are likely. Guard your speech, \
               avoid confrontations, and watch for injury or illness. Postpone \
               contracts and important conversations.",
        category: FortuneCategory::Inauspicious,
    },
    Reading {
        verdict: "Modest fortune and helpful people",
        text: "Small gains and friendly help. Matters work out in the end, though \
               not spectacularly; partnerships and exchanges go smoothly. Keep \
               expectations measured.",
        category: FortuneCategory::MinorAuspicious,
    },
    Reading {
        verdict: "Empty hands, nothing comes of it",
        text: "Efforts come to nothing and promises are hollow. Lost things stay lost, \
               people you seek are absent, and plans lack substance. Wait for a better \
               time and keep your resources.",
        category: FortuneCategory::Inauspicious,
    },
];

/// `COMBINATIONS[final][other]` commentary.
const COMBINATIONS: [[&str; PALACE_COUNT]; PALACE_COUNT] = [
    // Great Peace with ...
    [
        "Doubled calm: very stable, but little will change on its own.",
        "Security slowed by delay; the outcome is good but late.",
        "A safe footing with quick good news; an excellent pairing.",
        "Peace disturbed by words; stay calm and the quarrel passes.",
        "Steady with small gains; reliable help is at hand.",
        "Safe but fruitless; hold what you have rather than reach.",
    ],
    // Lingering with ...
    [
        "Delay eased by stability; patience is rewarded in time.",
        "Doubled delay: the matter stalls completely for now.",
        "A slow start breaks into sudden good news.",
        "Drawn-out disputes; settle quickly or lose more.",
        "Slow but eventually favourable; ask for help.",
        "Lingering into emptiness; let this one go.",
    ],
    // Swift Joy with ...
    [
        "Joy that lasts; good news settles into security.",
        "Good news delayed; it arrives, but later than hoped.",
        "Doubled joy: celebrations and swift success.",
        "Happiness shadowed by gossip; keep the news close.",
        "Quick success with small gains; friends share the joy.",
        "Joy that fades fast; enjoy it without counting on it.",
    ],
    // Red Mouth with ...
    [
        "Harsh words cooled by calm; a quarrel can be avoided.",
        "Disputes drag on; do not feed them.",
        "Conflict resolved by good news; a turn for the better.",
        "Doubled strife: serious quarrels or legal trouble.",
        "Trouble softened by helpful people; seek mediation.",
        "Empty accusations; the threat has no substance.",
    ],
    // Minor Luck with ...
    [
        "Small luck made secure; gains can be kept.",
        "Modest fortune, slowly realised.",
        "Small luck grows quickly into real gain.",
        "Gains bring envy; guard against gossip.",
        "Doubled luck: steady help from many sides.",
        "Luck that slips away; act before it empties.",
    ],
    // Void with ...
    [
        "Emptiness steadied; nothing lost, nothing gained.",
        "Empty waiting; the matter fades out.",
        "A brief spark in emptiness; take it if it comes.",
        "Hollow quarrels; ignore the noise.",
        "A little help keeps the loss small.",
        "Doubled void: abandon the question for now.",
    ],
];

/// Pairing commentary for a final palace with another palace.
pub fn combination_text(final_palace: Palace, other: Palace) -> &'static str {
    COMBINATIONS[final_palace.index()][other.index()]
}

/// The fortune category of a palace.
pub fn category(palace: Palace) -> FortuneCategory {
    READINGS[palace.index()].category
}

/// Look up the full reading for a final palace.
pub fn lookup_interpretation(palace: Palace) -> Interpretation {
    let reading = &READINGS[palace.index()];
    Interpretation {
        palace,
        verdict: reading.verdict.to_string(),
        base_text: reading.text.to_string(),
        category: reading.category,
        combinations: Palace::all()
            .iter()
            .map(|other| CombinationText {
                other: *other,
                text: combination_text(palace, *other).to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(category(Palace::GreatPeace), FortuneCategory::MajorAuspicious);
        assert_eq!(category(Palace::SwiftJoy), FortuneCategory::MajorAuspicious);
        assert_eq!(category(Palace::MinorLuck), FortuneCategory::MinorAuspicious);
        assert_eq!(category(Palace::Lingering), FortuneCategory::Inauspicious);
        assert_eq!(category(Palace::RedMouth), FortuneCategory::Inauspicious);
        assert_eq!(category(Palace::Void), FortuneCategory::Inauspicious);
    }

    #[test]
    fn every_palace_has_six_combinations() {
        for p in Palace::all() {
            let i = lookup_interpretation(*p);
            assert_eq!(i.palace, *p);
            assert!(!i.base_text.is_empty());
            assert!(!i.verdict.is_empty());
            assert_eq!(i.combinations.len(), PALACE_COUNT);
            for (c, other) in i.combinations.iter().zip(Palace::all()) {
                assert_eq!(c.other, *other);
                assert!(!c.text.is_empty());
            }
        }
    }

    #[test]
    fn self_pairing_is_doubled() {
        for p in Palace::all() {
            assert!(combination_text(*p, *p).starts_with("Doubled"), "{p}");
        }
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&FortuneCategory::MinorAuspicious).unwrap();
        assert_eq!(json, "\"minor-auspicious\"");
        assert_eq!(FortuneCategory::Inauspicious.to_string(), "inauspicious");
    }
}
