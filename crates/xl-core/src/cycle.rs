//! Spirit-beast and star cycles.
//!
//! Both are fixed six-symbol sequences laid around the ring from a rotating
//! start: the spirit beasts from the querent's hour branch, the stars from
//! the day palace.

use serde::{Deserialize, Serialize};

use crate::ganzhi::Branch;
use crate::palace::PALACE_COUNT;

/// One of the six spirit beasts (六神).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpiritBeast {
    /// 青龙
    AzureDragon,
    /// 朱雀
    VermilionBird,
    /// 勾陈
    HookChen,
    /// 白虎
    WhiteTiger,
    /// 玄武
    DarkTortoise,
    /// 螣蛇
    CoiledSerpent,
}

const BEASTS: [SpiritBeast; PALACE_COUNT] = [
    SpiritBeast::AzureDragon,
    SpiritBeast::VermilionBird,
    SpiritBeast::HookChen,
    SpiritBeast::WhiteTiger,
    SpiritBeast::DarkTortoise,
    SpiritBeast::CoiledSerpent,
];

impl SpiritBeast {
    /// All spirit beasts in cycle order.
    pub fn all() -> &'static [Self] {
        &BEASTS
    }

    /// The Chinese name of this spirit beast.
    pub fn hanzi(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龙",
            Self::VermilionBird => "朱雀",
            Self::HookChen => "勾陈",
            Self::WhiteTiger => "白虎",
            Self::DarkTortoise => "玄武",
            Self::CoiledSerpent => "螣蛇",
        }
    }
}

impl std::fmt::Display for SpiritBeast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AzureDragon => write!(f, "Azure Dragon"),
            Self::VermilionBird => write!(f, "Vermilion Bird"),
            Self::HookChen => write!(f, "Hook Chen"),
            Self::WhiteTiger => write!(f, "White Tiger"),
            Self::DarkTortoise => write!(f, "Dark Tortoise"),
            Self::CoiledSerpent => write!(f, "Coiled Serpent"),
        }
    }
}

/// One of the six stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    /// 木星
    WoodStar,
    /// 火星
    FireStar,
    /// 土星
    EarthStar,
    /// 金星
    MetalStar,
    /// 水星
    WaterStar,
    /// 天空
    SkyVoid,
}

const STARS: [Star; PALACE_COUNT] = [
    Star::WoodStar,
    Star::FireStar,
    Star::EarthStar,
    Star::MetalStar,
    Star::WaterStar,
    Star::SkyVoid,
];

impl Star {
    /// All stars in cycle order.
    pub fn all() -> &'static [Self] {
        &STARS
    }

    /// The Chinese name of this star.
    pub fn hanzi(self) -> &'static str {
        match self {
            Self::WoodStar => "木星",
            Self::FireStar => "火星",
            Self::EarthStar => "土星",
            Self::MetalStar => "金星",
            Self::WaterStar => "水星",
            Self::SkyVoid => "天空",
        }
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WoodStar => write!(f, "Wood Star"),
            Self::FireStar => write!(f, "Fire Star"),
            Self::EarthStar => write!(f, "Earth Star"),
            Self::MetalStar => write!(f, "Metal Star"),
            Self::WaterStar => write!(f, "Water Star"),
            Self::SkyVoid => write!(f, "Sky Void"),
        }
    }
}

/// Start of the spirit-beast cycle for a self branch.
///
/// Opposing branches share a start: 子午 → 0, 丑未 → 1, 寅申 → 2, 卯酉 → 3,
/// 辰戌 → 4, 巳亥 → 5.
pub fn spirit_start(self_branch: Branch) -> usize {
    self_branch.index() % PALACE_COUNT
}

fn rotate<T: Copy>(cycle: &[T; PALACE_COUNT], start: usize) -> [T; PALACE_COUNT] {
    let start = start % PALACE_COUNT;
    std::array::from_fn(|i| cycle[(i + PALACE_COUNT - start) % PALACE_COUNT])
}

/// Spirit beast for every palace, started from the self branch.
pub fn spirit_beasts(self_branch: Branch) -> [SpiritBeast; PALACE_COUNT] {
    rotate(&BEASTS, spirit_start(self_branch))
}

/// Star for every palace, with the first star on the day palace.
pub fn stars(day_index: usize) -> [Star; PALACE_COUNT] {
    rotate(&STARS, day_index)
}
