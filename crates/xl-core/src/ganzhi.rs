//! Heavenly stems, earthly branches, and the two-hour period table.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{XlError, XlResult};

/// Yang or yin polarity of a cyclic symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Even position in its cycle.
    Yang,
    /// Odd position in its cycle.
    Yin,
}

/// One of the ten heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    /// 甲
    Jia,
    /// 乙
    Yi,
    /// 丙
    Bing,
    /// 丁
    Ding,
    /// 戊
    Wu,
    /// 己
    Ji,
    /// 庚
    Geng,
    /// 辛
    Xin,
    /// 壬
    Ren,
    /// 癸
    Gui,
}

const STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Stem at a position in the ten-stem cycle (wraps).
    pub fn from_index(index: usize) -> Self {
        STEMS[index % STEMS.len()]
    }

    /// Position in the ten-stem cycle (0-9).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Yang for even positions, yin for odd.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// The Chinese glyph for this stem.
    pub fn hanzi(self) -> &'static str {
        ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"][self.index()]
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// One of the twelve earthly branches (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// 子
    Rat,
    /// 丑
    Ox,
    /// 寅
    Tiger,
    /// 卯
    Rabbit,
    /// 辰
    Dragon,
    /// 巳
    Snake,
    /// 午
    Horse,
    /// 未
    Goat,
    /// 申
    Monkey,
    /// 酉
    Rooster,
    /// 戌
    Dog,
    /// 亥
    Pig,
}

const BRANCHES: [Branch; 12] = [
    Branch::Rat,
    Branch::Ox,
    Branch::Tiger,
    Branch::Rabbit,
    Branch::Dragon,
    Branch::Snake,
    Branch::Horse,
    Branch::Goat,
    Branch::Monkey,
    Branch::Rooster,
    Branch::Dog,
    Branch::Pig,
];

impl Branch {
    /// All branches in cycle order, starting at Rat.
    pub fn all() -> &'static [Self] {
        &BRANCHES
    }

    /// Branch at a position in the twelve-branch cycle (wraps).
    pub fn from_index(index: usize) -> Self {
        BRANCHES[index % BRANCHES.len()]
    }

    /// Position in the twelve-branch cycle (0-11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Yang for even positions, yin for odd.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// The element of this branch, as listed in the hour table.
    pub fn element(self) -> Element {
        HOUR_TABLE[self.index()].element
    }

    /// The opposing branch, six steps away.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// The Chinese glyph for this branch.
    pub fn hanzi(self) -> &'static str {
        [
            "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
        ][self.index()]
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// One row of the two-hour period table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourEntry {
    /// The branch naming this two-hour period.
    pub branch: Branch,
    /// The element of the branch.
    pub element: Element,
}

/// Two-hour period table: `HOUR_TABLE[hour - 1]` for hour 1 (Rat) to 12 (Pig).
pub const HOUR_TABLE: [HourEntry; 12] = [
    HourEntry { branch: Branch::Rat, element: Element::Water },
    HourEntry { branch: Branch::Ox, element: Element::Earth },
    HourEntry { branch: Branch::Tiger, element: Element::Wood },
    HourEntry { branch: Branch::Rabbit, element: Element::Wood },
    HourEntry { branch: Branch::Dragon, element: Element::Earth },
    HourEntry { branch: Branch::Snake, element: Element::Fire },
    HourEntry { branch: Branch::Horse, element: Element::Fire },
    HourEntry { branch: Branch::Goat, element: Element::Earth },
    HourEntry { branch: Branch::Monkey, element: Element::Metal },
    HourEntry { branch: Branch::Rooster, element: Element::Metal },
    HourEntry { branch: Branch::Dog, element: Element::Earth },
    HourEntry { branch: Branch::Pig, element: Element::Water },
];

/// Look up the table row for a 1-based two-hour period.
pub fn hour_entry(hour: u32) -> XlResult<HourEntry> {
    if !(1..=12).contains(&hour) {
        return Err(XlError::HourOutOfRange(hour));
    }
    Ok(HOUR_TABLE[(hour - 1) as usize])
}

/// Format a stem-branch pair as its two-glyph name, e.g. `甲子`.
pub fn ganzhi(stem: Stem, branch: Branch) -> String {
    format!("{}{}", stem.hanzi(), branch.hanzi())
}
