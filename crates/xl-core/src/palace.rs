//! The six palaces of the Small Six Ren ring.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{XlError, XlResult};
use crate::ganzhi::Stem;

/// Number of palaces on the ring.
pub const PALACE_COUNT: usize = 6;

/// One of the six palaces, in ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Palace {
    /// 大安
    GreatPeace,
    /// 留连
    Lingering,
    /// 速喜
    SwiftJoy,
    /// 赤口
    RedMouth,
    /// 小吉
    MinorLuck,
    /// 空亡
    Void,
}

const PALACES: [Palace; PALACE_COUNT] = [
    Palace::GreatPeace,
    Palace::Lingering,
    Palace::SwiftJoy,
    Palace::RedMouth,
    Palace::MinorLuck,
    Palace::Void,
];

impl Palace {
    /// All palaces in ring order.
    pub fn all() -> &'static [Self] {
        &PALACES
    }

    /// Palace at a ring position (wraps).
    pub fn from_index(index: usize) -> Self {
        PALACES[index % PALACE_COUNT]
    }

    /// Ring position (0-5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The fixed base element of this palace.
    pub fn base_element(self) -> Element {
        match self {
            Self::GreatPeace | Self::Lingering => Element::Wood,
            Self::SwiftJoy => Element::Fire,
            Self::RedMouth => Element::Metal,
            Self::MinorLuck => Element::Water,
            Self::Void => Element::Earth,
        }
    }

    /// Candidate stems as `(yang, yin)`.
    pub fn stem_pair(self) -> (Stem, Stem) {
        match self {
            Self::GreatPeace | Self::Lingering => (Stem::Jia, Stem::Yi),
            Self::SwiftJoy => (Stem::Bing, Stem::Ding),
            Self::RedMouth => (Stem::Geng, Stem::Xin),
            Self::MinorLuck => (Stem::Ren, Stem::Gui),
            Self::Void => (Stem::Wu, Stem::Ji),
        }
    }

    /// The Chinese name of this palace.
    pub fn hanzi(self) -> &'static str {
        match self {
            Self::GreatPeace => "大安",
            Self::Lingering => "留连",
            Self::SwiftJoy => "速喜",
            Self::RedMouth => "赤口",
            Self::MinorLuck => "小吉",
            Self::Void => "空亡",
        }
    }

    /// Parse a palace from its English name, pinyin, or Chinese name.
    pub fn parse(s: &str) -> XlResult<Self> {
        let trimmed = s.trim();
        let found = match trimmed.to_lowercase().replace(['-', '_'], " ").as_str() {
            "great peace" | "greatpeace" | "da an" | "daan" => Some(Self::GreatPeace),
            "lingering" | "liu lian" | "liulian" => Some(Self::Lingering),
            "swift joy" | "swiftjoy" | "su xi" | "suxi" => Some(Self::SwiftJoy),
            "red mouth" | "redmouth" | "chi kou" | "chikou" => Some(Self::RedMouth),
            "minor luck" | "minorluck" | "xiao ji" | "xiaoji" => Some(Self::MinorLuck),
            "void" | "kong wang" | "kongwang" => Some(Self::Void),
            _ => PALACES.iter().copied().find(|p| p.hanzi() == trimmed),
        };
        found.ok_or_else(|| XlError::UnknownPalace(s.to_string()))
    }
}

impl std::fmt::Display for Palace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GreatPeace => write!(f, "Great Peace"),
            Self::Lingering => write!(f, "Lingering"),
            Self::SwiftJoy => write!(f, "Swift Joy"),
            Self::RedMouth => write!(f, "Red Mouth"),
            Self::MinorLuck => write!(f, "Minor Luck"),
            Self::Void => write!(f, "Void"),
        }
    }
}
