//! Kinship roles (六亲) relative to the querent's own element.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Relation};

/// A palace's kinship role towards the final palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kinship {
    /// The final palace itself (the querent).
    Querent,
    /// Generates the self element (父母).
    Parent,
    /// Generated by the self element (子孙).
    Offspring,
    /// Shares the self element (兄弟).
    Sibling,
    /// Overcome by the self element (妻财).
    Wealth,
    /// Overcomes the self element (官鬼).
    Official,
}

impl Kinship {
    /// All roles, starting with self.
    pub fn all() -> &'static [Self] {
        &[
            Self::Querent,
            Self::Parent,
            Self::Offspring,
            Self::Sibling,
            Self::Wealth,
            Self::Official,
        ]
    }

    /// The Chinese name of this role.
    pub fn hanzi(self) -> &'static str {
        match self {
            Self::Querent => "自身",
            Self::Parent => "父母",
            Self::Offspring => "子孙",
            Self::Sibling => "兄弟",
            Self::Wealth => "妻财",
            Self::Official => "官鬼",
        }
    }
}

impl std::fmt::Display for Kinship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Querent => write!(f, "Self"),
            Self::Parent => write!(f, "Parent"),
            Self::Offspring => write!(f, "Offspring"),
            Self::Sibling => write!(f, "Sibling"),
            Self::Wealth => write!(f, "Spouse/Wealth"),
            Self::Official => write!(f, "Official/Adversity"),
        }
    }
}

/// Classify one palace against the self element.
///
/// The final palace is always `Querent`, whatever its element. Every other
/// palace falls into exactly one of the five element relations.
pub fn classify(is_final: bool, branch_element: Element, self_element: Element) -> Kinship {
    if is_final {
        return Kinship::Querent;
    }
    match branch_element.relation_to(self_element) {
        Relation::Generates => Kinship::Parent,
        Relation::GeneratedBy => Kinship::Offspring,
        Relation::Same => Kinship::Sibling,
        Relation::OvercomeBy => Kinship::Wealth,
        Relation::Overcomes => Kinship::Official,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_palace_is_self() {
        for el in Element::all() {
            assert_eq!(classify(true, *el, Element::Fire), Kinship::Querent);
        }
    }

    #[test]
    fn water_self_roles() {
        let me = Element::Water;
        assert_eq!(classify(false, Element::Metal, me), Kinship::Parent);
        assert_eq!(classify(false, Element::Wood, me), Kinship::Offspring);
        assert_eq!(classify(false, Element::Water, me), Kinship::Sibling);
        assert_eq!(classify(false, Element::Fire, me), Kinship::Wealth);
        assert_eq!(classify(false, Element::Earth, me), Kinship::Official);
    }

    #[test]
    fn five_elements_give_five_roles() {
        for me in Element::all() {
            let mut roles: Vec<Kinship> =
                Element::all().iter().map(|el| classify(false, *el, *me)).collect();
            roles.sort_by_key(|r| r.hanzi());
            roles.dedup();
            assert_eq!(roles.len(), 5, "self element {me}");
            assert!(!roles.contains(&Kinship::Querent));
        }
    }

    #[test]
    fn kinship_display() {
        assert_eq!(Kinship::Querent.to_string(), "Self");
        assert_eq!(Kinship::Wealth.to_string(), "Spouse/Wealth");
        assert_eq!(Kinship::Official.hanzi(), "官鬼");
    }

    #[test]
    fn kinship_serde_roundtrip() {
        let json = serde_json::to_string(&Kinship::Wealth).unwrap();
        let k: Kinship = serde_json::from_str(&json).unwrap();
        assert_eq!(k, Kinship::Wealth);
    }
}
