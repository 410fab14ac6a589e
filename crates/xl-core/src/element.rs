//! The five elements and their generating/overcoming cycles.
//!
//! Both relations are single directed 5-cycles over the elements:
//!
//! - generates: Wood → Fire → Earth → Metal → Water → Wood
//! - overcomes: Wood → Earth → Water → Fire → Metal → Wood

use serde::{Deserialize, Serialize};

/// One of the five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

/// How one element stands towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Both are the same element.
    Same,
    /// The first element generates the second.
    Generates,
    /// The first element is generated by the second.
    GeneratedBy,
    /// The first element overcomes the second.
    Overcomes,
    /// The first element is overcome by the second.
    OvercomeBy,
}

impl Element {
    /// All elements in generating order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Wood,
            Self::Fire,
            Self::Earth,
            Self::Metal,
            Self::Water,
        ]
    }

    /// The element this one generates.
    pub fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes.
    pub fn overcomes(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// The element that generates this one.
    pub fn generated_by(self) -> Self {
        match self {
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
            Self::Wood => Self::Water,
        }
    }

    /// The element that overcomes this one.
    pub fn overcome_by(self) -> Self {
        match self {
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
            Self::Wood => Self::Metal,
        }
    }

    /// Classify how `self` stands towards `other`.
    ///
    /// Every ordered pair falls into exactly one relation.
    pub fn relation_to(self, other: Self) -> Relation {
        if self == other {
            Relation::Same
        } else if self.generates() == other {
            Relation::Generates
        } else if other.generates() == self {
            Relation::GeneratedBy
        } else if self.overcomes() == other {
            Relation::Overcomes
        } else {
            Relation::OvercomeBy
        }
    }

    /// The Chinese glyph for this element.
    pub fn hanzi(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wood => write!(f, "Wood"),
            Self::Fire => write!(f, "Fire"),
            Self::Earth => write!(f, "Earth"),
            Self::Metal => write!(f, "Metal"),
            Self::Water => write!(f, "Water"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn walk(start: Element, step: fn(Element) -> Element) -> Vec<Element> {
        let mut seen = vec![start];
        let mut cur = step(start);
        while cur != start {
            seen.push(cur);
            cur = step(cur);
        }
        seen
    }

    #[test]
    fn generates_is_single_five_cycle() {
        for el in Element::all() {
            assert_eq!(walk(*el, Element::generates).len(), 5);
        }
    }

    #[test]
    fn overcomes_is_single_five_cycle() {
        for el in Element::all() {
            assert_eq!(walk(*el, Element::overcomes).len(), 5);
        }
    }

    #[test]
    fn inverses_match() {
        for el in Element::all() {
            assert_eq!(el.generates().generated_by(), *el);
            assert_eq!(el.overcomes().overcome_by(), *el);
        }
    }

    #[test]
    fn every_element_has_one_of_each_neighbour() {
        for el in Element::all() {
            let neighbours: HashSet<Element> = [
                *el,
                el.generates(),
                el.generated_by(),
                el.overcomes(),
                el.overcome_by(),
            ]
            .into_iter()
            .collect();
            assert_eq!(neighbours.len(), 5, "{el} has overlapping neighbours");
        }
    }

    #[test]
    fn relation_is_exhaustive_and_exclusive() {
        for a in Element::all() {
            let mut relations = HashSet::new();
            for b in Element::all() {
                relations.insert(a.relation_to(*b));
            }
            assert_eq!(relations.len(), 5);
        }
    }

    #[test]
    fn relation_examples() {
        assert_eq!(Element::Water.relation_to(Element::Wood), Relation::Generates);
        assert_eq!(Element::Water.relation_to(Element::Metal), Relation::GeneratedBy);
        assert_eq!(Element::Water.relation_to(Element::Fire), Relation::Overcomes);
        assert_eq!(Element::Water.relation_to(Element::Earth), Relation::OvercomeBy);
        assert_eq!(Element::Fire.relation_to(Element::Fire), Relation::Same);
    }

    #[test]
    fn element_display() {
        assert_eq!(Element::Metal.to_string(), "Metal");
        assert_eq!(Element::Metal.hanzi(), "金");
    }
}
