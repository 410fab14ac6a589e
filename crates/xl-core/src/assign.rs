//! Branch and stem assignment around the ring.
//!
//! The six palaces sit every other branch on the twelve-branch cycle,
//! anchored so that the final palace carries the querent's own hour branch.
//! Each palace then takes the yang or yin stem of its candidate pair,
//! following the polarity of the branch it landed on.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Polarity, Stem};
use crate::palace::{PALACE_COUNT, Palace};

/// The branch and stem given to one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// The assigned earthly branch.
    pub branch: Branch,
    /// The assigned heavenly stem.
    pub stem: Stem,
}

/// Distance from the final palace going forward around the ring (0-5).
pub fn offset_from_final(index: usize, final_index: usize) -> usize {
    (index % PALACE_COUNT + PALACE_COUNT - final_index % PALACE_COUNT) % PALACE_COUNT
}

/// Branch landed on by the palace at `index`.
pub fn branch_for(index: usize, final_index: usize, self_branch: Branch) -> Branch {
    let offset = offset_from_final(index, final_index);
    Branch::from_index(self_branch.index() + offset * 2)
}

/// Assign a branch and stem to every palace.
pub fn assign_branches(final_index: usize, self_branch: Branch) -> [Assignment; PALACE_COUNT] {
    std::array::from_fn(|i| {
        let branch = branch_for(i, final_index, self_branch);
        let (yang, yin) = Palace::from_index(i).stem_pair();
        let stem = match branch.polarity() {
            Polarity::Yang => yang,
            Polarity::Yin => yin,
        };
        Assignment { branch, stem }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn offsets_wrap_forward() {
        assert_eq!(offset_from_final(0, 0), 0);
        assert_eq!(offset_from_final(0, 1), 5);
        assert_eq!(offset_from_final(5, 2), 3);
    }

    #[test]
    fn final_palace_keeps_self_branch() {
        for final_index in 0..PALACE_COUNT {
            for b in Branch::all() {
                let a = assign_branches(final_index, *b);
                assert_eq!(a[final_index].branch, *b);
            }
        }
    }

    #[test]
    fn branches_are_distinct() {
        for final_index in 0..PALACE_COUNT {
            for b in Branch::all() {
                let a = assign_branches(final_index, *b);
                let set: HashSet<Branch> = a.iter().map(|x| x.branch).collect();
                assert_eq!(set.len(), PALACE_COUNT);
            }
        }
    }

    #[test]
    fn rat_hour_on_great_peace() {
        let a = assign_branches(0, Branch::Rat);
        let names: Vec<String> = a.iter().map(|x| format!("{}{}", x.stem, x.branch)).collect();
        assert_eq!(names, vec!["甲子", "甲寅", "丙辰", "庚午", "壬申", "戊戌"]);
    }

    #[test]
    fn ox_hour_on_lingering_uses_yin_stems() {
        let a = assign_branches(1, Branch::Ox);
        let names: Vec<String> = a.iter().map(|x| format!("{}{}", x.stem, x.branch)).collect();
        assert_eq!(names, vec!["乙亥", "乙丑", "丁卯", "辛巳", "癸未", "己酉"]);
    }
}
