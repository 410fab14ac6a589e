//! Plain-text rendering of a divination result.
//!
//! The output is stable and self-contained, suitable for handing a result to
//! an external narrator or pasting into notes.

use std::fmt;

use crate::grid::{AnnotatedPalace, DivinationResult};

impl fmt::Display for AnnotatedPalace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) | {} | {} | {}",
            self.palace.hanzi(),
            self.palace,
            self.ganzhi,
            self.branch_element,
            self.kinship,
            self.spirit_beast,
            self.star,
        )?;
        let m = self.markers();
        if !m.is_empty() {
            write!(f, " [{}]", m.join(","))?;
        }
        Ok(())
    }
}

impl fmt::Display for DivinationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fin = self.final_palace();
        writeln!(
            f,
            "Month {}, day {}, hour {} ({} {})",
            self.request.month(),
            self.request.day(),
            self.request.hour(),
            self.self_branch,
            self.self_element,
        )?;
        writeln!(
            f,
            "Final palace: {} {} ({})",
            fin.palace.hanzi(),
            fin.palace,
            self.interpretation.category,
        )?;
        writeln!(f, "{}", self.interpretation.verdict)?;
        writeln!(f)?;
        for p in &self.grid {
            writeln!(f, "  {p}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.interpretation.base_text)?;
        writeln!(f)?;
        for c in &self.interpretation.combinations {
            writeln!(f, "  with {}: {}", c.other, c.text)?;
        }
        Ok(())
    }
}
