//! Position resolution: month, day, and hour onto the six-palace ring.
//!
//! Counting starts at Great Peace for month 1, continues from the month
//! palace for the day, and from the day palace for the two-hour period. The
//! hour palace is the final answer.

use serde::{Deserialize, Serialize};

use crate::palace::{PALACE_COUNT, Palace};

/// The three resolved palace indices (each 0-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Positions {
    /// Palace reached by counting the month.
    pub month: usize,
    /// Palace reached by counting the day from the month palace.
    pub day: usize,
    /// Palace reached by counting the hour from the day palace (final).
    pub hour: usize,
}

impl Positions {
    /// The final palace.
    pub fn final_palace(&self) -> Palace {
        Palace::from_index(self.hour)
    }
}

/// Resolve the month, day, and hour palaces.
///
/// Inputs are 1-based but not range-checked; any `u32` resolves without
/// overflow. A value of 0 counts as one step before 1.
pub fn resolve_positions(month: u32, day: u32, hour: u32) -> Positions {
    let ring = PALACE_COUNT as u64;
    // (x - 1) mod 6 == (x + 5) mod 6, which avoids underflow at 0.
    let month_index = (u64::from(month) + ring - 1) % ring;
    let day_index = (month_index + u64::from(day) + ring - 1) % ring;
    let hour_index = (day_index + u64::from(hour) + ring - 1) % ring;

    Positions {
        month: month_index as usize,
        day: day_index as usize,
        hour: hour_index as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_first_at_rat() {
        let p = resolve_positions(1, 1, 1);
        assert_eq!((p.month, p.day, p.hour), (0, 0, 0));
        assert_eq!(p.final_palace(), Palace::GreatPeace);
    }

    #[test]
    fn third_month_fifth_day_horse_hour() {
        let p = resolve_positions(3, 5, 7);
        assert_eq!((p.month, p.day, p.hour), (2, 0, 0));
        assert_eq!(p.final_palace(), Palace::GreatPeace);
    }

    #[test]
    fn counting_continues_around_the_ring() {
        let p = resolve_positions(7, 1, 1);
        assert_eq!(p.month, 0);
        let p = resolve_positions(12, 30, 12);
        assert_eq!(p.month, 5);
        assert_eq!(p.day, (11 + 29) % 6);
        assert_eq!(p.hour, (p.day + 11) % 6);
    }

    #[test]
    fn out_of_range_values_still_resolve() {
        let p = resolve_positions(0, 0, 0);
        assert_eq!((p.month, p.day, p.hour), (5, 4, 3));
        let p = resolve_positions(u32::MAX, u32::MAX, u32::MAX);
        assert!(p.month < 6 && p.day < 6 && p.hour < 6);
    }
}
