//! The grid builder: one fully annotated ring per divination.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assign::assign_branches;
use crate::cycle::{SpiritBeast, Star, spirit_beasts, stars};
use crate::element::Element;
use crate::error::{XlError, XlResult};
use crate::ganzhi::{Branch, Stem, ganzhi, hour_entry};
use crate::interpret::{Interpretation, lookup_interpretation};
use crate::kinship::{Kinship, classify};
use crate::palace::{PALACE_COUNT, Palace};
use crate::position::{Positions, resolve_positions};

/// Largest lunar day accepted by default.
pub const MAX_DAY: u32 = 31;

/// A validated divination input: lunar month, lunar day, two-hour period.
///
/// Deserialization goes through the same range checks as [`DivinationRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct DivinationRequest {
    month: u32,
    day: u32,
    hour: u32,
}

#[derive(Deserialize)]
struct RawRequest {
    month: u32,
    day: u32,
    hour: u32,
}

impl TryFrom<RawRequest> for DivinationRequest {
    type Error = XlError;

    fn try_from(raw: RawRequest) -> XlResult<Self> {
        Self::new(raw.month, raw.day, raw.hour)
    }
}

impl DivinationRequest {
    /// Validate month 1-12, day 1-31, and hour 1-12.
    pub fn new(month: u32, day: u32, hour: u32) -> XlResult<Self> {
        Self::with_max_day(month, day, hour, MAX_DAY)
    }

    /// Validate with a custom upper bound for the day.
    pub fn with_max_day(month: u32, day: u32, hour: u32, max_day: u32) -> XlResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(XlError::MonthOutOfRange(month));
        }
        if !(1..=max_day).contains(&day) {
            return Err(XlError::DayOutOfRange { day, max: max_day });
        }
        if !(1..=12).contains(&hour) {
            return Err(XlError::HourOutOfRange(hour));
        }
        Ok(Self { month, day, hour })
    }

    /// Lunar month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Lunar day.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Two-hour period (1 = Rat, 12 = Pig).
    pub fn hour(&self) -> u32 {
        self.hour
    }
}

/// One palace of the ring with every derived attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedPalace {
    /// Ring position (0-5).
    pub index: usize,
    /// The palace identity.
    pub palace: Palace,
    /// Assigned earthly branch.
    pub branch: Branch,
    /// Assigned heavenly stem.
    pub stem: Stem,
    /// Stem and branch as a two-glyph name.
    pub ganzhi: String,
    /// Element of the assigned branch.
    pub branch_element: Element,
    /// Kinship role towards the final palace.
    pub kinship: Kinship,
    /// Spirit beast.
    pub spirit_beast: SpiritBeast,
    /// Star.
    pub star: Star,
    /// Reached by counting the month.
    pub is_month: bool,
    /// Reached by counting the day.
    pub is_day: bool,
    /// Reached by counting the hour: the answer.
    pub is_final: bool,
}

impl AnnotatedPalace {
    /// Which counts landed here, in month, day, final order.
    pub fn markers(&self) -> Vec<&'static str> {
        let mut m = Vec::new();
        if self.is_month {
            m.push("month");
        }
        if self.is_day {
            m.push("day");
        }
        if self.is_final {
            m.push("final");
        }
        m
    }
}

/// The outcome of one divination.
///
/// Only produced by the engine; results serialize for export but are never
/// read back, so the grid always holds six palaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivinationResult {
    /// The request that produced this result.
    pub request: DivinationRequest,
    /// Resolved month, day, and hour palace indices.
    pub positions: Positions,
    /// Branch of the querent's two-hour period.
    pub self_branch: Branch,
    /// Element of the querent's two-hour period.
    pub self_element: Element,
    /// All six palaces in ring order.
    pub grid: Vec<AnnotatedPalace>,
    /// Reading of the final palace.
    pub interpretation: Interpretation,
}

impl DivinationResult {
    /// The final palace: the answer.
    pub fn final_palace(&self) -> &AnnotatedPalace {
        &self.grid[self.positions.hour]
    }

    /// The palace reached by the month.
    pub fn month_palace(&self) -> &AnnotatedPalace {
        &self.grid[self.positions.month]
    }

    /// The palace reached by the day.
    pub fn day_palace(&self) -> &AnnotatedPalace {
        &self.grid[self.positions.day]
    }
}

/// Validate the inputs and run a divination.
pub fn compute_grid(month: u32, day: u32, hour: u32) -> XlResult<DivinationResult> {
    let request = DivinationRequest::new(month, day, hour)?;
    compute_request(&request)
}

/// Run a divination for an already validated request.
pub fn compute_request(request: &DivinationRequest) -> XlResult<DivinationResult> {
    let positions = resolve_positions(request.month, request.day, request.hour);
    let anchor = hour_entry(request.hour)?;
    debug!(
        month = request.month,
        day = request.day,
        hour = request.hour,
        month_index = positions.month,
        day_index = positions.day,
        hour_index = positions.hour,
        self_branch = %anchor.branch,
        "resolved positions"
    );

    let grid = build_grid(&positions, anchor.branch, anchor.element);
    let interpretation = lookup_interpretation(positions.final_palace());

    Ok(DivinationResult {
        request: *request,
        positions,
        self_branch: anchor.branch,
        self_element: anchor.element,
        grid,
        interpretation,
    })
}

/// Assemble the six annotated palaces for resolved positions and a self anchor.
pub fn build_grid(
    positions: &Positions,
    self_branch: Branch,
    self_element: Element,
) -> Vec<AnnotatedPalace> {
    let assignments = assign_branches(positions.hour, self_branch);
    let beasts = spirit_beasts(self_branch);
    let star_ring = stars(positions.day);

    let grid: Vec<AnnotatedPalace> = (0..PALACE_COUNT)
        .map(|i| {
            let a = assignments[i];
            let is_final = i == positions.hour;
            let branch_element = a.branch.element();
            AnnotatedPalace {
                index: i,
                palace: Palace::from_index(i),
                branch: a.branch,
                stem: a.stem,
                ganzhi: ganzhi(a.stem, a.branch),
                branch_element,
                kinship: classify(is_final, branch_element, self_element),
                spirit_beast: beasts[i],
                star: star_ring[i],
                is_month: i == positions.month,
                is_day: i == positions.day,
                is_final,
            }
        })
        .collect();

    debug_assert_eq!(grid.iter().filter(|p| p.is_final).count(), 1);
    debug_assert_eq!(
        grid.iter().filter(|p| p.kinship == Kinship::Querent).count(),
        1
    );
    debug_assert!(
        grid.iter()
            .enumerate()
            .all(|(i, p)| grid[i + 1..].iter().all(|q| q.branch != p.branch)),
        "assigned branches must be distinct"
    );

    grid
}
