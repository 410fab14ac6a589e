//! Small Six Ren (小六壬) divination engine.
//!
//! Three small integers (lunar month, lunar day, two-hour period) are counted
//! around a ring of six palaces. The palace reached by the hour is the
//! answer; every palace is annotated with a stem and branch, the element of
//! its branch, a kinship role relative to the querent, a spirit beast, and a
//! star. Everything here is pure and deterministic.
//!
//! ```
//! let result = xl_core::compute_grid(3, 5, 7).unwrap();
//! assert_eq!(result.final_palace().palace, xl_core::Palace::GreatPeace);
//! ```

pub mod assign;
pub mod calendar;
pub mod config;
pub mod cycle;
pub mod diviner;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod grid;
pub mod interpret;
pub mod kinship;
pub mod palace;
pub mod position;
pub mod render;

pub use config::DivinerConfig;
pub use diviner::Diviner;
pub use element::Element;
pub use error::{XlError, XlResult};
pub use grid::{AnnotatedPalace, DivinationRequest, DivinationResult, compute_grid};
pub use interpret::{FortuneCategory, Interpretation, lookup_interpretation};
pub use kinship::Kinship;
pub use palace::Palace;
pub use position::{Positions, resolve_positions};
