pub mod cast;
pub mod export;
pub mod palace;

use chrono::Local;
use colored::{ColoredString, Colorize};

use xl_core::calendar::{parse_clock, two_hour_period};
use xl_core::{DivinationResult, Diviner, DivinerConfig, FortuneCategory};

/// Pick the two-hour period: explicit hour, then `--at` clock time, then now.
fn resolve_hour(hour: Option<u32>, at: Option<&str>) -> Result<u32, String> {
    if let Some(h) = hour {
        return Ok(h);
    }
    let time = match at {
        Some(s) => parse_clock(s).map_err(|e| e.to_string())?,
        None => Local::now().time(),
    };
    Ok(two_hour_period(time))
}

/// Run one divination through a fresh diviner bounded to `max_day`.
fn divine(month: u32, day: u32, hour: u32, max_day: u32) -> Result<DivinationResult, String> {
    let mut diviner = Diviner::new(DivinerConfig::default().with_max_day(max_day));
    diviner.cast(month, day, hour).map_err(|e| e.to_string())
}

/// Colour a label by fortune category.
fn paint(label: &str, category: FortuneCategory) -> ColoredString {
    match category {
        FortuneCategory::MajorAuspicious => label.green().bold(),
        FortuneCategory::MinorAuspicious => label.cyan(),
        FortuneCategory::Inauspicious => label.red(),
    }
}
