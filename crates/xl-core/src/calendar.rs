//! Clock and calendar inputs.
//!
//! Solar-to-lunar conversion is not part of this crate: callers plug in a
//! [`LunarCalendar`]. The two-hour period comes straight from the clock.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{XlError, XlResult};
use crate::grid::DivinationRequest;

/// A lunar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year.
    pub year: i32,
    /// Lunar month (1-12).
    pub month: u32,
    /// Lunar day (1-30).
    pub day: u32,
}

/// Converts a solar (Gregorian) date into a lunar date.
pub trait LunarCalendar {
    /// Convert one date.
    fn solar_to_lunar(&self, date: NaiveDate) -> XlResult<LunarDate>;
}

/// Two-hour period (1 = Rat … 12 = Pig) for a clock time.
///
/// The Rat period spans 23:00-00:59, so 23:xx already counts as period 1.
pub fn two_hour_period(time: NaiveTime) -> u32 {
    (time.hour() + 1) / 2 % 12 + 1
}

/// Parse `HH:MM` (or `H:MM`) into a clock time.
pub fn parse_clock(s: &str) -> XlResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| XlError::InvalidClockTime(s.to_string()))
}

/// Build a request for a wall-clock moment using an external calendar.
pub fn request_for(
    calendar: &impl LunarCalendar,
    at: NaiveDateTime,
) -> XlResult<DivinationRequest> {
    let lunar = calendar.solar_to_lunar(at.date())?;
    DivinationRequest::new(lunar.month, lunar.day, two_hour_period(at.time()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCalendar(LunarDate);

    impl LunarCalendar for FixedCalendar {
        fn solar_to_lunar(&self, _date: NaiveDate) -> XlResult<LunarDate> {
            Ok(self.0)
        }
    }

    struct BrokenCalendar;

    impl LunarCalendar for BrokenCalendar {
        fn solar_to_lunar(&self, date: NaiveDate) -> XlResult<LunarDate> {
            Err(XlError::Calendar(format!("no data for {date}")))
        }
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn rat_period_wraps_midnight() {
        assert_eq!(two_hour_period(at(23, 0)), 1);
        assert_eq!(two_hour_period(at(0, 0)), 1);
        assert_eq!(two_hour_period(at(0, 59)), 1);
    }

    #[test]
    fn period_boundaries() {
        assert_eq!(two_hour_period(at(1, 0)), 2);
        assert_eq!(two_hour_period(at(2, 59)), 2);
        assert_eq!(two_hour_period(at(11, 30)), 7);
        assert_eq!(two_hour_period(at(12, 0)), 7);
        assert_eq!(two_hour_period(at(21, 0)), 12);
        assert_eq!(two_hour_period(at(22, 59)), 12);
    }

    #[test]
    fn every_hour_maps_into_range() {
        for h in 0..24 {
            let p = two_hour_period(at(h, 0));
            assert!((1..=12).contains(&p), "{h}:00 -> {p}");
        }
    }

    #[test]
    fn parse_clock_times() {
        assert_eq!(parse_clock("09:15").unwrap(), at(9, 15));
        assert_eq!(parse_clock(" 23:05 ").unwrap(), at(23, 5));
        assert_eq!(
            parse_clock("noon"),
            Err(XlError::InvalidClockTime("noon".to_string()))
        );
    }

    #[test]
    fn request_from_calendar() {
        let cal = FixedCalendar(LunarDate {
            year: 2026,
            month: 8,
            day: 28,
        });
        let moment = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let req = request_for(&cal, moment).unwrap();
        assert_eq!((req.month(), req.day(), req.hour()), (8, 28, 8));
    }

    #[test]
    fn calendar_errors_propagate() {
        let moment = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(
            request_for(&BrokenCalendar, moment),
            Err(XlError::Calendar(_))
        ));
    }
}
