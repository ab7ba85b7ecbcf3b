// Puzzle IDs are derived from the calendar, not stored anywhere.
//
// Both handlers compute "today" independently, so the derivation must be a pure
// function of the current instant. The clock itself sits behind a trait so
// tests can pin it to any moment.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;

/// 2024-01-01T00:00:00Z as a Unix timestamp.
const EPOCH_UNIX_SECONDS: i64 = 1_704_067_200;

/// Day index since 2024-01-01T00:00:00Z. Doubles as the document key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PuzzleId(pub i64);

impl PuzzleId {
    /// The first puzzle day.
    pub fn epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(EPOCH_UNIX_SECONDS, 0)
            .single()
            .unwrap_or_default()
    }

    /// Whole UTC days elapsed since the epoch, truncated. Instants before the
    /// epoch map to day 0.
    pub fn from_instant(now: DateTime<Utc>) -> Self {
        let elapsed = (now - Self::epoch()).num_seconds();
        Self(elapsed.max(0).div_euclid(SECONDS_PER_DAY))
    }

    pub fn today(clock: &dyn Clock) -> Self {
        Self::from_instant(clock.now())
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(PuzzleId::from_instant(at(2024, 1, 1, 0, 0, 0)), PuzzleId(0));
        assert_eq!(PuzzleId::from_instant(at(2024, 1, 1, 23, 59, 59)), PuzzleId(0));
        assert_eq!(PuzzleId::from_instant(at(2024, 1, 2, 0, 0, 0)), PuzzleId(1));
    }

    #[test]
    fn test_same_utc_day_same_id() {
        let start = at(2024, 4, 10, 0, 0, 0);
        let expected = PuzzleId::from_instant(start);
        for minutes in (0..24 * 60).step_by(37) {
            let instant = start + Duration::minutes(minutes);
            assert_eq!(PuzzleId::from_instant(instant), expected);
        }
    }

    #[test]
    fn test_advances_by_one_per_day() {
        let mut previous = PuzzleId::from_instant(at(2024, 2, 27, 12, 0, 0));
        for day in 1..=400 {
            let instant = at(2024, 2, 27, 12, 0, 0) + Duration::days(day);
            let current = PuzzleId::from_instant(instant);
            assert_eq!(current.value(), previous.value() + 1);
            previous = current;
        }
    }

    #[test]
    fn test_day_one_hundred() {
        // 2024 is a leap year: Jan (31) + Feb (29) + Mar (31) = 91, so day 100 is April 10th.
        assert_eq!(PuzzleId::from_instant(at(2024, 4, 10, 8, 30, 0)), PuzzleId(100));
    }

    #[test]
    fn test_before_epoch_clamps_to_zero() {
        assert_eq!(PuzzleId::from_instant(at(2023, 12, 31, 12, 0, 0)), PuzzleId(0));
    }

    #[test]
    fn test_epoch_constant_matches_calendar() {
        assert_eq!(PuzzleId::epoch(), at(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_today_uses_clock() {
        let clock = FixedClock(at(2025, 1, 1, 5, 0, 0));
        assert_eq!(PuzzleId::today(&clock), PuzzleId(366));
        assert_eq!(PuzzleId(366).to_string(), "366");
    }
}
