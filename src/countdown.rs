//! Launch-date parsing and countdown arithmetic.
//!
//! The launch instant is parsed once at startup from the configured
//! `DD-MM-YYYY HH:MM:SS AM/PM` string; a malformed string is a startup
//! error, not a silently invalid instant. The countdown itself is a pure
//! state machine: each tick recomputes the remaining time from scratch and
//! becomes terminal once the instant has passed.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, LocalResult, NaiveDate, TimeZone};
use regex::Regex;
use serde::Serialize;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Launch date format: `DD-MM-YYYY HH:MM:SS AM/PM`.
const LAUNCH_DATE_PATTERN: &str = r"^(\d{2})-(\d{2})-(\d{4}) (\d{1,2}):(\d{2}):(\d{2}) ([AaPp][Mm])$";

/// Half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridian {
    /// Midnight to noon
    Am,
    /// Noon to midnight
    Pm,
}

/// Converts a 12-hour clock reading to the 24-hour clock.
///
/// `hour` must already be a valid 12-hour reading (1-12).
#[must_use]
pub const fn to_24_hour(hour: u32, meridian: Meridian) -> u32 {
    match (hour, meridian) {
        (12, Meridian::Am) => 0,
        (12, Meridian::Pm) => 12,
        (h, Meridian::Pm) => h + 12,
        (h, Meridian::Am) => h,
    }
}

/// Parses the configured launch date into an absolute local instant.
///
/// Accepts exactly `DD-MM-YYYY HH:MM:SS AM/PM` (meridian case-insensitive)
/// and rejects out-of-range calendar fields.
pub fn parse_launch_date(input: &str) -> Result<DateTime<Local>> {
    let pattern = Regex::new(LAUNCH_DATE_PATTERN).context("Failed to compile launch date pattern")?;

    let captures = pattern.captures(input.trim()).with_context(|| {
        format!("Launch date {input:?} does not match `DD-MM-YYYY HH:MM:SS AM/PM`")
    })?;

    // The pattern only matches digit groups, so the numeric parses cannot fail.
    let field = |index: usize| -> u32 {
        captures
            .get(index)
            .map(|m| m.as_str().parse().unwrap_or(0))
            .unwrap_or(0)
    };

    let (day, month) = (field(1), field(2));
    let year = i32::try_from(field(3)).unwrap_or(0);
    let (hour, minute, second) = (field(4), field(5), field(6));

    let meridian = match captures.get(7).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(ref s) if s == "AM" => Meridian::Am,
        _ => Meridian::Pm,
    };

    if !(1..=12).contains(&hour) {
        bail!("Launch date hour {hour} is outside the 12-hour clock (1-12)");
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("Launch date {day:02}-{month:02}-{year:04} is not a calendar date"))?;

    let naive = date
        .and_hms_opt(to_24_hour(hour, meridian), minute, second)
        .with_context(|| format!("Launch time {hour:02}:{minute:02}:{second:02} is out of range"))?;

    // DST transitions can make a local wall-clock time ambiguous or missing.
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => Ok(instant),
        LocalResult::None => bail!("Launch date {input:?} does not exist in the local time zone"),
    }
}

/// Remaining time split into display units.
///
/// Recomputed from scratch on every tick; hours, minutes, and seconds stay
/// within their unit, days are unbounded (no year/month decomposition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownParts {
    /// Whole days remaining
    pub days: i64,
    /// Whole hours remaining after the days (0-23)
    pub hours: i64,
    /// Whole minutes remaining after the hours (0-59)
    pub minutes: i64,
    /// Whole seconds remaining after the minutes (0-59)
    pub seconds: i64,
}

impl CountdownParts {
    /// The expired display: all fields zero.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decomposes a millisecond distance into display units.
    ///
    /// Negative distances clamp to zero.
    #[must_use]
    pub const fn from_millis(distance_ms: i64) -> Self {
        let distance = if distance_ms < 0 { 0 } else { distance_ms };

        Self {
            days: distance / MS_PER_DAY,
            hours: distance % MS_PER_DAY / MS_PER_HOUR,
            minutes: distance % MS_PER_HOUR / MS_PER_MINUTE,
            seconds: distance % MS_PER_MINUTE / MS_PER_SECOND,
        }
    }

    /// Formats the parts as a `DD:HH:MM:SS` line, each field zero-padded
    /// to at least two digits.
    #[must_use]
    pub fn view(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown toward the launch instant.
///
/// Terminal once the instant passes: every later tick returns the all-zero
/// parts without recomputing anything.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Local>,
    expired: bool,
}

impl Countdown {
    /// Creates a countdown toward `target`.
    #[must_use]
    pub const fn new(target: DateTime<Local>) -> Self {
        Self {
            target,
            expired: false,
        }
    }

    /// One scheduled tick: recomputes the remaining parts from `now`.
    pub fn tick(&mut self, now: DateTime<Local>) -> CountdownParts {
        if self.expired {
            return CountdownParts::ZERO;
        }

        let distance_ms = self.target.signed_duration_since(now).num_milliseconds();
        if distance_ms < 0 {
            self.expired = true;
            return CountdownParts::ZERO;
        }

        CountdownParts::from_millis(distance_ms)
    }

    /// True once the launch instant has passed.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.expired
    }

    /// The launch instant this countdown targets.
    #[must_use]
    pub const fn target(&self) -> DateTime<Local> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_to_24_hour_conversion_table() {
        assert_eq!(to_24_hour(12, Meridian::Am), 0);
        assert_eq!(to_24_hour(12, Meridian::Pm), 12);
        for h in 1..12 {
            assert_eq!(to_24_hour(h, Meridian::Am), h);
            assert_eq!(to_24_hour(h, Meridian::Pm), h + 12);
        }
    }

    #[test]
    fn test_parse_noon() {
        let instant = parse_launch_date("25-11-2025 12:00:00 PM").unwrap();
        assert_eq!(instant.hour(), 12);
        assert_eq!(instant.minute(), 0);
        assert_eq!(instant.second(), 0);
    }

    #[test]
    fn test_parse_midnight() {
        let instant = parse_launch_date("25-11-2025 12:00:00 AM").unwrap();
        assert_eq!(instant.hour(), 0);
    }

    #[test]
    fn test_parse_afternoon_adds_twelve() {
        let instant = parse_launch_date("01-01-2030 03:15:30 PM").unwrap();
        assert_eq!(instant.hour(), 15);
        assert_eq!(instant.minute(), 15);
        assert_eq!(instant.second(), 30);
    }

    #[test]
    fn test_parse_meridian_case_insensitive() {
        let lower = parse_launch_date("25-11-2025 09:00:00 pm").unwrap();
        let upper = parse_launch_date("25-11-2025 09:00:00 PM").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.hour(), 21);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in [
            "",
            "soon",
            "25-11-2025",
            "25-11-2025 12:00:00",
            "2025-11-25 12:00:00 PM",
            "25-11-2025 13:00:00 PM",
            "25-11-2025 00:00:00 AM",
            "25-13-2025 12:00:00 PM",
            "32-01-2025 12:00:00 PM",
            "25-11-2025 12:60:00 PM",
            "25-11-2025 12:00:61 PM",
        ] {
            assert!(
                parse_launch_date(input).is_err(),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_from_millis_decomposition() {
        let parts = CountdownParts::from_millis(
            3 * MS_PER_DAY + 7 * MS_PER_HOUR + 42 * MS_PER_MINUTE + 5 * MS_PER_SECOND + 999,
        );
        assert_eq!(parts.days, 3);
        assert_eq!(parts.hours, 7);
        assert_eq!(parts.minutes, 42);
        assert_eq!(parts.seconds, 5);
    }

    #[test]
    fn test_from_millis_reconstruction_bound() {
        // days*86400000 + hours*3600000 + minutes*60000 + seconds*1000 is
        // within one second below the original distance.
        for distance in [
            0,
            1,
            999,
            1_000,
            MS_PER_MINUTE - 1,
            MS_PER_HOUR + 1,
            MS_PER_DAY - 1,
            MS_PER_DAY,
            400 * MS_PER_DAY + 5 * MS_PER_HOUR + 59 * MS_PER_MINUTE + 59 * MS_PER_SECOND + 123,
        ] {
            let parts = CountdownParts::from_millis(distance);
            let rebuilt = parts.days * MS_PER_DAY
                + parts.hours * MS_PER_HOUR
                + parts.minutes * MS_PER_MINUTE
                + parts.seconds * MS_PER_SECOND;
            assert!(rebuilt <= distance, "rebuilt {rebuilt} > distance {distance}");
            assert!(
                distance < rebuilt + MS_PER_SECOND,
                "lost more than a second at distance {distance}"
            );
            assert!((0..24).contains(&parts.hours));
            assert!((0..60).contains(&parts.minutes));
            assert!((0..60).contains(&parts.seconds));
        }
    }

    #[test]
    fn test_days_are_unbounded() {
        let parts = CountdownParts::from_millis(10_000 * MS_PER_DAY);
        assert_eq!(parts.days, 10_000);
        assert_eq!(parts.hours, 0);
    }

    #[test]
    fn test_negative_distance_clamps_to_zero() {
        assert_eq!(CountdownParts::from_millis(-1), CountdownParts::ZERO);
        assert_eq!(CountdownParts::from_millis(i64::MIN), CountdownParts::ZERO);
    }

    #[test]
    fn test_view_zero_pads() {
        assert_eq!(CountdownParts::ZERO.view(), "00:00:00:00");
        let parts = CountdownParts::from_millis(MS_PER_DAY + MS_PER_HOUR);
        assert_eq!(parts.view(), "01:01:00:00");
        let wide = CountdownParts::from_millis(123 * MS_PER_DAY);
        assert_eq!(wide.view(), "123:00:00:00");
    }

    #[test]
    fn test_tick_one_day_one_hour_before_launch() {
        let target = parse_launch_date("25-11-2025 12:00:00 PM").unwrap();
        let now = target - chrono::Duration::days(1) - chrono::Duration::hours(1);

        let mut countdown = Countdown::new(target);
        let parts = countdown.tick(now);

        assert_eq!(parts.days, 1);
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 0);
        assert_eq!(parts.seconds, 0);
        assert_eq!(parts.view(), "01:01:00:00");
        assert!(!countdown.is_expired());
    }

    #[test]
    fn test_tick_at_the_instant_is_zero_but_not_expired() {
        let target = parse_launch_date("25-11-2025 12:00:00 PM").unwrap();
        let mut countdown = Countdown::new(target);

        assert_eq!(countdown.tick(target), CountdownParts::ZERO);
        assert!(!countdown.is_expired());
    }

    #[test]
    fn test_expired_is_terminal_and_idempotent() {
        let target = parse_launch_date("25-11-2025 12:00:00 PM").unwrap();
        let mut countdown = Countdown::new(target);

        let after = target + chrono::Duration::milliseconds(1);
        assert_eq!(countdown.tick(after), CountdownParts::ZERO);
        assert!(countdown.is_expired());

        // Terminal even if the clock reads earlier again.
        let before = target - chrono::Duration::hours(2);
        assert_eq!(countdown.tick(before), CountdownParts::ZERO);
        assert!(countdown.is_expired());
    }
}
