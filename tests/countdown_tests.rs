//! Library-level tests for countdown parsing and decomposition.

use chrono::Duration;

use soonish::countdown::{parse_launch_date, Countdown, CountdownParts};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[test]
fn test_decomposition_reconstruction_sweep() {
    // Walk a spread of distances, including unit boundaries, and check the
    // reconstruction bound everywhere.
    let mut distances: Vec<i64> = (0..10_000).step_by(373).collect();
    for base in [MS_PER_MINUTE, MS_PER_HOUR, MS_PER_DAY, 365 * MS_PER_DAY] {
        distances.extend([base - 1, base, base + 1, 3 * base + 12_345]);
    }

    for distance in distances {
        let parts = CountdownParts::from_millis(distance);
        let rebuilt = parts.days * MS_PER_DAY
            + parts.hours * MS_PER_HOUR
            + parts.minutes * MS_PER_MINUTE
            + parts.seconds * MS_PER_SECOND;

        assert!(parts.days >= 0);
        assert!((0..24).contains(&parts.hours), "distance {distance}");
        assert!((0..60).contains(&parts.minutes), "distance {distance}");
        assert!((0..60).contains(&parts.seconds), "distance {distance}");
        assert!(rebuilt <= distance, "distance {distance}");
        assert!(distance < rebuilt + MS_PER_SECOND, "distance {distance}");
    }
}

#[test]
fn test_parse_and_tick_end_to_end() {
    let target = parse_launch_date("25-11-2025 12:00:00 PM").expect("valid launch date");
    let now = target
        - Duration::days(1)
        - Duration::hours(1)
        - Duration::minutes(1)
        - Duration::seconds(1);

    let mut countdown = Countdown::new(target);
    let parts = countdown.tick(now);

    assert_eq!(parts.view(), "01:01:01:01");
    assert!(!countdown.is_expired());
}

#[test]
fn test_expired_countdown_stays_frozen_across_many_ticks() {
    let target = parse_launch_date("01-01-2020 12:00:00 AM").expect("valid launch date");
    let mut countdown = Countdown::new(target);

    let mut now = target + Duration::seconds(1);
    for _ in 0..10 {
        assert_eq!(countdown.tick(now), CountdownParts::ZERO);
        assert!(countdown.is_expired());
        now = now + Duration::seconds(1);
    }
}

#[test]
fn test_view_grows_beyond_two_digits() {
    let parts = CountdownParts::from_millis(365 * MS_PER_DAY);
    assert_eq!(parts.view(), "365:00:00:00");
}
