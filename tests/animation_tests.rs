//! Library-level tests for the typing animation cadence.

use std::time::Duration;

use soonish::animation::{Phase, TypingAnimator};
use soonish::config::AnimationConfig;

fn fast_config(repeat_count: u32) -> AnimationConfig {
    AnimationConfig {
        type_speed_ms: 5,
        erase_speed_ms: 3,
        pause_after_type_ms: 50,
        pause_after_erase_ms: 20,
        repeat_count,
    }
}

#[test]
fn test_two_repeat_tick_schedule() {
    // Two characters, two repeats: the full tick-by-tick delay schedule is
    // deterministic.
    let mut anim = TypingAnimator::new("Go", fast_config(2));

    let mut delays = Vec::new();
    while let Some(delay) = anim.tick() {
        delays.push(delay.as_millis() as u64);
        assert!(delays.len() < 50, "schedule never terminated");
    }

    assert_eq!(
        delays,
        vec![
            5, 5, // type "G", "o"
            50, // pause after first full type
            3, 3, // erase "o", "G"
            20, // pause after erase
            5, 5, // retype "G", "o"
        ]
    );
    assert_eq!(anim.phase(), Phase::Done);
    assert_eq!(anim.loops_completed(), 2);
}

#[test]
fn test_cursor_shown_until_done() {
    let mut anim = TypingAnimator::new("Go\nLive", fast_config(1));

    assert!(anim.shows_cursor());
    while anim.tick().is_some() {
        if !anim.is_done() {
            assert!(anim.shows_cursor());
        }
    }

    assert!(anim.is_done());
    assert!(!anim.shows_cursor());
    assert_eq!(anim.lines(), vec!["Go".to_string(), "Live".to_string()]);
}

#[test]
fn test_unbounded_animation_keeps_a_pending_delay() {
    let mut anim = TypingAnimator::new("Go", fast_config(0));

    for _ in 0..1_000 {
        assert!(anim.tick().is_some(), "unbounded animation must never halt");
    }
}

#[test]
fn test_delays_come_from_the_configured_speeds() {
    let config = fast_config(0);
    let mut anim = TypingAnimator::new("Hi", config);

    assert_eq!(anim.tick(), Some(Duration::from_millis(5)));
    assert_eq!(anim.tick(), Some(Duration::from_millis(5)));
    assert_eq!(anim.tick(), Some(Duration::from_millis(50)));
    assert_eq!(anim.tick(), Some(Duration::from_millis(3)));
}
