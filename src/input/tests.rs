//! Unit tests for button debouncing.
//!
//! Time is simulated with plain millisecond counters; nothing here
//! touches hardware.

use super::*;
use crate::config::DEBOUNCE_MS;

const ACTIVE: Level = Level::Active;
const INACTIVE: Level = Level::Inactive;

/// Poll `channel` every `step_ms` from `start_ms` to `end_ms` (inclusive)
/// with a constant level and count the press events.
fn hold(channel: &mut ButtonChannel, level: Level, start_ms: u64, end_ms: u64, step_ms: u64) -> usize {
    let mut presses = 0;
    let mut t = start_ms;
    while t <= end_ms {
        if channel.poll(level, t).is_some() {
            presses += 1;
        }
        t += step_ms;
    }
    presses
}

// ═══════════════════════════════════════════════════════════════════════════
// Level
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn level_from_active_low_pin() {
    assert_eq!(Level::from_active_low(true), Level::Active);
    assert_eq!(Level::from_active_low(false), Level::Inactive);
    assert!(Level::Active.is_active());
    assert!(!Level::Inactive.is_active());
}

// ═══════════════════════════════════════════════════════════════════════════
// ButtonChannel
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn channel_starts_released() {
    let channel = ButtonChannel::new(Button::Guess);
    assert_eq!(channel.button(), Button::Guess);
    assert_eq!(channel.raw(), INACTIVE);
    assert_eq!(channel.stable(), INACTIVE);
}

#[test]
fn edge_sample_never_emits() {
    let mut channel = ButtonChannel::new(Button::Plus);
    // Even far in the future, the first sample of a new level only arms.
    assert_eq!(channel.poll(ACTIVE, 10_000), None);
    assert_eq!(channel.raw(), ACTIVE);
    assert_eq!(channel.stable(), INACTIVE);
}

#[test]
fn press_is_accepted_after_window() {
    let mut channel = ButtonChannel::new(Button::Minus);
    assert_eq!(channel.poll(ACTIVE, 100), None);
    assert_eq!(channel.poll(ACTIVE, 100 + DEBOUNCE_MS), None);
    assert_eq!(
        channel.poll(ACTIVE, 100 + DEBOUNCE_MS + 1),
        Some(PressEvent {
            button: Button::Minus
        })
    );
    assert_eq!(channel.stable(), ACTIVE);
}

#[test]
fn held_press_emits_exactly_once() {
    let mut channel = ButtonChannel::new(Button::Guess);
    let presses = hold(&mut channel, ACTIVE, 0, 2_000, 1);
    assert_eq!(presses, 1);
}

#[test]
fn short_glitch_never_emits() {
    let mut channel = ButtonChannel::new(Button::Guess);
    hold(&mut channel, INACTIVE, 0, 200, 5);

    // Spike shorter than the window, then back to released for good.
    assert_eq!(hold(&mut channel, ACTIVE, 205, 205 + DEBOUNCE_MS - 5, 5), 0);
    assert_eq!(hold(&mut channel, INACTIVE, 205 + DEBOUNCE_MS, 1_000, 5), 0);
    assert_eq!(channel.stable(), INACTIVE);
}

#[test]
fn bouncing_contact_emits_once_when_it_settles() {
    let mut channel = ButtonChannel::new(Button::Plus);
    let mut presses = 0;
    let mut t = 0;
    // Contact chatter: level flips every 3 ms for 60 ms.
    for i in 0..20 {
        let level = if i % 2 == 0 { ACTIVE } else { INACTIVE };
        if channel.poll(level, t).is_some() {
            presses += 1;
        }
        t += 3;
    }
    assert_eq!(presses, 0);

    presses += hold(&mut channel, ACTIVE, t, t + 500, 1);
    assert_eq!(presses, 1);
}

#[test]
fn release_is_tracked_but_not_reported() {
    let mut channel = ButtonChannel::new(Button::Minus);
    assert_eq!(hold(&mut channel, ACTIVE, 0, 200, 1), 1);
    assert_eq!(hold(&mut channel, INACTIVE, 201, 400, 1), 0);
    assert_eq!(channel.stable(), INACTIVE);

    // A second full press is reported again.
    assert_eq!(hold(&mut channel, ACTIVE, 401, 600, 1), 1);
}

#[test]
fn backwards_clock_does_not_fire() {
    let mut channel = ButtonChannel::new(Button::Guess);
    assert_eq!(channel.poll(ACTIVE, 1_000), None);
    assert_eq!(channel.poll(ACTIVE, 10), None);
    assert_eq!(channel.stable(), INACTIVE);
}

// ═══════════════════════════════════════════════════════════════════════════
// ButtonPanel
// ═══════════════════════════════════════════════════════════════════════════

fn all(level: Level) -> Sample {
    Sample {
        minus: level,
        guess: level,
        plus: level,
    }
}

#[test]
fn sample_from_active_low_maps_each_line() {
    let sample = Sample::from_active_low(true, false, true);
    assert_eq!(sample.level(Button::Minus), ACTIVE);
    assert_eq!(sample.level(Button::Guess), INACTIVE);
    assert_eq!(sample.level(Button::Plus), ACTIVE);
}

#[test]
fn simultaneous_presses_come_out_in_priority_order() {
    let mut panel = ButtonPanel::new();
    assert!(panel.poll(all(ACTIVE), 0).is_empty());
    let presses = panel.poll(all(ACTIVE), DEBOUNCE_MS + 1);

    let buttons: heapless::Vec<Button, 3> = presses.iter().map(|p| p.button).collect();
    assert_eq!(buttons.as_slice(), &Button::PRIORITY);
}

#[test]
fn channels_are_independent() {
    let mut panel = ButtonPanel::new();
    let plus_only = Sample {
        plus: ACTIVE,
        ..Sample::default()
    };

    panel.poll(plus_only, 0);
    // Minus starts bouncing while plus is settling.
    panel.poll(
        Sample {
            minus: ACTIVE,
            ..plus_only
        },
        50,
    );
    let presses = panel.poll(plus_only, DEBOUNCE_MS + 1);

    assert_eq!(presses.len(), 1);
    assert_eq!(presses[0].button, Button::Plus);
    assert_eq!(panel.channel(Button::Minus).stable(), INACTIVE);
    assert_eq!(panel.channel(Button::Plus).stable(), ACTIVE);
}

#[test]
fn priority_indices_match_order() {
    for (i, button) in Button::PRIORITY.iter().enumerate() {
        assert_eq!(button.index(), i);
    }
}
