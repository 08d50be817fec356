//! Time-based debouncing of a single digital line.
//!
//! A channel tracks the last raw level it saw and when that level first
//! appeared. Only after the raw level has held for longer than
//! [`DEBOUNCE_MS`] is it accepted as the stable level. Accepting an
//! inactive→active transition yields a [`PressEvent`]; releases are
//! tracked but not reported.
//!
//! Time is passed in by the caller (milliseconds since boot), so the
//! channel can be driven by `embassy_time::Instant` on target and by a
//! plain counter in tests.

use super::Button;
use crate::config::DEBOUNCE_MS;

/// Logical level of a button line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Released.
    #[default]
    Inactive,
    /// Held down.
    Active,
}

impl Level {
    /// Convert an active-low pin reading (`is_low()`) into a logical level.
    pub const fn from_active_low(is_low: bool) -> Self {
        if is_low {
            Level::Active
        } else {
            Level::Inactive
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Level::Active)
    }
}

/// A debounced inactive→active transition of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    pub button: Button,
}

/// Debounce state of one physical button.
#[derive(Clone, Copy, Debug)]
pub struct ButtonChannel {
    button: Button,
    /// Level seen on the most recent poll.
    raw: Level,
    /// Candidate level, not yet held long enough to be trusted.
    unstable: Level,
    /// Last accepted level.
    stable: Level,
    /// Timestamp (ms) at which `unstable` last changed.
    last_change_ms: u64,
}

impl ButtonChannel {
    /// Create a channel with every level released.
    pub const fn new(button: Button) -> Self {
        Self {
            button,
            raw: Level::Inactive,
            unstable: Level::Inactive,
            stable: Level::Inactive,
            last_change_ms: 0,
        }
    }

    /// Feed one raw sample taken at `now_ms`.
    ///
    /// Returns `Some` exactly once per accepted press. A sample that
    /// differs from the previous one restarts the window and never emits.
    pub fn poll(&mut self, raw: Level, now_ms: u64) -> Option<PressEvent> {
        self.raw = raw;

        if raw != self.unstable {
            self.unstable = raw;
            self.last_change_ms = now_ms;
            return None;
        }

        // Saturating: a clock that steps backwards just delays acceptance.
        let held_ms = now_ms.saturating_sub(self.last_change_ms);
        if held_ms <= DEBOUNCE_MS || raw == self.stable {
            return None;
        }

        self.stable = raw;
        raw.is_active().then_some(PressEvent {
            button: self.button,
        })
    }

    pub fn button(&self) -> Button {
        self.button
    }

    /// Level seen on the most recent poll, before filtering.
    pub fn raw(&self) -> Level {
        self.raw
    }

    /// Last accepted (debounced) level.
    pub fn stable(&self) -> Level {
        self.stable
    }
}
