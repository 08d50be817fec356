//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and game limits
//! live here so they can be tuned in one place.

// Input

/// Time a raw button level must hold before it is accepted (ms).
pub const DEBOUNCE_MS: u64 = 75;

/// Pause between two iterations of the polling loop (ms).
///
/// Short enough that a press is never missed, long enough to let the
/// executor sleep between samples.
pub const POLL_INTERVAL_MS: u64 = 1;

// Game

/// Base range of the secret number.
pub const BASE: u32 = 5;

/// Range growth per level. `BASE * MULTIPLIER * level` is the exclusive
/// upper bound of the secret for `level`.
pub const MULTIPLIER: u32 = 2;

/// Once a completed level's range reaches this value the game is won.
pub const GAME_MAX_NUMBER: u32 = 50;

/// Upper clamp for the player's guess.
pub const GUESS_MAX: u32 = 1000;

/// Level every new game starts at.
pub const FIRST_LEVEL: u32 = 1;

// Display

/// Visible text rows on the 128×64 panel with FONT_6X10 and 14 px pitch.
pub const SCREEN_LINES: usize = 4;

/// Characters per row (128 px / 6 px glyphs).
pub const SCREEN_COLUMNS: usize = 21;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button MINUS   → P0.11
//   Button GUESS   → P0.12
//   Button PLUS    → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
