//! numguess - three-button number guessing game.
//!
//! This crate holds the pure logic that runs identically on the host and
//! on the nRF52840:
//!
//! - `input`: debounced sampling of the MINUS / GUESS / PLUS buttons
//! - `game`: the game session and its state machine
//! - `ui`: per-state screen text and the `Renderer` seam
//! - `app`: one control-loop iteration tying them together
//!
//! Usage: `cargo test --lib` (host) or `cargo run --release --features embedded`
//! (target, via probe-rs).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! With the `embedded` feature the SSD1306 renderer in `ui::display` is
//! compiled in as well.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

#[cfg(test)]
mod testing;

pub use app::App;
pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - screens and the control loop
// ═══════════════════════════════════════════════════════════════════════════
