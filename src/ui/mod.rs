//! User interface - turning game state into pixels.
//!
//! The controller never talks to the display directly. After every poll
//! that changed something, the main loop hands the current
//! `(GameState, &GameSession)` to a [`Renderer`], which has read-only
//! access and cannot trigger transitions.
//!
//! ## Components
//!
//! - **Screen**: per-state text layout, hardware independent
//! - **Display**: SSD1306 128×64 OLED via I²C (embedded builds only)

#[cfg(feature = "embedded")]
pub mod display;
pub mod screen;

pub use screen::{Line, ScreenText};

use crate::game::{GameSession, GameState};

/// Something that can show the game.
pub trait Renderer {
    type Error;

    /// Draw the screen for `state` with the numbers in `session`.
    fn render(&mut self, state: GameState, session: &GameSession) -> Result<(), Self::Error>;
}
