//! Physical button input - debouncing and per-poll press detection.
//!
//! Three tactile switches (active-low with internal pull-up):
//!   - MINUS - decrease the guess
//!   - GUESS - submit / confirm
//!   - PLUS  - increase the guess
//!
//! The hardware is sampled once per loop iteration; `ButtonPanel` turns
//! those samples into at most one `PressEvent` per button per poll.

pub mod debounce;
pub mod panel;

#[cfg(test)]
mod tests;

pub use debounce::{ButtonChannel, Level, PressEvent};
pub use panel::{ButtonPanel, Presses, Sample};

/// The three game buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Minus,
    Guess,
    Plus,
}

impl Button {
    /// Number of physical buttons.
    pub const COUNT: usize = 3;

    /// Dispatch order when several buttons fire in the same poll.
    ///
    /// The controller sees a same-iteration MINUS before GUESS before PLUS,
    /// so e.g. MINUS+GUESS submits the already decremented guess.
    pub const PRIORITY: [Button; Button::COUNT] = [Button::Minus, Button::Guess, Button::Plus];

    /// Position of this button in [`Button::PRIORITY`].
    pub const fn index(self) -> usize {
        match self {
            Button::Minus => 0,
            Button::Guess => 1,
            Button::Plus => 2,
        }
    }
}
