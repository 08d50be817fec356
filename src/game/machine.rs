//! Game state machine.
//!
//! | State         | MINUS            | GUESS                 | PLUS             |
//! |---------------|------------------|-----------------------|------------------|
//! | Start         | new level        | new level             | new level        |
//! | EnteringGuess | guess - 1        | TooLow/TooHigh/Correct| guess + 1        |
//! | TooLow        | EnteringGuess    | EnteringGuess         | EnteringGuess    |
//! | TooHigh       | EnteringGuess    | EnteringGuess         | EnteringGuess    |
//! | Correct       | -                | next level or Won     | -                |
//! | Won           | -                | Start (level 1)       | -                |
//!
//! Presses marked `-` are dropped.

use rand_core::RngCore;

use super::session::GameSession;
use crate::input::{Button, PressEvent};

/// Screen the game is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Title screen.
    #[default]
    Start,
    /// Player adjusts and submits a guess.
    EnteringGuess,
    /// Last guess was below the secret.
    TooLow,
    /// Last guess was above the secret.
    TooHigh,
    /// Level solved.
    Correct,
    /// Final level solved.
    Won,
}

/// Whether a button press had any effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// State or numbers changed; the screen needs a redraw.
    Changed,
    /// Press has no meaning in the current state (or hit a clamp).
    Ignored,
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Ignored
        }
    }

    pub fn is_changed(self) -> bool {
        matches!(self, Outcome::Changed)
    }
}

/// Owns the game state and session and applies button presses to them.
pub struct Controller<R> {
    state: GameState,
    session: GameSession,
    rng: R,
}

impl<R: RngCore> Controller<R> {
    /// Fresh game on the title screen. `rng` seeds every level.
    pub fn new(rng: R) -> Self {
        Self {
            state: GameState::Start,
            session: GameSession::new(),
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn on_minus(&mut self) -> Outcome {
        self.transition(Button::Minus)
    }

    pub fn on_guess(&mut self) -> Outcome {
        self.transition(Button::Guess)
    }

    pub fn on_plus(&mut self) -> Outcome {
        self.transition(Button::Plus)
    }

    /// Apply a single button press.
    pub fn handle(&mut self, button: Button) -> Outcome {
        match button {
            Button::Minus => self.on_minus(),
            Button::Guess => self.on_guess(),
            Button::Plus => self.on_plus(),
        }
    }

    /// Apply the presses of one poll in the order given.
    ///
    /// `ButtonPanel::poll` already yields them in `Button::PRIORITY` order.
    pub fn handle_presses<I>(&mut self, presses: I) -> Outcome
    where
        I: IntoIterator<Item = PressEvent>,
    {
        let mut changed = false;
        for press in presses {
            changed |= self.handle(press.button).is_changed();
        }
        Outcome::from_changed(changed)
    }

    fn transition(&mut self, button: Button) -> Outcome {
        use GameState::*;

        let next = match (self.state, button) {
            (Start, _) => {
                self.session.start_level(&mut self.rng);
                EnteringGuess
            }
            (EnteringGuess, Button::Minus) => {
                return Outcome::from_changed(self.session.decrement_guess())
            }
            (EnteringGuess, Button::Plus) => {
                return Outcome::from_changed(self.session.increment_guess())
            }
            (EnteringGuess, Button::Guess) => self.evaluate_guess(),
            (TooLow | TooHigh, _) => EnteringGuess,
            (Correct, Button::Guess) => self.advance_or_win(),
            (Won, Button::Guess) => {
                self.session.restart();
                Start
            }
            (Correct | Won, Button::Minus | Button::Plus) => return Outcome::Ignored,
        };

        self.enter(next);
        Outcome::Changed
    }

    fn evaluate_guess(&mut self) -> GameState {
        let guess = self.session.guess();
        let secret = self.session.secret();

        if guess < secret {
            self.session.record_miss();
            GameState::TooLow
        } else if guess > secret {
            self.session.record_miss();
            GameState::TooHigh
        } else {
            // The winning guess is not counted.
            self.session.clear_guess();
            GameState::Correct
        }
    }

    fn advance_or_win(&mut self) -> GameState {
        self.session.clear_guess();
        if self.session.is_final_level() {
            GameState::Won
        } else {
            self.session.advance_level(&mut self.rng);
            GameState::EnteringGuess
        }
    }

    fn enter(&mut self, next: GameState) {
        #[cfg(feature = "defmt")]
        {
            if next != self.state {
                defmt::debug!("Game: {} -> {}", self.state, next);
            }
        }
        self.state = next;
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: GameState) {
        self.state = state;
    }
}
