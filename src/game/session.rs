//! Numeric state of a game: secret, guess, level and guess count.

use rand_core::RngCore;

use crate::config::{BASE, FIRST_LEVEL, GAME_MAX_NUMBER, GUESS_MAX, MULTIPLIER};

/// Exclusive upper bound of the secret number for `level`.
pub const fn max_for_level(level: u32) -> u32 {
    BASE * MULTIPLIER * level
}

/// Uniform value in `[0, bound)`.
///
/// Draws from the top of the `u32` range are rejected so every residue is
/// equally likely.
pub fn random_below<R: RngCore>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    // Largest multiple of `bound` that fits; values at or above it are biased.
    let zone = u32::MAX - (u32::MAX % bound);
    loop {
        let value = rng.next_u32();
        if value < zone {
            return value % bound;
        }
    }
}

/// Snapshot-able numeric game state, owned by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSession {
    secret: u32,
    guess: u32,
    level: u32,
    guess_count: u32,
}

impl GameSession {
    /// Power-on state: level 1, guess 0, no secret chosen yet.
    pub const fn new() -> Self {
        Self {
            secret: 0,
            guess: 0,
            level: FIRST_LEVEL,
            guess_count: 0,
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn guess(&self) -> u32 {
        self.guess
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Wrong guesses submitted on the current level.
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Exclusive upper bound of the current level's secret.
    pub fn range_max(&self) -> u32 {
        max_for_level(self.level)
    }

    /// Whether completing the current level wins the game.
    pub fn is_final_level(&self) -> bool {
        self.range_max() >= GAME_MAX_NUMBER
    }

    /// Pick a fresh secret for the current level and clear the guess count.
    pub(crate) fn start_level<R: RngCore>(&mut self, rng: &mut R) {
        self.secret = random_below(rng, self.range_max());
        self.guess_count = 0;
        #[cfg(feature = "defmt")]
        defmt::info!("Game: level {} secret={}", self.level, self.secret);
    }

    /// Move to the next level and seed it.
    pub(crate) fn advance_level<R: RngCore>(&mut self, rng: &mut R) {
        self.level += 1;
        #[cfg(feature = "defmt")]
        defmt::info!("Game: advanced to level {}", self.level);
        self.start_level(rng);
    }

    /// Returns `false` when already at the floor.
    pub(crate) fn decrement_guess(&mut self) -> bool {
        if self.guess == 0 {
            return false;
        }
        self.guess -= 1;
        true
    }

    /// Returns `false` when already at [`GUESS_MAX`].
    pub(crate) fn increment_guess(&mut self) -> bool {
        if self.guess >= GUESS_MAX {
            return false;
        }
        self.guess += 1;
        true
    }

    pub(crate) fn record_miss(&mut self) {
        self.guess_count = self.guess_count.saturating_add(1);
    }

    pub(crate) fn clear_guess(&mut self) {
        self.guess = 0;
    }

    /// Back to level 1 with a cleared guess, ready for a new game.
    pub(crate) fn restart(&mut self) {
        self.level = FIRST_LEVEL;
        self.guess = 0;
    }

    #[cfg(test)]
    pub(crate) fn set_guess(&mut self, guess: u32) {
        self.guess = guess.min(GUESS_MAX);
    }

    #[cfg(test)]
    pub(crate) fn set_level(&mut self, level: u32) {
        self.level = level;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
