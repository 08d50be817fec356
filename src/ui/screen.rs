//! Text content of each game screen.
//!
//! Layout is 4 rows of up to 21 characters (FONT_6X10 on 128×64).
//! Text that does not fit a row is cut off rather than wrapped, and rows
//! beyond the fourth are dropped.

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::config::{SCREEN_COLUMNS, SCREEN_LINES};
use crate::game::{GameSession, GameState};

/// One row of text.
pub type Line = String<SCREEN_COLUMNS>;

/// The rows to draw for one frame, top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenText {
    lines: Vec<Line, SCREEN_LINES>,
}

impl ScreenText {
    /// Lay out the screen for `state`.
    pub fn for_state(state: GameState, session: &GameSession) -> Self {
        let mut screen = Self::default();
        match state {
            GameState::Start => {
                screen.push(format_args!("NUMBER GUESS"));
                screen.push(format_args!(""));
                screen.push(format_args!("Press any button"));
                screen.push(format_args!("to start"));
            }
            GameState::EnteringGuess => {
                screen.push(format_args!(
                    "Level {}  0-{}",
                    session.level(),
                    session.range_max() - 1
                ));
                screen.push(format_args!("Guess: {}", session.guess()));
                screen.push(format_args!("Tries: {}", session.guess_count()));
                screen.push(format_args!("[-]    [OK]    [+]"));
            }
            GameState::TooLow | GameState::TooHigh => {
                let hint = if state == GameState::TooLow {
                    "Too low!"
                } else {
                    "Too high!"
                };
                screen.push(format_args!("{}", hint));
                screen.push(format_args!("Guess: {}", session.guess()));
                screen.push(format_args!("Tries: {}", session.guess_count()));
                screen.push(format_args!("Press any button"));
            }
            GameState::Correct => {
                screen.push(format_args!("Correct!"));
                screen.push(format_args!("It was {}", session.secret()));
                screen.push(format_args!("Tries: {}", session.guess_count()));
                if session.is_final_level() {
                    screen.push(format_args!("OK: finish"));
                } else {
                    screen.push(format_args!("OK: next level"));
                }
            }
            GameState::Won => {
                screen.push(format_args!("You won!"));
                screen.push(format_args!("All {} levels done", session.level()));
                screen.push(format_args!(""));
                screen.push(format_args!("OK: play again"));
            }
        }
        screen
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whether any row contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Append a row, cut to [`SCREEN_COLUMNS`]. Rows past [`SCREEN_LINES`]
    /// are dropped.
    fn push(&mut self, args: fmt::Arguments<'_>) {
        let mut line = Line::new();
        // `Truncate` never reports an error.
        let _ = Truncate(&mut line).write_fmt(args);
        let _ = self.lines.push(line);
    }
}

/// Writes into a `Line` until it is full, then silently drops the rest.
struct Truncate<'a>(&'a mut Line);

impl Write for Truncate<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}
