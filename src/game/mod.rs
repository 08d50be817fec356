//! Number guessing game: numeric session plus the state machine that
//! drives it from button presses.

pub mod machine;
pub mod session;


pub use machine::{Controller, GameState, Outcome};
pub use session::{max_for_level, random_below, GameSession};
