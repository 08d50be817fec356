//! The three-button panel: one debounced channel per button.

use heapless::Vec;

use super::{Button, ButtonChannel, Level, PressEvent};

/// Press events of one poll, in [`Button::PRIORITY`] order.
pub type Presses = Vec<PressEvent, { Button::COUNT }>;

/// Raw levels of all three lines, sampled in the same loop iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    pub minus: Level,
    pub guess: Level,
    pub plus: Level,
}

impl Sample {
    /// Build a sample from active-low pin readings.
    pub const fn from_active_low(minus_low: bool, guess_low: bool, plus_low: bool) -> Self {
        Self {
            minus: Level::from_active_low(minus_low),
            guess: Level::from_active_low(guess_low),
            plus: Level::from_active_low(plus_low),
        }
    }

    pub fn level(&self, button: Button) -> Level {
        match button {
            Button::Minus => self.minus,
            Button::Guess => self.guess,
            Button::Plus => self.plus,
        }
    }
}

/// Debouncer for the whole panel. Channels are independent.
pub struct ButtonPanel {
    channels: [ButtonChannel; Button::COUNT],
}

impl ButtonPanel {
    pub const fn new() -> Self {
        Self {
            channels: [
                ButtonChannel::new(Button::PRIORITY[0]),
                ButtonChannel::new(Button::PRIORITY[1]),
                ButtonChannel::new(Button::PRIORITY[2]),
            ],
        }
    }

    /// Poll every channel once and collect the presses accepted now.
    pub fn poll(&mut self, sample: Sample, now_ms: u64) -> Presses {
        let mut presses = Presses::new();
        for channel in self.channels.iter_mut() {
            if let Some(event) = channel.poll(sample.level(channel.button()), now_ms) {
                // Capacity equals the channel count.
                let _ = presses.push(event);
            }
        }
        presses
    }

    pub fn channel(&self, button: Button) -> &ButtonChannel {
        &self.channels[button.index()]
    }
}

impl Default for ButtonPanel {
    fn default() -> Self {
        Self::new()
    }
}
