//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use super::{Renderer, ScreenText};
use crate::error::Error;
use crate::game::{GameSession, GameState};

/// Baseline of the first text row (px).
const FIRST_BASELINE: i32 = 10;

/// Vertical distance between rows (px).
const LINE_PITCH: i32 = 14;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The game's renderer on a 128×64 SSD1306.
pub struct Oled<I2C> {
    display: Display<I2C>,
}

/// Initialise the SSD1306 display and clear the screen.
///
/// Fails with [`Error::DisplayInit`] if the panel does not acknowledge
/// on the bus.
pub fn init<I2C>(i2c: I2C) -> Result<Oled<I2C>, Error>
where
    I2C: I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::DisplayInit)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::DisplayInit)?;
    Ok(Oled { display })
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> Oled<I2C>
where
    I2C: I2c,
{
    /// Clear the frame buffer, print every row, and push it to the panel.
    pub fn draw(&mut self, screen: &ScreenText) -> Result<(), Error> {
        self.display.clear_buffer();

        for (row, line) in screen.lines().iter().enumerate() {
            let y = FIRST_BASELINE + row as i32 * LINE_PITCH;
            let _ = Text::new(line.as_str(), Point::new(0, y), text_style()).draw(&mut self.display);
        }

        self.display.flush().map_err(|_| Error::Display)
    }
}

impl<I2C> Renderer for Oled<I2C>
where
    I2C: I2c,
{
    type Error = Error;

    fn render(&mut self, state: GameState, session: &GameSession) -> Result<(), Error> {
        self.draw(&ScreenText::for_state(state, session))
    }
}
