//! numguess firmware for the nRF52840.
//!
//! A single Embassy task runs the control loop: sample the three buttons,
//! feed the debounced presses to the game, redraw the OLED when anything
//! changed, yield, repeat. There is nothing else to schedule.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::rng::{self, Rng};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Instant, Timer};
use numguess::config::POLL_INTERVAL_MS;
use numguess::input::Sample;
use numguess::ui::display;
use numguess::App;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("numguess starting");

    // Buttons: active-low with internal pull-up (see config.rs for the map).
    let minus = Input::new(p.P0_11, Pull::Up);
    let guess = Input::new(p.P0_12, Pull::Up);
    let plus = Input::new(p.P0_24, Pull::Up);

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = match display::init(i2c) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Display init failed: {}", e);
            halt();
        }
    };
    info!("Display ready");

    let rng = Rng::new(p.RNG, Irqs);
    let mut app = App::new(rng, oled);
    if let Err(e) = app.redraw() {
        warn!("Render failed: {}", e);
    }

    loop {
        let sample = Sample::from_active_low(minus.is_low(), guess.is_low(), plus.is_low());
        let now_ms = Instant::now().as_millis();

        if let Err(e) = app.tick(sample, now_ms) {
            warn!("Render failed: {}", e);
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

/// Stop for good. Only a reset gets the device out of here.
fn halt() -> ! {
    loop {
        cortex_m::asm::wfe();
    }
}
