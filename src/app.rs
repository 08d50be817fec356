//! One iteration of the control loop: sample, transition, render.
//!
//! `main.rs` owns the hardware and calls [`App::tick`] forever; tests call
//! it with simulated samples and timestamps.

use rand_core::RngCore;

use crate::game::{Controller, Outcome};
use crate::input::{ButtonPanel, Sample};
use crate::ui::Renderer;

/// Debouncer, controller and renderer, created once at startup.
pub struct App<R, D> {
    panel: ButtonPanel,
    controller: Controller<R>,
    renderer: D,
    /// The panel does not show the current state yet.
    dirty: bool,
}

impl<R, D> App<R, D>
where
    R: RngCore,
    D: Renderer,
{
    pub fn new(rng: R, renderer: D) -> Self {
        Self {
            panel: ButtonPanel::new(),
            controller: Controller::new(rng),
            renderer,
            dirty: true,
        }
    }

    /// Draw the current screen unconditionally (first frame after boot).
    ///
    /// On failure the frame stays pending and every following `tick`
    /// retries it.
    pub fn redraw(&mut self) -> Result<(), D::Error> {
        self.dirty = true;
        self.renderer
            .render(self.controller.state(), self.controller.session())?;
        self.dirty = false;
        Ok(())
    }

    /// Run one loop iteration.
    ///
    /// The screen is redrawn when a press changed something or when an
    /// earlier frame failed to render. A render error leaves the game state
    /// advanced.
    pub fn tick(&mut self, sample: Sample, now_ms: u64) -> Result<Outcome, D::Error> {
        let presses = self.panel.poll(sample, now_ms);

        #[cfg(feature = "defmt")]
        for press in presses.iter() {
            defmt::info!("Button: {}", press.button);
        }

        let outcome = self.controller.handle_presses(presses);
        if outcome.is_changed() || self.dirty {
            self.redraw()?;
        }
        Ok(outcome)
    }

    /// Whether a frame is still waiting to be drawn.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn controller(&self) -> &Controller<R> {
        &self.controller
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    #[cfg(test)]
    pub(crate) fn renderer_mut(&mut self) -> &mut D {
        &mut self.renderer
    }
}
