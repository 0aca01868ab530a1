use tracing::debug;

use super::signals::SimulatedCore;

/// Full clock periods per logical pixel. The core's pixel clock runs at
/// twice the rate of the raster the harness walks.
pub const PERIODS_PER_PIXEL: u64 = 2;

/// Drives a [`SimulatedCore`] one clock period at a time.
///
/// This is the only way the harness advances simulated time, so every
/// observation of the core's outputs happens right after a clock-high
/// evaluation.
pub struct ClockDriver<C> {
    core: C,
    periods: u64,
}

impl<C: SimulatedCore> ClockDriver<C> {
    pub fn new(core: C) -> Self {
        Self { core, periods: 0 }
    }

    /// One full period: clock low, eval, clock high, eval.
    pub fn step(&mut self) {
        self.core.set_clock(false);
        self.core.eval();
        self.core.set_clock(true);
        self.core.eval();
        self.periods += 1;
    }

    /// Two full periods (one logical pixel).
    pub fn double_step(&mut self) {
        self.step();
        self.step();
    }

    /// Hold reset for two full periods, then release it.
    ///
    /// Must run exactly once, before alignment or capture. Nothing downstream
    /// checks that it did.
    pub fn reset(&mut self) {
        self.core.set_reset(true);
        self.step();
        self.step();
        self.core.set_reset(false);
        debug!(periods = self.periods, "reset sequence complete");
    }

    /// Total full periods issued since construction.
    pub fn periods(&self) -> u64 {
        self.periods
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }
}
