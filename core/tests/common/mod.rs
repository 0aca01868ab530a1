#![allow(dead_code)]

use scanline_core::core::SimulatedCore;
use scanline_core::input::ButtonMask;
use scanline_core::video::FrameGeometry;

/// Scriptable stand-in for a simulated core.
///
/// Time is measured in rising clock edges seen by `eval()`. Sync outputs are
/// active inside half-open edge windows (by default hsync is held for the
/// first six edges); colours are a fixed function of the edge count so
/// captured frames are deterministic.
pub struct MockCore {
    clock: bool,
    last_clock: bool,
    reset: bool,
    buttons: ButtonMask,
    pub rising_edges: u64,
    pub evals: u64,
    pub reset_edges: u64,
    pub hsync_window: (u64, u64),
    pub vsync_window: (u64, u64),
    /// `(edge, status)`: error status becomes `status` from `edge` onwards.
    pub error_from: Option<(u64, u32)>,
    error_status: u32,
}

impl MockCore {
    pub fn new() -> Self {
        Self {
            clock: false,
            last_clock: false,
            reset: false,
            buttons: ButtonMask::default(),
            rising_edges: 0,
            evals: 0,
            reset_edges: 0,
            hsync_window: (0, 6),
            vsync_window: (0, 0),
            error_from: None,
            error_status: 0,
        }
    }

    /// hsync active from the start and released after `periods` edges.
    pub fn with_hsync_for(periods: u64) -> Self {
        Self::new().hsync_during(0, periods)
    }

    /// hsync active for rising edges in `start..end`.
    pub fn hsync_during(mut self, start: u64, end: u64) -> Self {
        self.hsync_window = (start, end);
        self
    }

    /// vsync active for rising edges in `start..end`.
    pub fn vsync_during(mut self, start: u64, end: u64) -> Self {
        self.vsync_window = (start, end);
        self
    }

    /// Raise `status` in the error register from rising edge `edge` on.
    pub fn raise_error_at(mut self, edge: u64, status: u32) -> Self {
        self.error_from = Some((edge, status));
        self
    }
}

impl SimulatedCore for MockCore {
    fn set_clock(&mut self, high: bool) {
        self.clock = high;
    }

    fn set_reset(&mut self, active: bool) {
        self.reset = active;
    }

    fn set_buttons(&mut self, mask: ButtonMask) {
        self.buttons = mask;
    }

    fn buttons(&self) -> ButtonMask {
        self.buttons
    }

    fn eval(&mut self) {
        self.evals += 1;
        if self.clock && !self.last_clock {
            self.rising_edges += 1;
            if self.reset {
                self.reset_edges += 1;
            }
            if let Some((edge, status)) = self.error_from
                && self.rising_edges >= edge
            {
                self.error_status |= status;
            }
        }
        self.last_clock = self.clock;
    }

    fn rgb(&self) -> (u8, u8, u8) {
        let pixel = self.rising_edges / 2;
        (
            (pixel % 8) as u8,
            ((pixel / 8) % 8) as u8,
            ((pixel / 64) % 8) as u8,
        )
    }

    fn hsync(&self) -> bool {
        (self.hsync_window.0..self.hsync_window.1).contains(&self.rising_edges)
    }

    fn vsync(&self) -> bool {
        (self.vsync_window.0..self.vsync_window.1).contains(&self.rising_edges)
    }

    fn error_status(&self) -> u32 {
        self.error_status
    }
}

/// A small raster that keeps presentation-loop tests fast.
pub fn small_geometry() -> FrameGeometry {
    FrameGeometry {
        total_width: 10,
        total_height: 6,
        visible_width: 8,
        visible_height: 4,
        h_back_porch: 3,
        v_back_porch: 5,
    }
}
