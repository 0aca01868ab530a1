//! Signal-level shell shared by the built-in cores: clock edge detection,
//! reset, button latch, and sync/colour outputs around a [`Scene`].

use scanline_core::core::SimulatedCore;
use scanline_core::input::ButtonMask;

use crate::timing::{Raster, RasterEvent, VgaTiming};

/// The picture-generating half of a core.
pub trait Scene {
    /// Colour of active pixel `(x, y)`, each channel in 0..=7.
    fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8);

    /// Called once per frame at the start of vertical sync with the
    /// buttons currently applied to the core.
    fn vblank(&mut self, _buttons: ButtonMask) {}

    /// Return to power-on state. The error register is not part of this.
    fn reset(&mut self) {}

    /// Sticky error bits raised by the scene.
    fn error_status(&self) -> u32 {
        0
    }
}

/// A VGA timing generator wrapped around a [`Scene`].
pub struct VgaCore<S> {
    raster: Raster,
    scene: S,

    // Inputs
    clock: bool,
    reset: bool,
    buttons: ButtonMask,

    // Edge detection
    last_clock: bool,

    // Outputs, updated by eval()
    rgb: (u8, u8, u8),
    hsync: bool,
    vsync: bool,
}

impl<S: Scene> VgaCore<S> {
    pub fn new(timing: VgaTiming, scene: S) -> Self {
        Self {
            raster: Raster::new(timing),
            scene,
            clock: false,
            reset: false,
            buttons: ButtonMask::default(),
            last_clock: false,
            rgb: (0, 0, 0),
            hsync: false,
            vsync: false,
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    fn rising_edge(&mut self) {
        if self.reset {
            self.raster.reset();
            self.scene.reset();
            return;
        }
        if let Some(RasterEvent::VsyncStart) = self.raster.tick() {
            self.scene.vblank(self.buttons);
        }
    }

    fn update_outputs(&mut self) {
        self.hsync = self.raster.in_hsync();
        self.vsync = self.raster.in_vsync();
        self.rgb = if self.raster.in_active() {
            self.scene.pixel(self.raster.x(), self.raster.y())
        } else {
            (0, 0, 0)
        };
    }
}

impl<S: Scene> SimulatedCore for VgaCore<S> {
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
        if self.clock && !self.last_clock {
            self.rising_edge();
        }
        self.last_clock = self.clock;
        self.update_outputs();
    }

    fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    fn hsync(&self) -> bool {
        self.hsync
    }

    fn vsync(&self) -> bool {
        self.vsync
    }

    fn error_status(&self) -> u32 {
        self.scene.error_status()
    }
}
