//! A pannable, zoomable XOR pattern driven by the button register.

use scanline_core::core::SimulatedCore;
use scanline_core::input::{Action, ButtonMask};
use tracing::trace;

use crate::registry::CoreEntry;
use crate::timing::VgaTiming;
use crate::vga::{Scene, VgaCore};

/// Zoom-in was held at maximum zoom.
pub const ERR_ZOOM_IN_LIMIT: u32 = 1 << 0;
/// Zoom-out was held at minimum zoom.
pub const ERR_ZOOM_OUT_LIMIT: u32 = 1 << 1;

pub const MAX_ZOOM: u8 = 5;

/// Pixels scrolled per frame while a direction is held.
pub const SCROLL_STEP: i32 = 4;

pub struct XorPattern {
    scroll_x: i32,
    scroll_y: i32,
    zoom: u8,
    error_status: u32,
}

impl XorPattern {
    pub fn new() -> Self {
        Self {
            scroll_x: 0,
            scroll_y: 0,
            zoom: 2,
            error_status: 0,
        }
    }

    pub fn scroll(&self) -> (i32, i32) {
        (self.scroll_x, self.scroll_y)
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }
}

impl Default for XorPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for XorPattern {
    fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let px = (x as i32).wrapping_add(self.scroll_x) >> self.zoom;
        let py = (y as i32).wrapping_add(self.scroll_y) >> self.zoom;
        let v = (px ^ py) as u32;
        // Two bits per channel; 3 is already full intensity
        ((v & 3) as u8, ((v >> 2) & 3) as u8, ((v >> 4) & 3) as u8)
    }

    fn vblank(&mut self, buttons: ButtonMask) {
        if buttons.is_held(Action::Up) {
            self.scroll_y -= SCROLL_STEP;
        }
        if buttons.is_held(Action::Down) {
            self.scroll_y += SCROLL_STEP;
        }
        if buttons.is_held(Action::Left) {
            self.scroll_x -= SCROLL_STEP;
        }
        if buttons.is_held(Action::Right) {
            self.scroll_x += SCROLL_STEP;
        }

        if buttons.is_held(Action::ZoomIn) {
            if self.zoom < MAX_ZOOM {
                self.zoom += 1;
            } else {
                self.error_status |= ERR_ZOOM_IN_LIMIT;
            }
        }
        if buttons.is_held(Action::ZoomOut) {
            if self.zoom > 0 {
                self.zoom -= 1;
            } else {
                self.error_status |= ERR_ZOOM_OUT_LIMIT;
            }
        }

        trace!(
            scroll_x = self.scroll_x,
            scroll_y = self.scroll_y,
            zoom = self.zoom,
            "pattern vblank"
        );
    }

    fn reset(&mut self) {
        let error_status = self.error_status;
        *self = Self {
            error_status,
            ..Self::new()
        };
    }

    fn error_status(&self) -> u32 {
        self.error_status
    }
}

pub type PatternCore = VgaCore<XorPattern>;

pub fn new_core() -> PatternCore {
    VgaCore::new(VgaTiming::VGA_640X480, XorPattern::new())
}

fn create_core() -> Box<dyn SimulatedCore> {
    Box::new(new_core())
}

inventory::submit! {
    CoreEntry::new(
        "pattern",
        "640x480 XOR pattern; arrows pan, +/- zoom",
        VgaTiming::VGA_640X480.geometry(),
        create_core,
    )
}
