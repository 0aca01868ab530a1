//! Colour bars over a grey ramp. Ignores the buttons.

use scanline_core::core::SimulatedCore;

use crate::registry::CoreEntry;
use crate::timing::VgaTiming;
use crate::vga::{Scene, VgaCore};

/// RGB bit triples: white, yellow, cyan, green, magenta, red, blue, black.
const BARS: [u8; 8] = [0b111, 0b110, 0b011, 0b010, 0b101, 0b100, 0b001, 0b000];

/// Eight full-intensity bars on the top two thirds, a four-step grey ramp
/// below.
pub struct ColorBars {
    width: u32,
    height: u32,
}

impl ColorBars {
    pub fn new(timing: &VgaTiming) -> Self {
        Self {
            width: timing.h_active,
            height: timing.v_active,
        }
    }
}

impl Scene for ColorBars {
    fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        if y < self.height * 2 / 3 {
            let bar = BARS[(x * 8 / self.width) as usize];
            let on = |bit: u8| if bar & bit != 0 { 7 } else { 0 };
            (on(0b100), on(0b010), on(0b001))
        } else {
            let level = (x * 4 / self.width) as u8;
            (level, level, level)
        }
    }
}

pub type BarsCore = VgaCore<ColorBars>;

pub fn new_core() -> BarsCore {
    let timing = VgaTiming::VGA_640X480;
    VgaCore::new(timing, ColorBars::new(&timing))
}

fn create_core() -> Box<dyn SimulatedCore> {
    Box::new(new_core())
}

inventory::submit! {
    CoreEntry::new(
        "bars",
        "640x480 colour bars and grey ramp",
        VgaTiming::VGA_640X480.geometry(),
        create_core,
    )
}
