//! VGA raster counters shared by the built-in cores.
//!
//! Coordinates run from the first active pixel: each line is active video,
//! front porch, sync pulse, back porch; each frame is the same vertically.
//! The counters advance once every two rising clock edges, matching the
//! harness's two periods per pixel.

use scanline_core::video::FrameGeometry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VgaTiming {
    pub h_active: u32,
    pub h_front_porch: u32,
    pub h_sync: u32,
    pub h_back_porch: u32,

    pub v_active: u32,
    pub v_front_porch: u32,
    pub v_sync: u32,
    pub v_back_porch: u32,
}

impl VgaTiming {
    /// Industry-standard 640x480 at 60 Hz (25.175 MHz pixel clock).
    pub const VGA_640X480: Self = Self {
        h_active: 640,
        h_front_porch: 16,
        h_sync: 96,
        h_back_porch: 48,
        v_active: 480,
        v_front_porch: 10,
        v_sync: 2,
        v_back_porch: 33,
    };

    pub const fn h_total(&self) -> u32 {
        self.h_active + self.h_front_porch + self.h_sync + self.h_back_porch
    }

    pub const fn v_total(&self) -> u32 {
        self.v_active + self.v_front_porch + self.v_sync + self.v_back_porch
    }

    /// Harness geometry that lines up with this timing.
    ///
    /// The back porches are in clock periods counted from the edge on which
    /// the sync pulse was seen to end, which is already the first period of
    /// the porch.
    pub const fn geometry(&self) -> FrameGeometry {
        FrameGeometry {
            total_width: self.h_total(),
            total_height: self.v_total(),
            visible_width: self.h_active,
            visible_height: self.v_active,
            h_back_porch: self.h_back_porch * 2 - 1,
            v_back_porch: self.v_back_porch * self.h_total() * 2 - 1,
        }
    }
}

/// Something that happened on a pixel advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterEvent {
    /// The raster entered the vertical sync pulse.
    VsyncStart,
}

/// Pixel and line counters driven by rising clock edges.
#[derive(Debug)]
pub struct Raster {
    timing: VgaTiming,
    x: u32,
    y: u32,
    half: bool, // second edge of the current pixel
}

impl Raster {
    pub fn new(timing: VgaTiming) -> Self {
        let mut raster = Self {
            timing,
            x: 0,
            y: 0,
            half: false,
        };
        raster.reset();
        raster
    }

    /// Park the counters at the start of the hsync pulse on the last line of
    /// the frame, so the first line to follow that pulse is line 0.
    pub fn reset(&mut self) {
        self.x = self.timing.h_active + self.timing.h_front_porch;
        self.y = self.timing.v_total() - 1;
        self.half = false;
    }

    /// Advance by one rising edge.
    pub fn tick(&mut self) -> Option<RasterEvent> {
        if !self.half {
            self.half = true;
            return None;
        }
        self.half = false;

        self.x += 1;
        if self.x < self.timing.h_total() {
            return None;
        }
        self.x = 0;
        self.y += 1;
        if self.y == self.timing.v_total() {
            self.y = 0;
        }
        (self.y == self.timing.v_active + self.timing.v_front_porch)
            .then_some(RasterEvent::VsyncStart)
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn in_active(&self) -> bool {
        self.x < self.timing.h_active && self.y < self.timing.v_active
    }

    pub fn in_hsync(&self) -> bool {
        let start = self.timing.h_active + self.timing.h_front_porch;
        (start..start + self.timing.h_sync).contains(&self.x)
    }

    pub fn in_vsync(&self) -> bool {
        let start = self.timing.v_active + self.timing.v_front_porch;
        (start..start + self.timing.v_sync).contains(&self.y)
    }

    pub fn timing(&self) -> &VgaTiming {
        &self.timing
    }
}
