use crate::core::clock::PERIODS_PER_PIXEL;
use crate::error::HarnessError;

/// Raster timing the capture loop walks every frame.
///
/// Widths and heights are in pixels and lines. The back porches are in full
/// clock periods, counted from the period in which the end of the sync pulse
/// was observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameGeometry {
    pub total_width: u32,
    pub total_height: u32,
    pub visible_width: u32,
    pub visible_height: u32,
    pub h_back_porch: u32,
    pub v_back_porch: u32,
}

impl FrameGeometry {
    /// 640x480 visible inside an 800x525 raster (48 pixel / 33 line porches).
    ///
    /// A pixel spans two periods and the edge period already counts as the
    /// first one, hence 48*2-1 and 33*800*2-1.
    pub const VGA_640X480: Self = Self {
        total_width: 800,
        total_height: 525,
        visible_width: 640,
        visible_height: 480,
        h_back_porch: 95,
        v_back_porch: 52_799,
    };

    /// Check the invariants the capture loop and aligner rely on.
    pub fn validate(&self) -> Result<(), HarnessError> {
        let invalid = |msg: String| Err(HarnessError::InvalidGeometry(msg));

        if self.visible_width == 0 || self.visible_height == 0 {
            return invalid(format!(
                "visible area {}x{} is empty",
                self.visible_width, self.visible_height
            ));
        }
        if self.visible_width > self.total_width || self.visible_height > self.total_height {
            return invalid(format!(
                "visible area {}x{} exceeds total raster {}x{}",
                self.visible_width, self.visible_height, self.total_width, self.total_height
            ));
        }

        let h_blank = self.h_blank_periods();
        if u64::from(self.h_back_porch) >= h_blank {
            return invalid(format!(
                "horizontal back porch of {} periods does not fit in {h_blank} blanking periods",
                self.h_back_porch
            ));
        }

        let v_blank = self.v_blank_periods();
        if u64::from(self.v_back_porch) >= v_blank {
            return invalid(format!(
                "vertical back porch of {} periods does not fit in {v_blank} blanking periods",
                self.v_back_porch
            ));
        }

        Ok(())
    }

    /// Horizontal blanking interval in full clock periods.
    pub fn h_blank_periods(&self) -> u64 {
        u64::from(self.total_width - self.visible_width) * PERIODS_PER_PIXEL
    }

    /// Vertical blanking interval in full clock periods.
    pub fn v_blank_periods(&self) -> u64 {
        u64::from(self.total_height - self.visible_height)
            * u64::from(self.total_width)
            * PERIODS_PER_PIXEL
    }

    /// Full clock periods in one captured frame.
    pub fn frame_periods(&self) -> u64 {
        u64::from(self.total_width) * u64::from(self.total_height) * PERIODS_PER_PIXEL
    }

    /// Number of pixels written per frame.
    pub fn visible_pixels(&self) -> usize {
        self.visible_width as usize * self.visible_height as usize
    }

    /// Required row pitch of a display buffer, in bytes.
    pub fn pitch(&self) -> usize {
        self.visible_width as usize * 4
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::VGA_640X480
    }
}
