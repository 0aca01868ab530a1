//! Raster capture: walk the full frame one pixel (two periods) at a time and
//! store the visible part.

use crate::core::clock::ClockDriver;
use crate::core::signals::SimulatedCore;
use crate::video::framebuffer::PixelTarget;
use crate::video::geometry::FrameGeometry;

/// Scale a native 0..=7 colour channel to 8 bits.
///
/// The multiplier is 85, so 3 already reaches 0xFF. Anything above that,
/// including the 7 * 85 = 595 top of the range, saturates at 0xFF rather
/// than wrapping into a neighbouring channel.
pub fn quantize(channel: u8) -> u8 {
    (u16::from(channel) * 85).min(0xFF) as u8
}

/// Compose a fully opaque `0xFFRRGGBB` pixel from native channel values.
pub fn compose_argb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000
        | (u32::from(quantize(r)) << 16)
        | (u32::from(quantize(g)) << 8)
        | u32::from(quantize(b))
}

/// Capture one frame into `target`.
///
/// Every position of the total raster costs one double step; only positions
/// inside the visible rectangle are written. Returns the number of pixels
/// written. The driver must already be phase aligned.
pub fn capture_frame<C: SimulatedCore>(
    driver: &mut ClockDriver<C>,
    geometry: &FrameGeometry,
    target: &mut dyn PixelTarget,
) -> usize {
    let mut written = 0;

    for y in 0..geometry.total_height {
        for x in 0..geometry.total_width {
            driver.double_step();

            if y < geometry.visible_height && x < geometry.visible_width {
                let (r, g, b) = driver.core().rgb();
                target.put(x, y, compose_argb(r, g, b));
                written += 1;
            }
        }
    }

    written
}
