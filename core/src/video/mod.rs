pub mod framebuffer;
pub mod geometry;
pub mod raster;

pub use framebuffer::{Framebuffer, PitchedFrame, PixelTarget};
pub use geometry::FrameGeometry;
pub use raster::{capture_frame, compose_argb, quantize};
