use crate::error::HarnessError;
use crate::video::geometry::FrameGeometry;

/// Destination for captured pixels.
///
/// Colours are packed `0xAARRGGBB`. Coordinates are always inside the
/// visible rectangle the target was created for.
pub trait PixelTarget {
    fn put(&mut self, x: u32, y: u32, argb: u32);
}

/// Owned ARGB32 framebuffer, row-major, `width * height` pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// A framebuffer sized to the visible rectangle of `geometry`.
    pub fn for_geometry(geometry: &FrameGeometry) -> Self {
        Self::new(geometry.visible_width, geometry.visible_height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn fill(&mut self, argb: u32) {
        self.pixels.fill(argb);
    }

    /// Copy a pitched ARGB8888 byte buffer (native-endian words) into this
    /// framebuffer.
    pub fn copy_from_bytes(&mut self, bytes: &[u8], pitch: usize) {
        for (y, row) in self.pixels.chunks_exact_mut(self.width as usize).enumerate() {
            let src = &bytes[y * pitch..y * pitch + row.len() * 4];
            for (dst, word) in row.iter_mut().zip(src.chunks_exact(4)) {
                *dst = u32::from_ne_bytes([word[0], word[1], word[2], word[3]]);
            }
        }
    }
}

impl PixelTarget for Framebuffer {
    fn put(&mut self, x: u32, y: u32, argb: u32) {
        self.pixels[(y * self.width + x) as usize] = argb;
    }
}

/// A borrowed, pitched byte buffer such as a locked streaming texture.
///
/// Pixels are stored as native-endian `u32` words, which is what SDL's
/// packed ARGB8888 format expects.
pub struct PitchedFrame<'a> {
    bytes: &'a mut [u8],
    pitch: usize,
}

impl<'a> PitchedFrame<'a> {
    /// Wrap `bytes`, rejecting any pitch other than `visible_width * 4`.
    pub fn new(
        bytes: &'a mut [u8],
        pitch: usize,
        geometry: &FrameGeometry,
    ) -> Result<Self, HarnessError> {
        let expected = geometry.pitch();
        if pitch != expected {
            return Err(HarnessError::PitchMismatch {
                expected,
                actual: pitch,
            });
        }
        let needed = expected * geometry.visible_height as usize;
        if bytes.len() < needed {
            return Err(HarnessError::BufferTooSmall {
                needed,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes, pitch })
    }
}

impl PixelTarget for PitchedFrame<'_> {
    fn put(&mut self, x: u32, y: u32, argb: u32) {
        let offset = y as usize * self.pitch + x as usize * 4;
        self.bytes[offset..offset + 4].copy_from_slice(&argb.to_ne_bytes());
    }
}
