use std::time::{Duration, Instant};

/// Minimal 4x5 bitmap font for FPS overlay. Each glyph is 4 pixels wide, 5 rows tall.
/// Bits are MSB-left within each u8 (only top 4 bits used).
const GLYPHS: &[(&[u8; 5], u8)] = &[
    (&[0x60, 0x90, 0x90, 0x90, 0x60], b'0'),
    (&[0x20, 0x60, 0x20, 0x20, 0x70], b'1'),
    (&[0x60, 0x90, 0x20, 0x40, 0xF0], b'2'),
    (&[0x60, 0x90, 0x20, 0x90, 0x60], b'3'),
    (&[0x90, 0x90, 0xF0, 0x10, 0x10], b'4'),
    (&[0xF0, 0x80, 0xE0, 0x10, 0xE0], b'5'),
    (&[0x60, 0x80, 0xE0, 0x90, 0x60], b'6'),
    (&[0xF0, 0x10, 0x20, 0x40, 0x40], b'7'),
    (&[0x60, 0x90, 0x60, 0x90, 0x60], b'8'),
    (&[0x60, 0x90, 0x70, 0x10, 0x60], b'9'),
    (&[0x00, 0x00, 0x00, 0x00, 0x40], b'.'),
];

const GLYPH_W: usize = 4;
const WHITE: u32 = 0xFFFF_FFFF;

fn glyph_for(ch: u8) -> Option<&'static [u8; 5]> {
    GLYPHS.iter().find(|&&(_, c)| c == ch).map(|&(data, _)| data)
}

/// Draw `text` in white at the top-left of a pitched ARGB8888 buffer.
/// Unknown characters render as blanks; pixels past the buffer are dropped.
pub fn draw_text(bytes: &mut [u8], pitch: usize, text: &str) {
    let x0: usize = 2;
    let y0: usize = 2;

    for (ci, ch) in text.bytes().enumerate() {
        let Some(glyph) = glyph_for(ch) else {
            continue;
        };
        let gx = x0 + ci * (GLYPH_W + 1);

        for (row, &bits) in glyph.iter().enumerate() {
            let py = y0 + row;
            for col in 0..GLYPH_W {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                let offset = py * pitch + (gx + col) * 4;
                if (gx + col) * 4 + 4 <= pitch && offset + 4 <= bytes.len() {
                    bytes[offset..offset + 4].copy_from_slice(&WHITE.to_ne_bytes());
                }
            }
        }
    }
}

/// Frames-per-second readout, refreshed once a second.
pub struct FpsCounter {
    frames: u32,
    since: Instant,
    text: String,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            since: Instant::now(),
            text: String::new(),
        }
    }

    /// Count a frame and return the current readout.
    pub fn tick(&mut self) -> &str {
        self.frames += 1;
        let elapsed = self.since.elapsed();
        if elapsed >= Duration::from_secs(1) {
            let fps = f64::from(self.frames) / elapsed.as_secs_f64();
            self.text = format!("{fps:.1}");
            self.frames = 0;
            self.since = Instant::now();
        }
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_digit_pixels_only() {
        let pitch = 16 * 4;
        let mut bytes = vec![0u8; pitch * 8];
        draw_text(&mut bytes, pitch, "1");

        let px = |x: usize, y: usize| {
            let o = y * pitch + x * 4;
            u32::from_ne_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]])
        };
        // Top row of '1' is 0x20: only column 2 set
        assert_eq!(px(2 + 2, 2), WHITE);
        assert_eq!(px(2, 2), 0);
        assert_eq!(px(0, 0), 0);
    }

    #[test]
    fn clips_to_buffer() {
        let pitch = 6 * 4;
        let mut bytes = vec![0u8; pitch * 3];
        draw_text(&mut bytes, pitch, "88.8");

        assert_eq!(bytes.len(), pitch * 3);
        let px = |x: usize, y: usize| {
            let o = y * pitch + x * 4;
            u32::from_ne_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]])
        };
        // Only the top row of the first '8' (0x60) lands inside 6x3
        assert_eq!(px(3, 2), WHITE);
        assert_eq!(px(4, 2), WHITE);
        assert_eq!(px(5, 2), 0);
        let lit = bytes
            .chunks_exact(4)
            .filter(|p| u32::from_ne_bytes([p[0], p[1], p[2], p[3]]) == WHITE)
            .count();
        assert_eq!(lit, 2);
    }
}
