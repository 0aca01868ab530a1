//! PNG screenshots of captured frames.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use scanline_core::video::Framebuffer;

use crate::error::FrontendError;

/// Save an ARGB32 framebuffer as an 8-bit RGBA PNG.
pub fn save_png(frame: &Framebuffer, path: &Path) -> Result<(), FrontendError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&to_rgba(frame))?;
    writer.finish()?;
    Ok(())
}

fn to_rgba(frame: &Framebuffer) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(frame.pixels().len() * 4);
    for &pixel in frame.pixels() {
        let [a, r, g, b] = pixel.to_be_bytes();
        rgba.extend_from_slice(&[r, g, b, a]);
    }
    rgba
}

/// File name for the `index`-th interactive screenshot in `dir`.
pub fn numbered_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("scanline-{index:04}.png"))
}
