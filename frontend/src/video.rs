use std::path::PathBuf;

use scanline_core::HarnessError;
use scanline_core::present::{DisplaySink, FillFn};
use scanline_core::video::{FrameGeometry, Framebuffer};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::{info, warn};

use crate::input::ScreenshotRequest;
use crate::overlay::{self, FpsCounter};
use crate::screenshot;

pub struct Video {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
}

impl Video {
    /// Create an SDL window and renderer for the given visible resolution.
    pub fn new(
        sdl_video: &sdl2::VideoSubsystem,
        title: &str,
        width: u32,
        height: u32,
        scale: u32,
    ) -> Result<Self, HarnessError> {
        let window = sdl_video
            .window(title, width * scale, height * scale)
            .position_centered()
            .build()
            .map_err(|e| HarnessError::DisplayInit(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| HarnessError::DisplayInit(e.to_string()))?;

        let texture_creator = canvas.texture_creator();

        Ok(Self {
            canvas,
            texture_creator,
        })
    }

    /// A display sink backed by one streaming ARGB8888 texture.
    pub fn sink(
        &mut self,
        geometry: &FrameGeometry,
        options: SinkOptions,
    ) -> Result<SdlDisplay<'_>, HarnessError> {
        let Self {
            canvas,
            texture_creator,
        } = self;

        let texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::ARGB8888,
                geometry.visible_width,
                geometry.visible_height,
            )
            .map_err(|e| HarnessError::DisplayInit(e.to_string()))?;

        Ok(SdlDisplay {
            canvas,
            texture,
            size: (geometry.visible_width, geometry.visible_height),
            fps: options.show_fps.then(FpsCounter::new),
            screenshot: options.screenshot,
            screenshot_dir: options.screenshot_dir,
            screenshots_taken: 0,
            last_frame: options
                .keep_last_frame
                .then(|| Framebuffer::for_geometry(geometry)),
        })
    }
}

pub struct SinkOptions {
    pub show_fps: bool,
    pub screenshot: ScreenshotRequest,
    pub screenshot_dir: PathBuf,
    /// Keep a copy of every frame so it can be saved after the loop ends.
    pub keep_last_frame: bool,
}

pub struct SdlDisplay<'a> {
    canvas: &'a mut Canvas<Window>,
    texture: Texture<'a>,
    size: (u32, u32),
    fps: Option<FpsCounter>,
    screenshot: ScreenshotRequest,
    screenshot_dir: PathBuf,
    screenshots_taken: u32,
    last_frame: Option<Framebuffer>,
}

impl SdlDisplay<'_> {
    pub fn last_frame(&self) -> Option<&Framebuffer> {
        self.last_frame.as_ref()
    }

    fn save_screenshot(&mut self, frame: &Framebuffer) {
        self.screenshots_taken += 1;
        let path = screenshot::numbered_path(&self.screenshot_dir, self.screenshots_taken);
        match screenshot::save_png(frame, &path) {
            Ok(()) => info!(path = %path.display(), "saved screenshot"),
            Err(e) => warn!(path = %path.display(), "screenshot failed: {e}"),
        }
    }
}

impl DisplaySink for SdlDisplay<'_> {
    fn write_frame(&mut self, fill: &mut FillFn<'_>) -> Result<(), HarnessError> {
        let wants_screenshot = self.screenshot.replace(false);
        let (width, height) = self.size;
        let fps = &mut self.fps;
        let last_frame = &mut self.last_frame;
        let mut taken = None;

        self.texture
            .with_lock(None, |bytes: &mut [u8], pitch: usize| -> Result<(), HarnessError> {
                fill(bytes, pitch)?;

                if let Some(frame) = last_frame.as_mut() {
                    frame.copy_from_bytes(bytes, pitch);
                }
                if wants_screenshot {
                    let mut frame = Framebuffer::new(width, height);
                    frame.copy_from_bytes(bytes, pitch);
                    taken = Some(frame);
                }

                // Drawn after the copies so screenshots stay clean
                if let Some(fps) = fps.as_mut() {
                    overlay::draw_text(bytes, pitch, fps.tick());
                }
                Ok(())
            })
            .map_err(HarnessError::BufferAcquire)??;

        if let Some(frame) = taken {
            self.save_screenshot(&frame);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), HarnessError> {
        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(HarnessError::Present)?;
        self.canvas.present();
        Ok(())
    }
}
