//! Wires a simulated core to a display and input source and runs it.
//!
//! The core is reset and aligned before any window is created, matching the
//! order the raster loop depends on.

use std::path::PathBuf;
use std::rc::Rc;

use scanline_core::HarnessError;
use scanline_core::core::{AlignLimit, AlignMode, SimulatedCore, bring_up};
use scanline_core::input::InputMapper;
use scanline_core::present::{MemoryDisplay, Presenter, ScriptedInput};
use scanline_core::video::FrameGeometry;
use sdl2::keyboard::Keycode;
use tracing::info;

use crate::error::FrontendError;
use crate::input::{ScreenshotRequest, SdlInput};
use crate::screenshot;
use crate::video::{SinkOptions, Video};

const WINDOW_TITLE: &str = "scanline";

pub struct SessionOptions {
    pub geometry: FrameGeometry,
    pub align: AlignMode,
    pub align_limit: AlignLimit,
    pub scale: u32,
    pub show_fps: bool,
    /// Stop after this many frames.
    pub frames: Option<u64>,
    /// Save the final frame here when the loop ends.
    pub screenshot: Option<PathBuf>,
}

/// Run in an SDL window until the user quits.
pub fn run_windowed(
    core: Box<dyn SimulatedCore>,
    mapper: InputMapper<Keycode>,
    options: &SessionOptions,
) -> Result<u64, FrontendError> {
    let geometry = options.geometry;
    let (driver, _) = bring_up(core, &geometry, options.align, options.align_limit)?;

    let sdl_context = sdl2::init().map_err(HarnessError::DisplayInit)?;
    let sdl_video = sdl_context.video().map_err(HarnessError::DisplayInit)?;
    let mut video = Video::new(
        &sdl_video,
        WINDOW_TITLE,
        geometry.visible_width,
        geometry.visible_height,
        options.scale,
    )?;
    let event_pump = sdl_context.event_pump().map_err(HarnessError::InputInit)?;

    let screenshot_request: ScreenshotRequest = Rc::default();
    let input = SdlInput::new(event_pump, Rc::clone(&screenshot_request));
    let display = video.sink(
        &geometry,
        SinkOptions {
            show_fps: options.show_fps,
            screenshot: screenshot_request,
            screenshot_dir: std::env::current_dir()?,
            keep_last_frame: options.screenshot.is_some(),
        },
    )?;

    let mut presenter =
        Presenter::new(driver, geometry, display, input, mapper)?.with_frame_limit(options.frames);
    let frames = presenter.run()?;

    if let (Some(path), Some(frame)) = (&options.screenshot, presenter.display().last_frame()) {
        screenshot::save_png(frame, path)?;
        info!(path = %path.display(), "saved final frame");
    }
    Ok(frames)
}

/// Run without a window: capture `frames` frames (default one) into memory.
pub fn run_headless(
    core: Box<dyn SimulatedCore>,
    options: &SessionOptions,
) -> Result<u64, FrontendError> {
    let geometry = options.geometry;
    let (driver, _) = bring_up(core, &geometry, options.align, options.align_limit)?;

    let mut presenter = Presenter::new(
        driver,
        geometry,
        MemoryDisplay::new(&geometry),
        ScriptedInput::<Keycode>::empty(),
        InputMapper::new(),
    )?
    .with_frame_limit(Some(options.frames.unwrap_or(1)));
    let frames = presenter.run()?;

    if let Some(path) = &options.screenshot {
        screenshot::save_png(presenter.display().frame(), path)?;
        info!(path = %path.display(), "saved final frame");
    }
    Ok(frames)
}
