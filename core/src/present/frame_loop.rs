use tracing::{debug, error, info, warn};

use super::{DisplaySink, InputEvent, InputSource};
use crate::core::clock::ClockDriver;
use crate::core::signals::SimulatedCore;
use crate::error::HarnessError;
use crate::input::InputMapper;
use crate::video::framebuffer::PitchedFrame;
use crate::video::geometry::FrameGeometry;
use crate::video::raster::capture_frame;

/// Presentation loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Quitting,
}

/// Outcome of one loop iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// 1-based number of the frame just presented.
    pub frame: u64,
    pub state: LoopState,
    /// Core error status read after the frame. Zero means no error.
    pub error_status: u32,
}

/// Runs the core one frame per iteration and hands each frame to a display.
///
/// The driver passed in must already be reset and phase aligned.
pub struct Presenter<C, D, I: InputSource> {
    driver: ClockDriver<C>,
    geometry: FrameGeometry,
    display: D,
    input: I,
    mapper: InputMapper<I::Key>,
    state: LoopState,
    frames: u64,
    error_frames: u64,
    frame_limit: Option<u64>,
}

impl<C, D, I> Presenter<C, D, I>
where
    C: SimulatedCore,
    D: DisplaySink,
    I: InputSource,
{
    pub fn new(
        driver: ClockDriver<C>,
        geometry: FrameGeometry,
        display: D,
        input: I,
        mapper: InputMapper<I::Key>,
    ) -> Result<Self, HarnessError> {
        geometry.validate()?;
        Ok(Self {
            driver,
            geometry,
            display,
            input,
            mapper,
            state: LoopState::Running,
            frames: 0,
            error_frames: 0,
            frame_limit: None,
        })
    }

    /// Stop after `frames` frames even without a quit request.
    pub fn with_frame_limit(mut self, frames: Option<u64>) -> Self {
        self.frame_limit = frames;
        self
    }

    /// Run one iteration: input, capture, present, error check.
    ///
    /// A quit request still lets this frame complete. Display failures move
    /// the loop to [`LoopState::Quitting`] and are returned as errors.
    pub fn run_frame(&mut self) -> Result<FrameReport, HarnessError> {
        for event in self.input.poll() {
            match event {
                InputEvent::Quit => self.state = LoopState::Quitting,
                InputEvent::KeyDown(key) => self.mapper.key_down(key),
                InputEvent::KeyUp(key) => self.mapper.key_up(key),
            }
        }

        self.driver.core_mut().set_buttons(self.mapper.mask());

        let driver = &mut self.driver;
        let geometry = &self.geometry;
        let mut fill = |bytes: &mut [u8], pitch: usize| -> Result<(), HarnessError> {
            let mut frame = PitchedFrame::new(bytes, pitch, geometry)?;
            capture_frame(driver, geometry, &mut frame);
            Ok(())
        };
        let presented = match self.display.write_frame(&mut fill) {
            Ok(()) => self.display.present(),
            Err(e) => Err(e),
        };
        if let Err(e) = presented {
            self.state = LoopState::Quitting;
            error!("{e}");
            return Err(e);
        }

        self.frames += 1;
        debug!(frame = self.frames, periods = self.driver.periods(), "frame presented");

        let error_status = self.driver.core().error_status();
        if error_status != 0 {
            self.error_frames += 1;
            warn!(frame = self.frames, "core error_status = {error_status:#x}");
        }

        if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
            self.state = LoopState::Quitting;
        }

        Ok(FrameReport {
            frame: self.frames,
            state: self.state,
            error_status,
        })
    }

    /// Iterate until quit or a fatal error. Returns the number of frames
    /// presented.
    pub fn run(&mut self) -> Result<u64, HarnessError> {
        info!(
            width = self.geometry.visible_width,
            height = self.geometry.visible_height,
            "presentation loop started"
        );
        while self.state == LoopState::Running {
            self.run_frame()?;
        }
        info!(
            frames = self.frames,
            error_frames = self.error_frames,
            "presentation loop stopped"
        );
        Ok(self.frames)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames after which the core reported a non-zero error status.
    pub fn error_frames(&self) -> u64 {
        self.error_frames
    }

    pub fn driver(&self) -> &ClockDriver<C> {
        &self.driver
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn mapper(&self) -> &InputMapper<I::Key> {
        &self.mapper
    }
}
