//! The per-frame presentation loop and the boundaries it talks to.

pub mod frame_loop;
pub mod memory;

use std::hash::Hash;

use crate::error::HarnessError;

pub use frame_loop::{FrameReport, LoopState, Presenter};
pub use memory::{MemoryDisplay, ScriptedInput};

/// Fills a locked display buffer given its bytes and row pitch.
pub type FillFn<'f> = dyn FnMut(&mut [u8], usize) -> Result<(), HarnessError> + 'f;

/// Where completed frames go.
pub trait DisplaySink {
    /// Lock the writable buffer, run `fill` over it, then unlock it.
    ///
    /// The buffer is packed ARGB8888 and is only ever handed out whole; a
    /// frame is never presented half written.
    fn write_frame(&mut self, fill: &mut FillFn<'_>) -> Result<(), HarnessError>;

    /// Show the most recently written frame.
    fn present(&mut self) -> Result<(), HarnessError>;
}

/// A user input event in terms of the source's own key type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent<K> {
    KeyDown(K),
    KeyUp(K),
    Quit,
}

/// Non-blocking source of input events, polled once per frame.
pub trait InputSource {
    type Key: Copy + Eq + Hash;

    /// Drain all pending events. Must not wait for new ones.
    fn poll(&mut self) -> Vec<InputEvent<Self::Key>>;
}
