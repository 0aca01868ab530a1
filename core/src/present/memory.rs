//! In-memory display and scripted input, for headless runs and tests.

use std::collections::VecDeque;
use std::hash::Hash;

use super::{DisplaySink, FillFn, InputEvent, InputSource};
use crate::error::HarnessError;
use crate::video::framebuffer::Framebuffer;
use crate::video::geometry::FrameGeometry;

/// A display sink backed by a plain byte buffer.
pub struct MemoryDisplay {
    bytes: Vec<u8>,
    pitch: usize,
    front: Framebuffer,
    presented: u64,
    lock_error: Option<String>,
}

impl MemoryDisplay {
    /// A buffer with the pitch the capture loop expects.
    pub fn new(geometry: &FrameGeometry) -> Self {
        Self::with_pitch(geometry, geometry.pitch())
    }

    /// A buffer with an arbitrary row pitch.
    pub fn with_pitch(geometry: &FrameGeometry, pitch: usize) -> Self {
        Self {
            bytes: vec![0; pitch * geometry.visible_height as usize],
            pitch,
            front: Framebuffer::for_geometry(geometry),
            presented: 0,
            lock_error: None,
        }
    }

    /// Make every subsequent buffer acquisition fail with `reason`.
    pub fn fail_lock(&mut self, reason: impl Into<String>) {
        self.lock_error = Some(reason.into());
    }

    /// The most recently presented frame.
    pub fn frame(&self) -> &Framebuffer {
        &self.front
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl DisplaySink for MemoryDisplay {
    fn write_frame(&mut self, fill: &mut FillFn<'_>) -> Result<(), HarnessError> {
        if let Some(reason) = &self.lock_error {
            return Err(HarnessError::BufferAcquire(reason.clone()));
        }
        fill(&mut self.bytes[..], self.pitch)
    }

    fn present(&mut self) -> Result<(), HarnessError> {
        self.front.copy_from_bytes(&self.bytes, self.pitch);
        self.presented += 1;
        Ok(())
    }
}

/// Replays a fixed list of per-frame event batches, then stays silent.
pub struct ScriptedInput<K> {
    frames: VecDeque<Vec<InputEvent<K>>>,
}

impl<K> ScriptedInput<K> {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent<K>>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// An input source that never produces events.
    pub fn empty() -> Self {
        Self {
            frames: VecDeque::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> InputSource for ScriptedInput<K> {
    type Key = K;

    fn poll(&mut self) -> Vec<InputEvent<K>> {
        self.frames.pop_front().unwrap_or_default()
    }
}
