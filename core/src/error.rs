use crate::core::align::AlignMode;

/// Errors raised by the harness engine.
///
/// Any of these ends the run. There are no retries.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("invalid frame geometry: {0}")]
    InvalidGeometry(String),

    #[error("failed to acquire display buffer: {0}")]
    BufferAcquire(String),

    #[error("unexpected display pitch: expected {expected} bytes per row, got {actual}")]
    PitchMismatch { expected: usize, actual: usize },

    #[error("display buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("failed to present frame: {0}")]
    Present(String),

    #[error("failed to initialize display: {0}")]
    DisplayInit(String),

    #[error("failed to initialize input: {0}")]
    InputInit(String),

    #[error("no {mode:?} sync edge within {periods} clock periods")]
    AlignmentTimeout { mode: AlignMode, periods: u64 },
}
