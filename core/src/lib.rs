pub mod core;
pub mod error;
pub mod input;
pub mod present;
pub mod video;

pub use error::HarnessError;

pub mod prelude {
    pub use crate::core::{
        AlignLimit, AlignMode, Alignment, ClockDriver, SimulatedCore, align, bring_up,
    };
    pub use crate::error::HarnessError;
    pub use crate::input::{Action, ButtonMask, InputMapper};
    pub use crate::present::{
        DisplaySink, FrameReport, InputEvent, InputSource, LoopState, MemoryDisplay, Presenter,
        ScriptedInput,
    };
    pub use crate::video::{FrameGeometry, Framebuffer, PitchedFrame, PixelTarget};
}
