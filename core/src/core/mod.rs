pub mod align;
pub mod clock;
pub mod signals;

pub use align::{AlignLimit, AlignMode, Alignment, align, bring_up};
pub use clock::{ClockDriver, PERIODS_PER_PIXEL};
pub use signals::SimulatedCore;
