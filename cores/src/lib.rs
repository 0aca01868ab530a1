pub mod bars;
pub mod pattern;
pub mod registry;
pub mod timing;
pub mod vga;

pub use bars::BarsCore;
pub use pattern::PatternCore;
pub use timing::VgaTiming;
pub use vga::{Scene, VgaCore};
