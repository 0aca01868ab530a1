use crate::input::ButtonMask;

/// Signal-level interface to a simulated synchronous core.
///
/// The harness treats the core as opaque: it only ever drives the named
/// inputs, calls [`eval`](SimulatedCore::eval), and samples the named
/// outputs. Any backend that honours this contract (a Rust model, an FFI
/// wrapper around an HDL simulator, a test double) is substitutable.
///
/// Inputs written through the setters take effect on the next `eval()`.
/// Outputs reflect the state after the most recent `eval()`.
pub trait SimulatedCore {
    /// Drive the clock input. `true` is the high level.
    fn set_clock(&mut self, high: bool);

    /// Drive the reset input. `true` holds the core in reset, regardless of
    /// whether the underlying pin is active-low.
    fn set_reset(&mut self, active: bool);

    /// Drive the button input register.
    fn set_buttons(&mut self, mask: ButtonMask);

    /// The button mask currently applied to the core's input.
    fn buttons(&self) -> ButtonMask;

    /// Propagate inputs to outputs for the current clock level.
    fn eval(&mut self);

    /// Colour channel outputs `(r, g, b)`, each in the native 0..=7 range.
    fn rgb(&self) -> (u8, u8, u8);

    /// Horizontal sync status. `true` while the sync pulse is active.
    fn hsync(&self) -> bool;

    /// Vertical sync status. `true` while the sync pulse is active.
    fn vsync(&self) -> bool;

    /// Sticky error register. Zero means no error. The harness never clears it.
    fn error_status(&self) -> u32;
}

impl<T: SimulatedCore + ?Sized> SimulatedCore for Box<T> {
    fn set_clock(&mut self, high: bool) {
        (**self).set_clock(high)
    }

    fn set_reset(&mut self, active: bool) {
        (**self).set_reset(active)
    }

    fn set_buttons(&mut self, mask: ButtonMask) {
        (**self).set_buttons(mask)
    }

    fn buttons(&self) -> ButtonMask {
        (**self).buttons()
    }

    fn eval(&mut self) {
        (**self).eval()
    }

    fn rgb(&self) -> (u8, u8, u8) {
        (**self).rgb()
    }

    fn hsync(&self) -> bool {
        (**self).hsync()
    }

    fn vsync(&self) -> bool {
        (**self).vsync()
    }

    fn error_status(&self) -> u32 {
        (**self).error_status()
    }
}
