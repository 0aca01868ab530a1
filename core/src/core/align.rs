//! Sync phase alignment.
//!
//! The core's pixel counters are not observable, so phase is recovered from
//! the sync outputs alone: step until the sync pulse ends, then skip the
//! back porch. After [`align`] returns, the next [`ClockDriver::double_step`]
//! lands on pixel (0,0).
//!
//! Alignment runs once, after [`ClockDriver::reset`] and before the first
//! frame. The raster loop's fixed iteration count is what keeps the phase
//! locked from then on; there is no resynchronization.

use tracing::info;

use super::clock::ClockDriver;
use super::signals::SimulatedCore;
use crate::error::HarnessError;
use crate::video::geometry::FrameGeometry;

/// Which sync edge establishes pixel (0,0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignMode {
    /// End of an hsync pulse plus the horizontal back porch: start of a line.
    #[default]
    Line,
    /// End of a vsync pulse plus the vertical back porch: start of a frame.
    Frame,
}

/// Optional cap on the periods spent waiting for a sync edge.
///
/// `None` waits forever, which is only sound if the core is guaranteed to
/// eventually toggle the sync output.
pub type AlignLimit = Option<u64>;

/// Result of a completed alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Periods stepped until the deassertion edge was observed.
    pub edge_periods: u64,
    /// Periods stepped to skip the back porch.
    pub porch_periods: u64,
}

impl Alignment {
    pub fn total_periods(&self) -> u64 {
        self.edge_periods + self.porch_periods
    }
}

/// Align to the end of a sync pulse according to `mode`.
///
/// In [`AlignMode::Line`] the driver steps while hsync is active and stops at
/// the first period where it reads inactive; if hsync is already inactive on
/// entry no periods are spent before the porch. [`AlignMode::Frame`] first
/// steps until vsync asserts, since a core is rarely inside its vertical
/// pulse when reset is released.
pub fn align<C: SimulatedCore>(
    driver: &mut ClockDriver<C>,
    geometry: &FrameGeometry,
    mode: AlignMode,
    limit: AlignLimit,
) -> Result<Alignment, HarnessError> {
    let mut periods = 0u64;
    let completed = match mode {
        AlignMode::Line => step_while(driver, |core| core.hsync(), limit, &mut periods),
        AlignMode::Frame => {
            step_while(driver, |core| !core.vsync(), limit, &mut periods)
                && step_while(driver, |core| core.vsync(), limit, &mut periods)
        }
    };
    if !completed {
        return Err(HarnessError::AlignmentTimeout {
            mode,
            periods: limit.unwrap_or_default(),
        });
    }

    let porch = match mode {
        AlignMode::Line => u64::from(geometry.h_back_porch),
        AlignMode::Frame => u64::from(geometry.v_back_porch),
    };
    for _ in 0..porch {
        driver.step();
    }

    let alignment = Alignment {
        edge_periods: periods,
        porch_periods: porch,
    };
    info!(
        ?mode,
        edge_periods = periods,
        porch_periods = porch,
        "aligned to sync phase"
    );
    Ok(alignment)
}

/// Step while `condition` holds, counting into `periods`.
///
/// Returns `false` if `limit` periods pass with the condition still true.
fn step_while<C: SimulatedCore>(
    driver: &mut ClockDriver<C>,
    condition: impl Fn(&C) -> bool,
    limit: AlignLimit,
    periods: &mut u64,
) -> bool {
    while condition(driver.core()) {
        if limit.is_some_and(|cap| *periods >= cap) {
            return false;
        }
        driver.step();
        *periods += 1;
    }
    true
}

/// Reset a fresh core and align it, in the only order that is valid.
pub fn bring_up<C: SimulatedCore>(
    core: C,
    geometry: &FrameGeometry,
    mode: AlignMode,
    limit: AlignLimit,
) -> Result<(ClockDriver<C>, Alignment), HarnessError> {
    geometry.validate()?;
    let mut driver = ClockDriver::new(core);
    driver.reset();
    let alignment = align(&mut driver, geometry, mode, limit)?;
    Ok((driver, alignment))
}
