mod common;

use common::{MockCore, small_geometry};
use scanline_core::core::{AlignMode, ClockDriver, SimulatedCore, align, bring_up};
use scanline_core::error::HarnessError;
use scanline_core::video::FrameGeometry;

#[test]
fn test_line_alignment_consumes_edge_plus_back_porch() {
    for hsync_periods in [1, 7, 96, 311] {
        let geometry = FrameGeometry::VGA_640X480;
        let mut driver = ClockDriver::new(MockCore::with_hsync_for(hsync_periods));

        let alignment = align(&mut driver, &geometry, AlignMode::Line, None).unwrap();

        assert_eq!(alignment.edge_periods, hsync_periods);
        assert_eq!(alignment.porch_periods, 95);
        assert_eq!(driver.periods(), hsync_periods + 95);
    }
}

#[test]
fn test_line_alignment_is_deterministic() {
    let geometry = small_geometry();
    let run = || {
        let mut driver = ClockDriver::new(MockCore::with_hsync_for(42));
        align(&mut driver, &geometry, AlignMode::Line, None).unwrap();
        driver.periods()
    };
    assert_eq!(run(), run());
    assert_eq!(run(), 42 + 3);
}

#[test]
fn test_line_alignment_with_hsync_inactive_on_entry_only_skips_porch() {
    let geometry = small_geometry();
    let mut driver = ClockDriver::new(MockCore::new().hsync_during(10, 25));

    let alignment = align(&mut driver, &geometry, AlignMode::Line, None).unwrap();

    assert_eq!(alignment.edge_periods, 0);
    assert_eq!(alignment.porch_periods, 3);
    assert_eq!(driver.periods(), 3);
    assert!(!driver.core().hsync());
}

#[test]
fn test_frame_alignment_waits_for_vsync_pulse() {
    let geometry = small_geometry();
    let mut driver = ClockDriver::new(MockCore::new().vsync_during(10, 25));

    let alignment = align(&mut driver, &geometry, AlignMode::Frame, None).unwrap();

    // Inactive until edge 10, active until edge 25
    assert_eq!(alignment.edge_periods, 25);
    assert_eq!(driver.periods(), 25 + 5);
    assert!(!driver.core().vsync());
}

#[test]
fn test_frame_alignment_uses_vsync_and_vertical_porch() {
    let geometry = small_geometry();
    let core = MockCore::new().hsync_during(0, 2).vsync_during(0, 40);
    let mut driver = ClockDriver::new(core);

    let alignment = align(&mut driver, &geometry, AlignMode::Frame, None).unwrap();

    assert_eq!(alignment.edge_periods, 40);
    assert_eq!(alignment.porch_periods, 5);
    assert_eq!(alignment.total_periods(), 45);
    assert_eq!(driver.periods(), 45);
}

#[test]
fn test_alignment_limit_reports_timeout() {
    let geometry = small_geometry();
    let mut driver = ClockDriver::new(MockCore::with_hsync_for(u64::MAX));

    let err = align(&mut driver, &geometry, AlignMode::Line, Some(1_000)).unwrap_err();

    assert!(matches!(
        err,
        HarnessError::AlignmentTimeout {
            mode: AlignMode::Line,
            periods: 1_000
        }
    ));
    assert_eq!(driver.periods(), 1_000);
}

#[test]
fn test_alignment_limit_not_hit_when_edge_arrives_in_time() {
    let geometry = small_geometry();
    let mut driver = ClockDriver::new(MockCore::with_hsync_for(999));

    let alignment = align(&mut driver, &geometry, AlignMode::Line, Some(1_000)).unwrap();
    assert_eq!(alignment.edge_periods, 999);
}

#[test]
fn test_bring_up_resets_before_aligning() {
    let geometry = small_geometry();
    // Reset takes edges 1 and 2; hsync is held through edge 9
    let (driver, alignment) =
        bring_up(MockCore::with_hsync_for(10), &geometry, AlignMode::Line, None).unwrap();

    assert_eq!(driver.core().reset_edges, 2);
    assert_eq!(alignment.edge_periods, 8);
    assert_eq!(driver.periods(), 2 + 8 + 3);
}

#[test]
fn test_bring_up_rejects_invalid_geometry() {
    let geometry = FrameGeometry {
        visible_width: 11,
        ..small_geometry()
    };
    let result = bring_up(MockCore::new(), &geometry, AlignMode::Line, None);
    assert!(matches!(result, Err(HarnessError::InvalidGeometry(_))));
}
