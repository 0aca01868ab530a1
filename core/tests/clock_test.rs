mod common;

use common::MockCore;
use scanline_core::core::ClockDriver;

#[test]
fn test_step_is_one_rising_edge_and_two_evals() {
    let mut driver = ClockDriver::new(MockCore::new());
    driver.step();

    assert_eq!(driver.periods(), 1);
    assert_eq!(driver.core().rising_edges, 1);
    assert_eq!(driver.core().evals, 2);
}

#[test]
fn test_double_step_is_two_periods() {
    let mut driver = ClockDriver::new(MockCore::new());
    driver.double_step();
    driver.double_step();

    assert_eq!(driver.periods(), 4);
    assert_eq!(driver.core().rising_edges, 4);
    assert_eq!(driver.core().evals, 8);
}

#[test]
fn test_reset_holds_reset_for_two_periods() {
    let mut driver = ClockDriver::new(MockCore::new());
    driver.reset();

    assert_eq!(driver.periods(), 2);
    assert_eq!(driver.core().reset_edges, 2);

    // Reset is released afterwards
    driver.step();
    assert_eq!(driver.core().reset_edges, 2);
    assert_eq!(driver.core().rising_edges, 3);
}
