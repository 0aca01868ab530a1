use scanline_core::core::{AlignMode, bring_up};
use scanline_core::video::{Framebuffer, PixelTarget, capture_frame, compose_argb};
use scanline_cores::bars::{self, ColorBars};
use scanline_cores::timing::VgaTiming;
use scanline_cores::vga::Scene;

fn expected_frame() -> Framebuffer {
    let timing = VgaTiming::VGA_640X480;
    let scene = ColorBars::new(&timing);
    let mut fb = Framebuffer::new(timing.h_active, timing.v_active);
    for y in 0..timing.v_active {
        for x in 0..timing.h_active {
            let (r, g, b) = scene.pixel(x, y);
            fb.put(x, y, compose_argb(r, g, b));
        }
    }
    fb
}

#[test]
fn test_frame_alignment_captures_exact_frame() {
    let geometry = VgaTiming::VGA_640X480.geometry();
    let (mut driver, alignment) =
        bring_up(bars::new_core(), &geometry, AlignMode::Frame, None).unwrap();

    // Out of reset at (656, 524): finish that line, then run through the
    // vsync pulse on lines 490 and 491
    assert_eq!(alignment.edge_periods, (800 - 656) * 2 + 492 * 800 * 2);

    let mut fb = Framebuffer::for_geometry(&geometry);
    capture_frame(&mut driver, &geometry, &mut fb);
    assert_eq!(fb, expected_frame());

    // Phase holds for the next frame
    capture_frame(&mut driver, &geometry, &mut fb);
    assert_eq!(fb, expected_frame());
}

#[test]
fn test_default_alignment_captures_exact_frame() {
    let geometry = VgaTiming::VGA_640X480.geometry();
    let (mut driver, alignment) =
        bring_up(bars::new_core(), &geometry, AlignMode::default(), None).unwrap();

    // Reset leaves the core inside the hsync pulse of the last line
    assert_eq!(alignment.edge_periods, 96 * 2);
    let raster = driver.core().raster();
    assert_eq!((raster.x(), raster.y()), (799, 524));

    let mut fb = Framebuffer::for_geometry(&geometry);
    capture_frame(&mut driver, &geometry, &mut fb);
    assert_eq!(fb, expected_frame());
    assert_eq!(fb.pixel(639, 479), 0xFFFF_FFFF);
}

#[test]
fn test_top_left_is_white_and_bottom_left_is_black() {
    let geometry = VgaTiming::VGA_640X480.geometry();
    let (mut driver, _) = bring_up(bars::new_core(), &geometry, AlignMode::Frame, None).unwrap();
    let mut fb = Framebuffer::for_geometry(&geometry);
    capture_frame(&mut driver, &geometry, &mut fb);

    assert_eq!(fb.pixel(0, 0), 0xFFFF_FFFF);
    assert_eq!(fb.pixel(639, 0), 0xFF00_0000);
    assert_eq!(fb.pixel(0, 479), 0xFF00_0000);
    assert_eq!(fb.pixel(639, 479), 0xFFFF_FFFF);
}
