use scanline_core::core::{AlignMode, bring_up};
use scanline_core::input::{Action, InputMapper};
use scanline_core::present::{InputEvent, LoopState, MemoryDisplay, Presenter, ScriptedInput};
use scanline_cores::pattern::{self, ERR_ZOOM_IN_LIMIT, MAX_ZOOM, SCROLL_STEP};
use scanline_cores::timing::VgaTiming;

fn mapper() -> InputMapper<Action> {
    let mut mapper = InputMapper::new();
    for action in Action::ALL {
        mapper.bind(action, action);
    }
    mapper
}

fn presenter(
    script: Vec<Vec<InputEvent<Action>>>,
) -> Presenter<pattern::PatternCore, MemoryDisplay, ScriptedInput<Action>> {
    let geometry = VgaTiming::VGA_640X480.geometry();
    let (driver, _) = bring_up(pattern::new_core(), &geometry, AlignMode::Frame, None).unwrap();
    Presenter::new(
        driver,
        geometry,
        MemoryDisplay::new(&geometry),
        ScriptedInput::new(script),
        mapper(),
    )
    .unwrap()
}

#[test]
fn test_held_direction_pans_next_frame() {
    let mut p = presenter(vec![vec![InputEvent::KeyDown(Action::Right)]]);

    // Buttons are latched at vsync, after the visible lines of this frame
    p.run_frame().unwrap();
    let first = p.display().frame().clone();
    assert_eq!(p.driver().core().scene().scroll(), (SCROLL_STEP, 0));

    p.run_frame().unwrap();
    let second = p.display().frame();

    let step = SCROLL_STEP as u32;
    for y in [0, 100, 479] {
        for x in 0..640 - 2 * step {
            assert_eq!(second.pixel(x, y), first.pixel(x + step, y), "({x}, {y})");
        }
    }
}

#[test]
fn test_zoom_limit_error_is_reported_and_loop_continues() {
    let mut p = presenter(vec![vec![InputEvent::KeyDown(Action::ZoomIn)]]).with_frame_limit(Some(6));

    let mut statuses = Vec::new();
    while p.state() == LoopState::Running {
        statuses.push(p.run_frame().unwrap().error_status);
    }

    // Zoom starts at 2, so the first frames still have room to zoom in
    let room = usize::from(MAX_ZOOM - 2);
    assert_eq!(statuses.len(), 6);
    assert!(statuses[..room].iter().all(|&s| s == 0));
    assert!(statuses[room..].iter().all(|&s| s == ERR_ZOOM_IN_LIMIT));
    assert_eq!(p.error_frames(), (6 - room) as u64);
    assert_eq!(p.display().presented(), 6);
}

#[test]
fn test_idle_frames_are_identical() {
    let mut p = presenter(vec![]);
    p.run_frame().unwrap();
    let first = p.display().frame().clone();
    p.run_frame().unwrap();
    assert_eq!(p.display().frame(), &first);
}
