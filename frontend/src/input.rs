use std::cell::Cell;
use std::rc::Rc;

use scanline_core::input::{Action, InputMapper};
use scanline_core::present::{InputEvent, InputSource};
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::error::FrontendError;

/// Set by the input source when the user asks for a screenshot; consumed by
/// the display when it next writes a frame.
pub type ScreenshotRequest = Rc<Cell<bool>>;

/// Key bindings used when the config has none for an action.
pub fn default_bindings() -> Vec<(Keycode, Action)> {
    vec![
        (Keycode::Up, Action::Up),
        (Keycode::Down, Action::Down),
        (Keycode::Right, Action::Right),
        (Keycode::Left, Action::Left),
        (Keycode::Plus, Action::ZoomIn),
        (Keycode::Equals, Action::ZoomIn),
        (Keycode::KpPlus, Action::ZoomIn),
        (Keycode::Minus, Action::ZoomOut),
        (Keycode::KpMinus, Action::ZoomOut),
    ]
}

/// Build the input mapper from the defaults and config overrides.
///
/// Any action named in the config loses all of its default keys.
pub fn key_mapper(overrides: &[(Action, &str)]) -> Result<InputMapper<Keycode>, FrontendError> {
    let mut mapper = InputMapper::new();

    for (key, action) in default_bindings() {
        if !overrides.iter().any(|(a, _)| *a == action) {
            mapper.bind(key, action);
        }
    }
    for &(action, name) in overrides {
        let key = Keycode::from_name(name).ok_or_else(|| FrontendError::UnknownKey(name.into()))?;
        mapper.bind(key, action);
    }

    Ok(mapper)
}

/// SDL event pump as a harness input source.
///
/// Escape and window close request quit; F12 requests a screenshot.
pub struct SdlInput {
    pump: EventPump,
    screenshot: ScreenshotRequest,
}

impl SdlInput {
    pub fn new(pump: EventPump, screenshot: ScreenshotRequest) -> Self {
        Self { pump, screenshot }
    }
}

impl InputSource for SdlInput {
    type Key = Keycode;

    fn poll(&mut self) -> Vec<InputEvent<Keycode>> {
        let mut events = Vec::new();

        for event in self.pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(InputEvent::Quit),

                Event::KeyDown {
                    keycode: Some(Keycode::F12),
                    repeat: false,
                    ..
                } => self.screenshot.set(true),

                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => events.push(InputEvent::KeyDown(key)),

                Event::KeyUp {
                    keycode: Some(key), ..
                } => events.push(InputEvent::KeyUp(key)),

                _ => {}
            }
        }

        events
    }
}
