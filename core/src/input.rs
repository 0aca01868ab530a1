//! Logical input actions and the button register they drive.

use std::collections::HashMap;
use std::hash::Hash;

/// A logical action the core understands. Each owns one bit of the
/// button register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Right,
    Left,
    ZoomIn,
    ZoomOut,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Up,
        Action::Down,
        Action::Right,
        Action::Left,
        Action::ZoomIn,
        Action::ZoomOut,
    ];

    /// Bit index in the button register.
    pub const fn bit(self) -> u8 {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Right => 2,
            Action::Left => 3,
            Action::ZoomIn => 4,
            Action::ZoomOut => 5,
        }
    }

    /// Config-file name of the action (e.g. `"zoom_in"`).
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Right => "right",
            Action::Left => "left",
            Action::ZoomIn => "zoom_in",
            Action::ZoomOut => "zoom_out",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// The core's button input register. Bits 0-5 are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// Mask covering every mapped action bit.
    pub const USED_BITS: u8 = 0x3F;

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::USED_BITS)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_held(self, action: Action) -> bool {
        self.0 & (1 << action.bit()) != 0
    }

    pub fn set(&mut self, action: Action, held: bool) {
        if held {
            self.0 |= 1 << action.bit();
        } else {
            self.0 &= !(1 << action.bit());
        }
    }
}

/// Translates frontend keys into the persistent button mask.
///
/// `K` is whatever key identifier the input source produces; the engine
/// never looks inside it. Keys without a binding are ignored.
pub struct InputMapper<K> {
    bindings: HashMap<K, Action>,
    mask: ButtonMask,
}

impl<K: Copy + Eq + Hash> InputMapper<K> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            mask: ButtonMask::default(),
        }
    }

    /// Bind `key` to `action`. Several keys may drive the same action.
    pub fn bind(&mut self, key: K, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn binding(&self, key: K) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    pub fn key_down(&mut self, key: K) {
        if let Some(action) = self.binding(key) {
            self.mask.set(action, true);
        }
    }

    pub fn key_up(&mut self, key: K) {
        if let Some(action) = self.binding(key) {
            self.mask.set(action, false);
        }
    }

    /// Current mask, to be applied to the core once per frame.
    pub fn mask(&self) -> ButtonMask {
        self.mask
    }
}

impl<K: Copy + Eq + Hash> Default for InputMapper<K> {
    fn default() -> Self {
        Self::new()
    }
}
