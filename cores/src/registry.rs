//! Core registry for automatic front-end discovery.
//!
//! Each built-in core self-registers via [`inventory::submit!`] with a
//! [`CoreEntry`] containing its CLI name, the frame geometry it is meant to
//! be captured with, and a factory function. The front-end discovers
//! available cores at runtime without any central list.

use scanline_core::core::SimulatedCore;
use scanline_core::video::FrameGeometry;

/// Describes a front-end-capable simulated core.
pub struct CoreEntry {
    /// CLI name used to select this core (e.g., "pattern").
    pub name: &'static str,
    /// One-line description for `--list-cores`.
    pub description: &'static str,
    /// Geometry whose back porches match the core's sync timing.
    pub geometry: FrameGeometry,
    /// Factory: construct a fresh, un-reset core.
    pub create: fn() -> Box<dyn SimulatedCore>,
}

impl CoreEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        geometry: FrameGeometry,
        create: fn() -> Box<dyn SimulatedCore>,
    ) -> Self {
        Self {
            name,
            description,
            geometry,
            create,
        }
    }
}

inventory::collect!(CoreEntry);

/// Return all registered cores, sorted by name.
pub fn all() -> Vec<&'static CoreEntry> {
    let mut entries: Vec<_> = inventory::iter::<CoreEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a core by its CLI name.
pub fn find(name: &str) -> Option<&'static CoreEntry> {
    inventory::iter::<CoreEntry>
        .into_iter()
        .find(|e| e.name == name)
}
