//! TOML configuration, layered under the command line.
//!
//! Looked up at `--config <path>` if given, otherwise at
//! `<config dir>/scanline/config.toml` if that file exists.
//!
//! ```toml
//! core = "pattern"
//! scale = 2
//! align = "frame"
//! align_limit = 2000000
//!
//! [geometry]
//! h_back_porch = 95
//!
//! [keys]
//! zoom_in = ["PageUp"]
//! zoom_out = ["PageDown"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use scanline_core::core::AlignMode;
use scanline_core::input::Action;
use scanline_core::video::FrameGeometry;
use serde::Deserialize;

use crate::error::FrontendError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub core: Option<String>,
    pub scale: Option<u32>,
    pub align: Option<AlignSetting>,
    pub align_limit: Option<u64>,
    pub show_fps: Option<bool>,
    pub geometry: GeometryOverride,
    /// Action name to SDL key names.
    pub keys: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlignSetting {
    /// Start of a line (end of hsync + horizontal back porch)
    Line,
    /// Start of a frame (end of vsync + vertical back porch)
    Frame,
}

impl From<AlignSetting> for AlignMode {
    fn from(setting: AlignSetting) -> Self {
        match setting {
            AlignSetting::Line => AlignMode::Line,
            AlignSetting::Frame => AlignMode::Frame,
        }
    }
}

/// Per-field overrides of a core's default geometry.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryOverride {
    pub total_width: Option<u32>,
    pub total_height: Option<u32>,
    pub visible_width: Option<u32>,
    pub visible_height: Option<u32>,
    pub h_back_porch: Option<u32>,
    pub v_back_porch: Option<u32>,
}

impl GeometryOverride {
    pub fn apply(&self, base: FrameGeometry) -> FrameGeometry {
        FrameGeometry {
            total_width: self.total_width.unwrap_or(base.total_width),
            total_height: self.total_height.unwrap_or(base.total_height),
            visible_width: self.visible_width.unwrap_or(base.visible_width),
            visible_height: self.visible_height.unwrap_or(base.visible_height),
            h_back_porch: self.h_back_porch.unwrap_or(base.h_back_porch),
            v_back_porch: self.v_back_porch.unwrap_or(base.v_back_porch),
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self, FrontendError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from `path`, or from the default location if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, FrontendError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let text = std::fs::read_to_string(&path).map_err(|source| FrontendError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::parse(&text)
    }

    /// Key bindings from `[keys]`, with action names resolved.
    pub fn key_bindings(&self) -> Result<Vec<(Action, &str)>, FrontendError> {
        let mut bindings = Vec::new();
        for (name, keys) in &self.keys {
            let action =
                Action::from_name(name).ok_or_else(|| FrontendError::UnknownAction(name.clone()))?;
            bindings.extend(keys.iter().map(|key| (action, key.as_str())));
        }
        Ok(bindings)
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scanline").join("config.toml"))
}
