use std::path::PathBuf;

use scanline_core::HarnessError;

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("unknown action {0:?} in [keys]")]
    UnknownAction(String),

    #[error("unknown key name {0:?}")]
    UnknownKey(String),

    #[error("unknown core {name:?} (available: {available})")]
    UnknownCore { name: String, available: String },

    #[error("failed to write screenshot: {0}")]
    Screenshot(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Harness(#[from] HarnessError),
}
