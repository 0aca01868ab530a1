use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use scanline_core::core::AlignMode;
use scanline_cores::registry;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AlignSetting, Config};
use crate::error::FrontendError;
use crate::session::SessionOptions;

mod config;
mod error;
mod input;
mod overlay;
mod screenshot;
mod session;
mod video;

const DEFAULT_CORE: &str = "pattern";
const DEFAULT_SCALE: u32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "scanline",
    version,
    about = "Cycle-level co-simulation harness for VGA-output digital cores"
)]
struct Cli {
    /// Simulated core to run (see --list-cores).
    core: Option<String>,

    /// Config file (default: <config dir>/scanline/config.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Integer window scale.
    #[arg(long)]
    scale: Option<u32>,

    /// Which sync edge establishes pixel (0,0).
    #[arg(long, value_enum)]
    align: Option<AlignSetting>,

    /// Give up on alignment after this many clock periods.
    #[arg(long)]
    align_limit: Option<u64>,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Stop after this many frames (headless default: 1).
    #[arg(long)]
    frames: Option<u64>,

    /// Save the final frame as PNG.
    #[arg(long)]
    screenshot: Option<PathBuf>,

    /// Draw a frames-per-second readout.
    #[arg(long)]
    show_fps: bool,

    /// List available cores and exit.
    #[arg(long)]
    list_cores: bool,

    /// Log filter, e.g. "debug" or "scanline_core=trace" (overrides RUST_LOG).
    #[arg(long)]
    log_level: Option<String>,
}

fn setup_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), FrontendError> {
    if cli.list_cores {
        for entry in registry::all() {
            println!("{:<10} {}", entry.name, entry.description);
        }
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    let core_name = cli
        .core
        .or(config.core.clone())
        .unwrap_or_else(|| DEFAULT_CORE.to_string());
    let entry = registry::find(&core_name).ok_or_else(|| FrontendError::UnknownCore {
        name: core_name.clone(),
        available: registry::all()
            .iter()
            .map(|e| e.name)
            .collect::<Vec<_>>()
            .join(", "),
    })?;

    let options = SessionOptions {
        geometry: config.geometry.apply(entry.geometry),
        align: cli
            .align
            .or(config.align)
            .map(AlignMode::from)
            .unwrap_or_default(),
        align_limit: cli.align_limit.or(config.align_limit),
        scale: cli.scale.or(config.scale).unwrap_or(DEFAULT_SCALE).max(1),
        show_fps: cli.show_fps || config.show_fps.unwrap_or(false),
        frames: cli.frames,
        screenshot: cli.screenshot,
    };
    info!(core = entry.name, geometry = ?options.geometry, align = ?options.align, "starting");

    let core = (entry.create)();
    let frames = if cli.headless {
        session::run_headless(core, &options)?
    } else {
        let mapper = input::key_mapper(&config.key_bindings()?)?;
        session::run_windowed(core, mapper, &options)?
    };

    info!(frames, "done");
    Ok(())
}
