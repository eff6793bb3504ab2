#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global config directory, set from command line
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Document to open on startup
static INITIAL_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Get the config directory (set from command line or default)
pub fn get_config_dir() -> PathBuf {
    CONFIG_DIR.get().cloned().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rmgstudio")
    })
}

/// Get the document passed on the command line, if any
pub fn get_initial_file() -> Option<PathBuf> {
    INITIAL_FILE.get().cloned()
}

/// RMG Studio - template generation config editor
#[derive(Parser, Debug)]
#[command(name = "rmgstudio-desktop")]
#[command(about = "RMG Studio - Visual editor for random map template configs")]
struct Args {
    /// Template to open
    file: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for settings.json (default: platform config dir)
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    rmgstudio_core::logging::init(args.verbose);

    if let Some(dir) = args.config_dir {
        let _ = CONFIG_DIR.set(dir);
    }
    if let Some(file) = args.file {
        let _ = INITIAL_FILE.set(file);
    }

    tracing::info!(config_dir = ?get_config_dir(), file = ?get_initial_file(), "Starting RMG Studio");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("RMG Studio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
