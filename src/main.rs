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
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Email to sign in with on launch, set from command line
static INITIAL_USER: OnceLock<String> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the email to sign in with on launch (if set via --user)
pub fn get_initial_user() -> Option<String> {
    INITIAL_USER.get().cloned()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mundos")
}

/// Mundos - exercise worlds
#[derive(Parser, Debug)]
#[command(name = "mundos-desktop")]
#[command(about = "Mundos - guided exercise worlds")]
struct Args {
    /// Data directory for preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Start signed in as this email (local session)
    #[arg(short, long)]
    user: Option<String>,

    /// Log filter, e.g. "debug" or "mundos_core=trace" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    let filter = match args.log_level.as_deref() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());
    if let Some(email) = args.user {
        let _ = INITIAL_USER.set(email);
    }

    tracing::info!("Starting Mundos with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Mundos")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
