#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};

/// Global launch configuration, set from command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Page shown when the window opens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    #[default]
    Login,
    Project,
    Meta,
    Administrator,
    NewProject,
}

/// Launch settings shared with the UI
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub start: StartPage,
}

/// Get the launch configuration (set from command line or default)
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// SolarOps - Solar project operations dashboard
#[derive(Parser, Debug)]
#[command(name = "solarops-desktop")]
#[command(about = "SolarOps - Solar project operations dashboard")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,

    /// Page to open first
    #[arg(long, value_enum, default_value_t = StartPage::Login)]
    start: StartPage,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = solarops_core::logging::init_logging(&args.log_filter) {
        eprintln!("{e}");
    }

    let _ = CONFIG.set(AppConfig { start: args.start });

    tracing::info!(
        start = ?args.start,
        width = args.width,
        height = args.height,
        "Starting SolarOps"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("SolarOps")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
