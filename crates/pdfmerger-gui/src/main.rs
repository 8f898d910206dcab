//! pdfmerger - Pick, order and merge PDF files into a single document.
//!
//! Opens the Simple PDF Merger window.

mod about;
mod app;
mod cli;
mod dialogs;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;

use crate::app::MergerApp;
use crate::cli::Cli;
use crate::dialogs::{NativeNotifier, NativePicker};
use pdfmerger::{APP_TITLE, VERSION};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli
        .to_config()
        .map_err(|e| anyhow!(e))
        .context("Invalid command line arguments")?;

    init_logging(config.verbose);
    log::info!("{APP_TITLE} v{VERSION} starting");
    if !config.inputs().is_empty() {
        log::info!("Queued {} file(s) from the command line", config.inputs().len());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([600.0, 400.0])
            .with_min_inner_size([400.0, 250.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MergerApp::new(
                config,
                NativePicker,
                NativeNotifier,
            )))
        }),
    )
    .map_err(|e| anyhow!("Failed to open the main window: {e}"))?;

    log::info!("{APP_TITLE} closed");
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}
