//! FIFA Player Explorer - Player Search, Leaderboard & Club Rosters
//!
//! A Rust application for browsing a CSV of football player ratings.

mod charts;
mod config;
mod data;
mod gui;
mod view;

use anyhow::{anyhow, Context};
use config::{ExplorerConfig, CONFIG_FILE};
use data::DataLoader;
use eframe::egui;
use gui::ExplorerApp;
use log::info;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ExplorerConfig::load_or_default(Path::new(CONFIG_FILE))
        .context("Failed to read configuration")?;

    // The table is loaded once; a bad data file ends the session here
    let mut loader = DataLoader::new();
    loader
        .load_csv(&config.data_path, &config.load_options())
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;
    info!(
        "Loaded {} rows, {} columns ({:?} variant)",
        loader.get_row_count(),
        loader.get_columns().len(),
        config.variant
    );
    let table = loader.to_table().context("Failed to read player records")?;
    let source = loader
        .get_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("FIFA Player Explorer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "FIFA Player Explorer",
        options,
        Box::new(move |cc| Ok(Box::new(ExplorerApp::new(cc, table, source)))),
    )
    .map_err(|e| anyhow!("GUI error: {}", e))
}
