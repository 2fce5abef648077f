// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::ViewportBuilder;
use ga_bridges::{
    config::{consts::LOG_FILE, options::DashboardOptions},
    gui, store,
};

fn main() {
    if let Err(e) = ga_bridges::log::init(LOG_FILE, log::LevelFilter::Debug) {
        eprintln!("Logger not installed: {e}");
    }

    let options = DashboardOptions::resolve(std::env::args_os().nth(1).map(PathBuf::from));

    // Nothing renders without the dataset
    let dataset = match store::load_dataset(&options.data_path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Load failed: {e}");
            eprintln!("Failed to load {}: {e}", options.data_path.display());
            std::process::exit(1);
        }
    };

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Georgia Bridges Data Analysis")
            .with_inner_size(options.window_size),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options, dataset) {
        log::error!("GUI failed: {e}");
        eprintln!("GUI failed: {e}");
        std::process::exit(1);
    }
}
