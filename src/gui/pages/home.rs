// src/gui/pages/home.rs
use std::path::Path;

use eframe::egui::{self, RichText};

use crate::{
    analysis::{summarize, yearly_counts},
    config::{
        consts::{BANNER_CAPTION, OTHER_MATERIAL_LABEL},
        options::PageKind::{self, *},
    },
    data::{CategoryField, YearField},
    gui::{
        app::{App, Banner},
        components::charts,
    },
    present::{bar_chart, pie_slices},
};

use super::Page;

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

impl Page for HomePage {
    fn kind(&self) -> PageKind { Home }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Georgia Bridges Data Analysis");
        draw_banner(ui, app);
        ui.separator();

        let opts = &app.state.options;

        // Material mix
        let summary = summarize(&app.dataset, CategoryField::MainSpanMaterial, opts.other_threshold_pct);
        let slices = pie_slices(&summary, OTHER_MATERIAL_LABEL);
        ui.label(RichText::new("Distribution of Bridges by Main Span Material").strong());
        charts::pie(ui, &slices);

        ui.separator();

        // Reconstructions per year
        let years = &opts.reconstructed_years;
        let counts = yearly_counts(&app.dataset, YearField::Reconstructed, *years.start(), *years.end());
        let chart = bar_chart(&counts, opts.bar_y_max);
        ui.label(
            RichText::new(format!("Number of Reconstructed Bridges Since {}", years.start())).strong(),
        );
        charts::bars(ui, &chart, "Reconstruction Year", "Number of Bridges");
    }
}

fn draw_banner(ui: &mut egui::Ui, app: &mut App) {
    if matches!(app.banner, Banner::NotLoaded) {
        app.banner = match app.state.options.banner_path.as_deref() {
            Some(path) => match load_banner(path) {
                Ok(img) => {
                    logd!("Home: banner loaded from {}", path.display());
                    Banner::Ready(ui.ctx().load_texture("home_banner", img, Default::default()))
                }
                Err(e) => {
                    logd!("Home: no banner at {} ({})", path.display(), e);
                    Banner::Missing
                }
            },
            None => Banner::Missing,
        };
    }

    if let Banner::Ready(tex) = &app.banner {
        ui.add(egui::Image::new(tex).max_width(ui.available_width()));
        ui.label(RichText::new(BANNER_CAPTION).italics().small());
    }
}

fn load_banner(path: &Path) -> Result<egui::ColorImage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
