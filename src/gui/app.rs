// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        options::{DashboardOptions, PageKind},
        state::{AppState, GuiState},
    },
    data::Dataset,
};

use super::{pages::Page, router};

pub fn run(
    native: eframe::NativeOptions,
    options: DashboardOptions,
    dataset: Dataset,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Georgia Bridges Data Analysis",
        native,
        Box::new(|_cc| Ok(Box::new(App::new(options, dataset)))),
    )?;
    Ok(())
}

/// Lazily loaded home page image.
#[derive(Default)]
pub enum Banner {
    #[default]
    NotLoaded,
    Missing,
    Ready(egui::TextureHandle),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once at startup, read-only afterwards
    pub dataset: Dataset,
    // distinct county labels for the multi-select, ascending
    pub counties: Vec<String>,

    pub status: String,
    pub banner: Banner,
}

impl App {
    pub fn new(options: DashboardOptions, dataset: Dataset) -> Self {
        let counties = dataset.counties();
        let defaults = dataset.default_counties(options.default_county_count);
        let gui = GuiState::new(&options, defaults);

        logf!(
            "Init: bridges={}, counties={}, default page={:?}",
            dataset.len(),
            counties.len(),
            gui.current_page
        );

        let status = format!("Loaded {} bridges", dataset.len());

        Self {
            state: AppState { options, gui },
            dataset,
            counties,
            status,
            banner: Banner::NotLoaded,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.state.gui.current_page }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(&self.current_page_kind()) }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn set_page(&mut self, kind: PageKind) {
        let prev = self.current_page_kind();
        if prev == kind { return; }
        self.state.gui.current_page = kind;
        logf!("UI: Page switch {:?} → {:?}", prev, kind);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                super::components::tabs::draw(ui, self);
                if self.current_page_kind() == PageKind::CountyInformation {
                    ui.separator();
                    super::components::county_panel::draw(ui, self);
                }
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    let page = self.current_page();
                    page.draw(ui, self);

                    if page.export_filename().is_some() {
                        ui.separator();
                        super::components::export_bar::draw(ui, self);
                    }
                });
        });
    }
}
