// src/gui/pages/map.rs
use eframe::egui;

use crate::{
    analysis::top_longest,
    config::options::PageKind::{self, *},
    gui::{
        app::App,
        components::{data_table, scatter_map},
    },
    present::{map_points, map_view, top_table, TableData},
};

use super::Page;

pub struct MapPage;
pub static PAGE: MapPage = MapPage;

impl Page for MapPage {
    fn kind(&self) -> PageKind { BridgeMap }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Map of Top Longest Bridges in Georgia");

        let bounds = app.state.options.top_n_bounds.clone();
        let mut n = app.state.gui.top_n;
        let resp = ui.add(egui::Slider::new(&mut n, bounds).text("Choose Amount of Longest Bridges"));
        if resp.changed() {
            app.state.gui.top_n = app.state.options.clamp_top_n(n);
            logd!("UI: Top-N → {}", app.state.gui.top_n);
        }

        let opts = &app.state.options;
        let sel = top_longest(&app.dataset, app.state.gui.top_n);
        let points = map_points(&sel);
        let view = map_view(&sel, opts.map_zoom);

        scatter_map::draw(ui, &points, view, opts.point_radius_m, &mut app.state.gui.map_pan);

        ui.separator();
        ui.label("Top 10 Info:");
        data_table::draw(ui, "top_bridges", &top_table(&sel, opts.top_table_rows));
    }

    fn table(&self, app: &App) -> Option<TableData> {
        let sel = top_longest(&app.dataset, app.state.gui.top_n);
        Some(top_table(&sel, app.state.options.top_table_rows))
    }

    fn export_filename(&self) -> Option<&'static str> { Some("top_bridges.csv") }
}
