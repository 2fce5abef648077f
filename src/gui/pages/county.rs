// src/gui/pages/county.rs
use eframe::egui::{self, RichText};

use crate::{
    analysis::mean_length_by_county,
    config::options::PageKind::{self, *},
    gui::{
        app::App,
        components::{charts, data_table},
    },
    present::{county_lines, pivot_table, TableData},
};

use super::Page;

pub struct CountyPage;
pub static PAGE: CountyPage = CountyPage;

impl Page for CountyPage {
    fn kind(&self) -> PageKind { CountyInformation }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("County Specific Information");

        let selected = &app.state.gui.selected_counties;
        if selected.is_empty() {
            ui.label("Select County or Counties in the left panel.");
        }

        let built_from = app.state.options.built_from;
        let series = county_lines(&app.dataset, selected, built_from);
        ui.label(
            RichText::new(format!("Number of Bridges Built Each Year Per County ({built_from} - Present)"))
                .strong(),
        );
        charts::lines(ui, &series, "Year Built", "Number of Bridges", "County");

        ui.separator();

        if let Some(table) = self.table(app) {
            data_table::draw(ui, "county_pivot", &table);
        }
    }

    fn table(&self, app: &App) -> Option<TableData> {
        let agg = mean_length_by_county(&app.dataset, &app.state.gui.selected_counties);
        Some(pivot_table(&agg))
    }

    fn export_filename(&self) -> Option<&'static str> { Some("county_lengths.csv") }
}
