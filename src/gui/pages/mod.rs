// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, present::TableData};
use super::app::App;

pub mod county;
pub mod home;
pub mod map;

/// One dashboard page. Pages are stateless; everything they need comes from
/// `App` and is recomputed on every frame from the read-only dataset.
pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;

    fn title(&self) -> &'static str { self.kind().title() }

    /// Draw the whole page body into the central panel.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// The page's tabular view, if it has one (used by Copy/Export).
    fn table(&self, _app: &App) -> Option<TableData> { None }

    /// Default export file name; `None` hides the Copy/Export bar.
    fn export_filename(&self) -> Option<&'static str> { None }
}
