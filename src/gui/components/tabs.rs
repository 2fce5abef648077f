// src/gui/components/tabs.rs
//
// Page selector in the left panel. Switching pages only changes which page
// draws next frame; every page recomputes from the dataset.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Select Page");
    ui.add_space(4.0);

    let cur = app.current_page_kind();
    for page in router::all_pages() {
        let selected = page.kind() == cur;
        if ui.selectable_label(selected, page.title()).clicked() && !selected {
            app.set_page(page.kind());
        }
    }
}
