// src/gui/components/export_bar.rs
//
// Copy / Export for the current page's table. Copy puts TSV on the
// clipboard (pastes cleanly into spreadsheets); Export writes CSV.

use eframe::egui;

use crate::{file, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let Some(default_name) = page.export_filename() else { return };

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            match page.table(app) {
                Some(t) if !t.is_empty() => {
                    logf!("Copy: page={:?}, rows={}", page.kind(), t.nrows());
                    ui.ctx().copy_text(t.to_delimited_string(b'\t'));
                    app.status("Copied to clipboard");
                }
                _ => {
                    logd!("Copy: Clicked, but there's nothing to copy");
                    app.status("Nothing to copy");
                }
            }
        }

        ui.label("Output:");
        ui.text_edit_singleline(&mut app.state.gui.export_path_text);

        if ui.button("Export").clicked() {
            let Some(table) = page.table(app) else { return };
            match file::export_table(&table, &app.state.gui.export_path_text, default_name) {
                Ok(path) => app.status(format!("Exported {} rows → {}", table.nrows(), path.display())),
                Err(e) => {
                    loge!("Export: {e}");
                    app.status(format!("Export error: {e}"));
                }
            }
        }
    });
}
