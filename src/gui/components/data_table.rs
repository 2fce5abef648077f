// src/gui/components/data_table.rs
//
// Read-only grid for a TableData. First column left-aligned (names),
// the rest centered (numbers).

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::present::TableData;

pub fn draw(ui: &mut egui::Ui, id: &str, table: &TableData) {
    let cols = table.ncols();
    if cols == 0 || table.is_empty() {
        ui.label(RichText::new("No rows").weak());
        return;
    }

    let mut builder = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(180.0).resizable(true));
    for _ in 1..cols {
        builder = builder.column(Column::auto().at_least(120.0));
    }

    builder
        .header(22.0, |mut header| {
            for h in &table.headers {
                header.col(|ui| { ui.label(RichText::new(h).strong()); });
            }
        })
        .body(|body| {
            body.rows(20.0, table.nrows(), |mut row| {
                let Some(cells) = table.rows.get(row.index()) else { return };
                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        if ci == 0 {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });
}
