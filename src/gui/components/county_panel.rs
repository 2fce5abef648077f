// src/gui/components/county_panel.rs
//
// County multi-select. Click picks one county, ctrl-click toggles, shift-click
// selects a range from the last clicked row. Selection order is kept so the
// line chart legend follows the order counties were picked in.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Select County or Counties");

    let mut changed = false;

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_counties = app.counties.clone();
            changed = true;
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_counties.clear();
            changed = true;
        }
    });

    ui.label(format!("{} selected", app.state.gui.selected_counties.len()));
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("county_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for (idx, name) in app.counties.iter().enumerate() {
                let sel = &mut app.state.gui.selected_counties;
                let is_selected = sel.contains(name);
                let resp = ui.selectable_label(is_selected, name);
                if !resp.clicked() { continue; }

                let (ctrl, shift) = ui.input(|i| (i.modifiers.ctrl, i.modifiers.shift));
                if shift {
                    if let Some(last) = app.state.gui.last_clicked {
                        let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                        if !ctrl { sel.clear(); }
                        for c in &app.counties[lo..=hi] {
                            if !sel.contains(c) { sel.push(c.clone()); }
                        }
                    } else {
                        sel.clear();
                        sel.push(name.clone());
                    }
                } else if ctrl {
                    if is_selected { sel.retain(|c| c != name); } else { sel.push(name.clone()); }
                } else {
                    sel.clear();
                    sel.push(name.clone());
                }
                app.state.gui.last_clicked = Some(idx);
                changed = true;
            }
        });

    if changed {
        let n = app.state.gui.selected_counties.len();
        app.status(format!("Selection: {n} county(ies)"));
        logf!("UI: County selection changed ({n}): {:?}", app.state.gui.selected_counties);
    }
}
