// src/gui/components/action_buttons.rs
//
// Fetch button + page controls + the status line.

use eframe::egui;

use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let fetch = ui.add_enabled(!app.running, egui::Button::new("Fetch"));
        if fetch.clicked() {
            actions::fetch(app);
        }

        ui.separator();

        let page = app.current_page();
        if page.draw_controls(ui, &mut app.state) {
            app.rebuild_view();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let status = app.status.lock().unwrap().clone();
            ui.label(status);
        });
    });
}
