// src/gui/components/export_bar.rs
//
// Format/headers/output-path controls plus the Export and Copy
// buttons. The text box maps to ExportOptions lazily: it's applied on
// export, not on every keystroke.

use eframe::egui;

use crate::config::options::{ExportFormat, ExportType};
use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let mut format_changed = false;

        ui.label("Format:");
        format_changed |= ui
            .radio_value(&mut export.format, ExportFormat::Csv, "CSV")
            .changed();
        format_changed |= ui
            .radio_value(&mut export.format, ExportFormat::Tsv, "TSV")
            .changed();

        ui.separator();

        ui.checkbox(&mut export.include_headers, "Headers");

        ui.separator();

        let mut per_team = export.export_type == ExportType::PerTeam;
        if ui.checkbox(&mut per_team, "Per team").changed() {
            export.export_type = if per_team { ExportType::PerTeam } else { ExportType::SingleFile };
            format_changed = true;
        }

        // Keep the visible path in sync while the user hasn't edited it.
        if format_changed && !app.out_path_dirty {
            app.out_path_text = export.out_path().to_string_lossy().into_owned();
        }

        ui.label("Out:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.out_path_text).desired_width(260.0),
        );
        if edit.changed() {
            app.out_path_dirty = true;
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
    });
}
