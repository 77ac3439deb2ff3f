// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. On switch,
// the display table is recomposed from canonical data, and the export
// DIR migrates to the new page's default unless the user pointed it
// somewhere else.

use eframe::egui;
use std::path::{Path, PathBuf};

use crate::config::options::{ExportOptions, ExportType};
use crate::gui::{app::App, router};

fn norm(p: &Path) -> PathBuf { p.components().collect() }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.label()).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                let new_kind = page.kind();
                logf!("UI: Tab switch {:?} → {:?}", prev, new_kind);

                app.rebuild_view();

                // If the visible DIR is still the previous tab's
                // default, follow the new tab; user-chosen dirs stay.
                let export = &mut app.state.options.export;
                let prev_default = ExportOptions::default_dir_for(prev);

                let dir_in_text: PathBuf = match export.export_type {
                    ExportType::SingleFile => {
                        let p = Path::new(&app.out_path_text);
                        p.parent().map(|pp| pp.to_path_buf())
                            .unwrap_or_else(|| export.current_dir().to_path_buf())
                    }
                    ExportType::PerTeam => PathBuf::from(&app.out_path_text),
                };

                if norm(&dir_in_text) == norm(&prev_default) {
                    export.set_default_dir_for_page(new_kind);
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                    app.out_path_dirty = false;
                }
            }
        }
    });
}
