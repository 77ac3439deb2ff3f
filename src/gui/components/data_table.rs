// src/gui/components/data_table.rs
//
// Draws the live table. Purely a view over the composed TableData;
// widths come from the page's static hints.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let cols = app.table.ncols();
    if cols == 0 {
        ui.label("No data yet — hit Fetch.");
        return;
    }

    let widths: Vec<f32> = match page.preferred_column_widths() {
        Some(ws) => {
            let mut v: Vec<f32> = ws.iter().map(|&w| w as f32).collect();
            v.resize(cols, 90.0); // composed extras beyond the static hints
            v
        }
        None => vec![90.0; cols],
    };

    // Reserve space for scroll bars instead of floating them over rows.
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("data_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("data_table", app.current_page_kind()));

            for w in &widths {
                table = table.column(Column::initial(*w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(22.0, |mut header| {
                    if let Some(hs) = &app.table.headers {
                        for h in hs {
                            header.col(|ui| {
                                ui.label(RichText::new(h).strong());
                            });
                        }
                    }
                })
                .body(|body| {
                    body.rows(18.0, app.table.nrows(), |mut row| {
                        let ix = row.index();
                        if let Some(cells) = app.table.rows.get(ix) {
                            for cell in cells {
                                row.col(|ui| {
                                    ui.label(cell);
                                });
                            }
                        }
                    });
                });
        });
}
