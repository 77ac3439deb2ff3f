// src/gui/components/filter_panel.rs
//
// Renders the left team list and applies the filter directly to `app`.
// Single choice: everything, or one team — same semantics as the
// filter dropdown on the original dashboard.

use eframe::egui;

use crate::config::options::TeamFilter;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Teams");

    let apply_filter_change = |app: &mut App| {
        app.rebuild_view();
        if !app.running {
            match &app.state.gui.team_filter {
                TeamFilter::All => app.status("Filter: all teams"),
                TeamFilter::One(name) => app.status(format!("Filter: {}", name)),
            }
        }
    };

    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.bar_outer_margin = -6.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("filter_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            ui.set_width(w);

            let mut clicked: Option<TeamFilter> = None;

            let all_selected = matches!(app.state.gui.team_filter, TeamFilter::All);
            if ui.selectable_label(all_selected, "All teams").clicked() && !app.running {
                clicked = Some(TeamFilter::All);
            }

            for name in &app.teams {
                let is_selected = matches!(
                    &app.state.gui.team_filter,
                    TeamFilter::One(sel) if sel == name
                );
                if ui.selectable_label(is_selected, name).clicked() && !app.running {
                    // Clicking the active team again returns to "all".
                    clicked = Some(if is_selected {
                        TeamFilter::All
                    } else {
                        TeamFilter::One(name.clone())
                    });
                }
            }

            if let Some(filter) = clicked {
                app.state.gui.team_filter = filter;
                apply_filter_change(app);
                logf!("UI: Filter changed — {:?}", app.state.gui.team_filter);
            }
        });
}
