// src/gui/actions/export.rs
use std::collections::HashMap;
use std::path::PathBuf;

use crate::{
    config::options::{ExportType, TeamFilter},
    core::sanitize::sanitize_team_filename,
    file,
    gui::app::App,
};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let kind = app.current_page_kind();
    let page = app.current_page();
    let export = &app.state.options.export;

    let status_msg = match export.export_type {
        ExportType::SingleFile => {
            if app.table.is_empty() {
                logd!("Export: Clicked, but there's nothing to export");
                s!("Nothing to export")
            } else {
                logf!(
                    "Export: Begin page={:?}, rows={}, type=SingleFile",
                    kind, app.table.nrows()
                );
                match file::write_export_single(export, &app.table.headers, &app.table.rows) {
                    Ok(path) => {
                        logf!("Export: OK count=1 last={}", path.display());
                        format!("Exported 1 file. Last: {}", path.display())
                    }
                    Err(e) => {
                        loge!("Export: Error: {}", e);
                        format!("Export error: {e}")
                    }
                }
            }
        }

        ExportType::PerTeam => {
            // One file per team, each composed with that team's filter —
            // the written table matches what the screen would show.
            let targets: Vec<String> = match &app.state.gui.team_filter {
                TeamFilter::All => app.teams.clone(),
                TeamFilter::One(name) => vec![name.clone()],
            };

            let dir = export.out_path();
            logf!(
                "Export: Begin page={:?}, teams={}, type=PerTeam dir={}",
                kind, targets.len(), dir.display()
            );

            let mut seen: HashMap<String, usize> = HashMap::new();
            let mut written = 0usize;
            let mut last_path: Option<PathBuf> = None;
            let mut first_err: Option<String> = None;

            for (ordinal, team) in targets.iter().enumerate() {
                let mut one_state = app.state.clone();
                one_state.gui.team_filter = TeamFilter::One(team.clone());
                let table = page.compose(&app.raw, &one_state);

                if table.is_empty() {
                    continue;
                }

                let stem = sanitize_team_filename(team, ordinal);
                match file::write_export_team_file(
                    export, &dir, &stem, &mut seen, &table.headers, &table.rows,
                ) {
                    Ok(path) => {
                        written += 1;
                        last_path = Some(path);
                    }
                    Err(e) => {
                        loge!("Export: {} failed: {}", team, e);
                        if first_err.is_none() { first_err = Some(e.to_string()); }
                    }
                }
            }

            match (written, first_err) {
                (0, Some(e)) => format!("Export error: {e}"),
                (0, None) => s!("Nothing to export"),
                (n, _) => {
                    let last = last_path
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    logf!("Export: OK count={} last={}", n, last);
                    format!("Exported {} file(s). Last: {}", n, last)
                }
            }
        }
    };

    app.status(status_msg);
}
