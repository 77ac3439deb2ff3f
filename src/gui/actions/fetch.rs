// src/gui/actions/fetch.rs
use crate::{
    gui::{app::App, progress::GuiProgress, router},
    progress::Progress,
    store,
};

/// Fetch every page's sheet, merge into canonical data, persist the
/// cache, and rebuild the view. Runs on the UI thread; two sheet
/// requests are short enough that a brief freeze beats threading the
/// whole app state.
pub fn fetch(app: &mut App) {
    app.running = true;
    logf!("Fetch: Begin sheet_id={}", app.state.options.fetch.sheet_id);

    let mut prog = GuiProgress::new(app.status.clone());
    prog.begin(router::all_pages().len());

    let mut first_err: Option<String> = None;

    for page in router::all_pages() {
        let kind = page.kind();

        match page.fetch(&app.state, Some(&mut prog)) {
            Ok(new_ds) => {
                logf!(
                    "Fetch: OK {:?} rows={} headers={}",
                    kind, new_ds.row_count(), new_ds.header_count()
                );

                let entry = app.raw.entry(kind).or_default();
                page.merge(entry, new_ds);

                match store::save_dataset(&kind, entry) {
                    Ok(p) => logf!("Cache: Saved {:?} → {}", kind, p.display()),
                    Err(e) => loge!("Cache: Save failed {:?}: {}", kind, e),
                }

                prog.item_done(kind.stem());
            }
            Err(e) => {
                loge!("Fetch: {:?} failed: {}", kind, e);
                if first_err.is_none() {
                    first_err = Some(e.to_string());
                }
            }
        }
    }

    app.refresh_teams();
    app.rebuild_view();

    match first_err {
        Some(e) => app.status(format!("Error: {e}")),
        None => app.status("Ready"),
    }

    app.running = false;
}
