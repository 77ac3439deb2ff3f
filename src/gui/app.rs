// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::PageKind,
        state::AppState,
    },
    league::fixture,
    store,
    teams,
};

use super::{
    pages::{Page, RawStore},
    router,
    table_model::TableData,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "League Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // roster shown in the filter panel
    pub teams: Vec<String>,

    // composed display table for the CURRENT page
    pub table: TableData,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status (fetch/export write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // per-page canonical data
    pub raw: RawStore,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");

        // canonical cache(s) from disk
        let mut raw = RawStore::new();
        for p in router::all_pages() {
            let k = p.kind();
            match store::load_dataset(&k) {
                Ok(ds) => {
                    if ds.rows.is_empty() {
                        logd!("Cache: {:?} is empty, skipping", k);
                        continue;
                    }
                    logf!("Cache: Loaded {:?} (rows={}, headers={})",
                        k, ds.row_count(), ds.header_count());
                    raw.insert(k, ds);
                    status = s!("Loaded local data");
                }
                Err(e) => {
                    logd!("Cache: Missing {:?} ({})", k, e);
                }
            }
        }

        let teams = roster_of(&raw);
        logf!("Init: teams={}, default page={:?}", teams.len(), PageKind::League);

        state.options.export.set_default_dir_for_page(PageKind::League);
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            teams,
            table: TableData::empty(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
            running: false,
            raw,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { router::all_pages()[self.current_index()].kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Recompose the display table for the current page from canonical
    /// data + current state. Cheap enough to run on every change.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        self.table = page.compose(&self.raw, &self.state);

        // Fall back to the page's static headers when there's no data yet.
        if self.table.headers.is_none() {
            self.table.headers = page
                .default_headers()
                .map(|hs| hs.iter().map(|h| s!(*h)).collect());
        }
    }

    /// Refresh the filter roster after canonical data changed.
    pub fn refresh_teams(&mut self) {
        self.teams = roster_of(&self.raw);

        // Drop a filter selection that no longer names a known team.
        if let crate::config::options::TeamFilter::One(name) = &self.state.gui.team_filter {
            if !self.teams.iter().any(|t| t == name) {
                self.state.gui.team_filter = crate::config::options::TeamFilter::All;
            }
        }
    }
}

fn roster_of(raw: &RawStore) -> Vec<String> {
    let empty = store::DataSet::default();
    let league = raw.get(&PageKind::League).unwrap_or(&empty);
    let fixtures = raw.get(&PageKind::Fixtures)
        .map(|ds| fixture::from_dataset(ds))
        .unwrap_or_default();
    teams::roster_or_fallback(league, &fixtures)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("teams")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::action_buttons::draw(ui, self);
            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
