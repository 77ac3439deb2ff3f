// src/gui/pages/fixtures.rs
use std::collections::HashMap;
use std::error::Error;

use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::fetch;
use crate::league::fixture;
use crate::league::table::{ self, FixturesView };
use crate::progress::Progress;
use crate::store::DataSet;

use super::{ Page, RawStore };
use crate::gui::table_model::TableData;

pub struct FixturesPage;

pub static PAGE: FixturesPage = FixturesPage;

const HEADERS: [&str; 5] = table::FIXTURE_HEADERS;

impl Page for FixturesPage {
    fn label(&self) -> &'static str { "Fixtures" }
    fn kind(&self) -> PageKind { PageKind::Fixtures }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        // Matchday, Home team, Home, Away, Away team
        Some(&[70, 200, 52, 52, 200])
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Columns:");
            changed |= ui
                .checkbox(&mut state.gui.fixtures_show_scores, "Include scores")
                .changed();
        });
        changed
    }

    fn fetch(
        &self,
        state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>> {
        fetch::collect_fixtures(&state.options.fetch, progress)
    }

    /// Upsert by (matchday, home, away): a refetch updates played
    /// results in place instead of duplicating rows, and the result is
    /// rebuilt in matchday order (unparseable matchdays last).
    fn merge(&self, into: &mut DataSet, new: DataSet) {
        let Some(cols) = fixture::columns(&new) else {
            // Unrecognizable shape; fall back to wholesale replace.
            *into = new;
            return;
        };

        let key_of = |row: &Vec<String>| -> Option<(String, String, String)> {
            Some((
                row.get(cols.matchday)?.clone(),
                row.get(cols.home)?.clone(),
                row.get(cols.away)?.clone(),
            ))
        };

        let mut by_key: HashMap<(String, String, String), Vec<String>> =
            HashMap::with_capacity(into.rows.len().saturating_add(new.rows.len()));

        // Old rows only count when the cached shape matches the fresh one.
        if into.headers == new.headers {
            for r in std::mem::take(&mut into.rows) {
                if let Some(k) = key_of(&r) {
                    by_key.insert(k, r);
                }
            }
        }
        for r in new.rows {
            if let Some(k) = key_of(&r) {
                by_key.insert(k, r); // replace if exists, insert if not
            }
        }

        let mut rows: Vec<Vec<String>> = by_key.into_values().collect();
        rows.sort_by_key(|r| {
            let md = r.get(cols.matchday).and_then(|s| s.parse::<i64>().ok());
            (md.is_none(), md.unwrap_or(0), r.get(cols.home).cloned().unwrap_or_default())
        });

        into.headers = new.headers;
        into.rows = rows;
    }

    fn compose(&self, raw: &RawStore, state: &AppState) -> TableData {
        let fixtures: Vec<fixture::Fixture> = raw
            .get(&PageKind::Fixtures)
            .map(|ds| fixture::from_dataset(ds))
            .unwrap_or_default();

        let view = FixturesView {
            show_scores: state.gui.fixtures_show_scores,
            filter: state.gui.team_filter.clone(),
        };

        let (headers, rows) = table::fixtures_table(&fixtures, &view);
        TableData::with(Some(headers), rows)
    }
}
