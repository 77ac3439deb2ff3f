// src/gui/pages/league.rs
use std::error::Error;

use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::fetch;
use crate::league::fixture;
use crate::league::table::{ self, LeagueView };
use crate::progress::Progress;
use crate::store::DataSet;

use super::{ Page, RawStore };
use crate::gui::table_model::TableData;

pub struct LeaguePage;

pub static PAGE: LeaguePage = LeaguePage;

const HEADERS: [&str; 10] = table::LEAGUE_HEADERS;

impl Page for LeaguePage {
    fn label(&self) -> &'static str { "League" }
    fn kind(&self) -> PageKind { PageKind::League }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        // Pos, Team, P, W, D, L, GF, GA, GD, Pts
        Some(&[36, 200, 36, 36, 36, 36, 44, 44, 44, 48])
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= ui
                .checkbox(&mut state.gui.league_sort_by_points, "Sort by points")
                .changed();
            changed |= ui
                .checkbox(&mut state.gui.league_show_form, "Show form")
                .changed();
        });
        changed
    }

    fn fetch(
        &self,
        state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>> {
        fetch::collect_league(&state.options.fetch, progress)
    }

    /// Standings are derived, never displayed from the sheet: the
    /// league sheet contributes the roster (and any extra display
    /// columns), the fixtures sheet contributes every number.
    fn compose(&self, raw: &RawStore, state: &AppState) -> TableData {
        let empty = DataSet::default();
        let league = raw.get(&PageKind::League).unwrap_or(&empty);
        let fixtures: Vec<fixture::Fixture> = raw
            .get(&PageKind::Fixtures)
            .map(|ds| fixture::from_dataset(ds))
            .unwrap_or_default();

        let view = LeagueView {
            sort_by_points: state.gui.league_sort_by_points,
            show_form: state.gui.league_show_form,
            filter: state.gui.team_filter.clone(),
        };

        let (headers, rows) = table::league_table(league, &fixtures, &view);
        TableData::with(Some(headers), rows)
    }
}
