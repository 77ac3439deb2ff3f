// src/config/state.rs
use super::options::{ AppOptions, TeamFilter };

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Team filter applied to the current table
    pub team_filter: TeamFilter,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// League page -> order rows by points instead of sheet order
    pub league_sort_by_points: bool,
    /// League page -> append a recent-form column
    pub league_show_form: bool,
    /// Fixtures page -> show/hide the two score columns
    pub fixtures_show_scores: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            team_filter: TeamFilter::All,
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            league_sort_by_points: false,
            league_show_form: true,
            fixtures_show_scores: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
