// src/gui/pages/mod.rs
use std::collections::HashMap;
use std::error::Error;

use eframe::egui;

use crate::{
    config::{ options::PageKind, state::AppState },
    progress::Progress,
    store::DataSet,
};

use super::table_model::TableData;

pub mod fixtures;
pub mod league;

/// Canonical datasets as fetched (or loaded from cache), keyed by page.
/// Pages compose their display tables from this — the league page reads
/// the fixtures dataset too, since standings are derived, not stored.
pub type RawStore = HashMap<PageKind, DataSet>;

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Headers shown before any data exists.
    fn default_headers(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [usize]> { None }

    /// Draw page-specific controls above the table.
    /// Returns true when a control changed in a way that affects the view.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool { false }

    /// Fetch this page's sheet into a canonical dataset.
    fn fetch(
        &self,
        state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>>;

    /// Merge freshly fetched `new` data into `into` (canonical cache).
    /// Default behavior: replace everything.
    fn merge(&self, into: &mut DataSet, new: DataSet) {
        *into = new;
    }

    /// Build the display table from the canonical datasets and the
    /// current state (team filter, page toggles). Owns all derivation:
    /// filtering, computed columns, display ordering.
    fn compose(&self, raw: &RawStore, state: &AppState) -> TableData;
}
