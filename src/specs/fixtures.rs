// src/specs/fixtures.rs
//! Fetch *spec* for the fixtures sheet.
//!
//! Columns (stable shape): `Matchday`, `Home Team`, `Home Goals`,
//! `Away Goals`, `Away Team`. Goal cells are blank for future
//! matchdays — those rows are kept (they're real scheduled fixtures),
//! and the typed parse downstream marks them as not completed.

use std::error::Error;

use crate::config::consts::FIXTURE_SHEET;
use crate::core::{ gviz, net };
use crate::core::sanitize::normalize_ws;

pub struct FixturesBundle {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

pub fn fetch(sheet_id: &str) -> Result<FixturesBundle, Box<dyn Error>> {
    let body = net::fetch_sheet(sheet_id, FIXTURE_SHEET)?;
    let table = gviz::parse(&body)?;
    Ok(tidy(table))
}

fn tidy(table: gviz::SheetTable) -> FixturesBundle {
    let rows = table.rows.into_iter()
        .map(|row| row.iter().map(|c| normalize_ws(c)).collect::<Vec<_>>())
        .filter(|row: &Vec<String>| row.iter().any(|c| !c.is_empty()))
        .collect();

    FixturesBundle {
        headers: Some(table.headers),
        rows,
    }
}
