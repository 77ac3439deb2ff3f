// src/specs/league.rs
//! Fetch *spec* for the league sheet.
//!
//! Purpose:
//! - Pull the roster table (one row per team, plus whatever display
//!   columns the sheet carries) from the `League Table` sheet.
//! - The `Team` column is the roster identifier; every other column is
//!   a display decoration that passes through untouched.
//!
//! Non-Responsibilities (by design):
//! - **No caching / persistence.**
//! - **No standings math** — computed columns come from fixtures, not
//!   from whatever stale numbers the sheet may hold.

use std::error::Error;

use crate::config::consts::LEAGUE_SHEET;
use crate::core::{ gviz, net };
use crate::core::sanitize::normalize_ws;

pub struct LeagueBundle {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

pub fn fetch(sheet_id: &str) -> Result<LeagueBundle, Box<dyn Error>> {
    let body = net::fetch_sheet(sheet_id, LEAGUE_SHEET)?;
    let table = gviz::parse(&body)?;
    Ok(tidy(table))
}

/// Normalize cells and drop rows with no content at all.
fn tidy(table: gviz::SheetTable) -> LeagueBundle {
    let rows = table.rows.into_iter()
        .map(|row| row.iter().map(|c| normalize_ws(c)).collect::<Vec<_>>())
        .filter(|row: &Vec<String>| row.iter().any(|c| !c.is_empty()))
        .collect();

    LeagueBundle {
        headers: Some(table.headers),
        rows,
    }
}
