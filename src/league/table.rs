// src/league/table.rs

// Display-table composition shared by the GUI pages and the CLI
// runner: canonical datasets + view options in, headers + string rows
// out. Pure — all the I/O stays with the callers.

use std::collections::HashMap;

use crate::config::options::TeamFilter;
use crate::store::DataSet;
use crate::teams;

use super::fixture::Fixture;
use super::{ form, standings };

pub const LEAGUE_HEADERS: [&str; 10] = [
    "Pos", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts",
];

pub const FORM_HEADER: &str = "Form";

pub const FIXTURE_HEADERS: [&str; 5] = [
    "Matchday", "Home team", "Home", "Away", "Away team",
];

#[derive(Clone, Debug, Default)]
pub struct LeagueView {
    pub sort_by_points: bool,
    pub show_form: bool,
    pub filter: TeamFilter,
}

#[derive(Clone, Debug)]
pub struct FixturesView {
    pub show_scores: bool,
    pub filter: TeamFilter,
}

impl Default for FixturesView {
    fn default() -> Self {
        Self { show_scores: true, filter: TeamFilter::All }
    }
}

/// Build the standings table.
///
/// The league sheet contributes the roster (and any extra display
/// columns, passed through untouched); every number is computed from
/// the fixtures. `Pos` is the display row index — sorting only changes
/// it because it changes the order.
pub fn league_table(
    league: &DataSet,
    fixtures: &[Fixture],
    view: &LeagueView,
) -> (Vec<String>, Vec<Vec<String>>) {
    let roster = teams::roster_or_fallback(league, fixtures);
    let mut records = standings::compute(roster.iter().map(String::as_str), fixtures);
    if view.sort_by_points {
        standings::rank_by_points(&mut records);
    }

    // League-sheet columns that aren't the roster column or one of the
    // computed ones are display decorations and pass through.
    let extra_cols: Vec<usize> = league.headers.as_ref()
        .map(|hs| {
            hs.iter().enumerate()
                .filter(|(_, h)| !LEAGUE_HEADERS.contains(&h.as_str()))
                .map(|(ix, _)| ix)
                .collect()
        })
        .unwrap_or_default();

    let team_col = league.col_index(teams::TEAM_COL);
    let mut sheet_row: HashMap<&str, &Vec<String>> = HashMap::new();
    if let Some(tc) = team_col {
        for row in &league.rows {
            if let Some(name) = row.get(tc) {
                sheet_row.entry(name.as_str()).or_insert(row);
            }
        }
    }

    let mut headers: Vec<String> = LEAGUE_HEADERS.iter().map(|h| s!(*h)).collect();
    if view.show_form {
        headers.push(s!(FORM_HEADER));
    }
    if let Some(hs) = &league.headers {
        for &ix in &extra_cols {
            headers.push(hs[ix].clone());
        }
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len());
    for rec in &records {
        if !view.filter.matches(&rec.team) {
            continue;
        }

        let mut row = vec![
            (rows.len() + 1).to_string(),
            rec.team.clone(),
            rec.played.to_string(),
            rec.won.to_string(),
            rec.drawn.to_string(),
            rec.lost.to_string(),
            rec.goals_for.to_string(),
            rec.goals_against.to_string(),
            rec.goal_difference.to_string(),
            rec.points.to_string(),
        ];

        if view.show_form {
            row.push(form::letters(&form::recent(&rec.team, fixtures)));
        }

        for &ix in &extra_cols {
            let cell = sheet_row.get(rec.team.as_str())
                .and_then(|r| r.get(ix))
                .cloned()
                .unwrap_or_default();
            row.push(cell);
        }

        rows.push(row);
    }

    (headers, rows)
}

/// Build the fixtures table, sheet order preserved.
pub fn fixtures_table(
    fixtures: &[Fixture],
    view: &FixturesView,
) -> (Vec<String>, Vec<Vec<String>>) {
    let headers: Vec<String> = if view.show_scores {
        FIXTURE_HEADERS.iter().map(|h| s!(*h)).collect()
    } else {
        vec![s!("Matchday"), s!("Home team"), s!("Away team")]
    };

    let score = |g: Option<u32>| g.map(|v| v.to_string()).unwrap_or_default();

    let rows: Vec<Vec<String>> = fixtures.iter()
        .filter(|fx| match &view.filter {
            TeamFilter::All => true,
            TeamFilter::One(name) => fx.involves(name),
        })
        .map(|fx| {
            if view.show_scores {
                vec![
                    s!(fx.matchday.text()),
                    fx.home.clone(),
                    score(fx.home_goals),
                    score(fx.away_goals),
                    fx.away.clone(),
                ]
            } else {
                vec![s!(fx.matchday.text()), fx.home.clone(), fx.away.clone()]
            }
        })
        .collect();

    (headers, rows)
}
