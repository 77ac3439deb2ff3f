// src/league/fixture.rs

// Typed parse boundary between raw sheet rows and the computations.
// Downstream code never sees raw strings for goals or matchdays.

use crate::core::sanitize::normalize_ws;
use crate::store::DataSet;

/// Ordering key for a fixture. Keeps the raw cell text for display and
/// an integer key for ordering; rows whose matchday doesn't parse sort
/// after every parseable one (treated as least recent), keeping their
/// relative order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchday {
    raw: String,
    key: Option<i64>,
}

impl Matchday {
    pub fn parse(raw: &str) -> Self {
        let raw = normalize_ws(raw);
        let key = raw.parse::<i64>().ok();
        Self { raw, key }
    }

    pub fn text(&self) -> &str { &self.raw }
    pub fn key(&self) -> Option<i64> { self.key }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureStatus {
    /// Both goal values present and parseable.
    Completed,
    /// Not yet played (or goals unusable) — contributes no statistics.
    Scheduled,
}

/// One scheduled or played match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub matchday: Matchday,
    pub home: String,
    pub away: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
}

impl Fixture {
    pub fn status(&self) -> FixtureStatus {
        match (self.home_goals, self.away_goals) {
            (Some(_), Some(_)) => FixtureStatus::Completed,
            _ => FixtureStatus::Scheduled,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status() == FixtureStatus::Completed
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    /// (own, opponent) goals from `team`'s perspective.
    /// None when the fixture isn't completed or doesn't involve the team.
    pub fn goals_for(&self, team: &str) -> Option<(u32, u32)> {
        let (hg, ag) = (self.home_goals?, self.away_goals?);
        if self.home == team {
            Some((hg, ag))
        } else if self.away == team {
            Some((ag, hg))
        } else {
            None
        }
    }
}

/* ---------------- Parsing from sheet rows ---------------- */

const MATCHDAY_COLS: [&str; 2] = ["Matchday", "Week"];
const HOME_TEAM_COLS: [&str; 2] = ["Home Team", "Home team"];
const AWAY_TEAM_COLS: [&str; 2] = ["Away Team", "Away team"];
const HOME_GOAL_COLS: [&str; 3] = ["Home Goals", "Home Score", "Home"];
const AWAY_GOAL_COLS: [&str; 3] = ["Away Goals", "Away Score", "Away"];

/// Resolved column positions in a fixtures dataset.
#[derive(Clone, Copy, Debug)]
pub struct FixtureCols {
    pub matchday: usize,
    pub home: usize,
    pub away: usize,
    pub home_goals: Option<usize>,
    pub away_goals: Option<usize>,
}

fn find_col(ds: &DataSet, names: &[&str]) -> Option<usize> {
    names.iter().find_map(|n| ds.col_index(n))
}

/// Locate the fixture columns by header label (a couple of spellings
/// are tolerated). None when the dataset isn't a fixtures table.
pub fn columns(ds: &DataSet) -> Option<FixtureCols> {
    Some(FixtureCols {
        matchday: find_col(ds, &MATCHDAY_COLS)?,
        home: find_col(ds, &HOME_TEAM_COLS)?,
        away: find_col(ds, &AWAY_TEAM_COLS)?,
        home_goals: find_col(ds, &HOME_GOAL_COLS),
        away_goals: find_col(ds, &AWAY_GOAL_COLS),
    })
}

fn parse_goals(cell: Option<&String>) -> Option<u32> {
    cell.and_then(|c| c.trim().parse::<u32>().ok())
}

/// Parse a fixtures dataset into typed values.
///
/// Rows missing either team name are dropped here, as are rows where
/// both sides name the same team. Unusable goal cells survive as
/// `None` — the fixture stays visible as scheduled.
pub fn from_dataset(ds: &DataSet) -> Vec<Fixture> {
    let Some(cols) = columns(ds) else { return Vec::new(); };

    let mut out = Vec::with_capacity(ds.rows.len());
    for row in &ds.rows {
        let home = row.get(cols.home).map(|c| normalize_ws(c)).unwrap_or_default();
        let away = row.get(cols.away).map(|c| normalize_ws(c)).unwrap_or_default();
        if home.is_empty() || away.is_empty() || home == away {
            continue;
        }

        out.push(Fixture {
            matchday: Matchday::parse(row.get(cols.matchday).map(String::as_str).unwrap_or("")),
            home,
            away,
            home_goals: cols.home_goals.and_then(|ix| parse_goals(row.get(ix))),
            away_goals: cols.away_goals.and_then(|ix| parse_goals(row.get(ix))),
        });
    }
    out
}
