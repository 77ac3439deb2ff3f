// src/teams.rs

// Roster facade. The Team column of the league sheet is the roster:
// order matters (it's the display order) and duplicates collapse to
// the first occurrence. When the league sheet has nothing usable, the
// names appearing in fixtures stand in, sorted.

use std::collections::HashSet;

use crate::league::Fixture;
use crate::store::DataSet;

/// Header label of the roster column in the league sheet.
pub const TEAM_COL: &str = "Team";

/// Roster from the league sheet, order preserved, first occurrence wins.
pub fn roster(league: &DataSet) -> Vec<String> {
    let Some(col) = league.col_index(TEAM_COL) else { return Vec::new(); };

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(league.rows.len());
    for row in &league.rows {
        let Some(name) = row.get(col) else { continue; };
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        out.push(name.clone());
    }
    out
}

/// Fallback roster: every name appearing on either side of a fixture,
/// deduplicated and sorted for a predictable filter list.
pub fn from_fixtures(fixtures: &[Fixture]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for fx in fixtures {
        for name in [fx.home.as_str(), fx.away.as_str()] {
            if seen.insert(name) {
                out.push(s!(name));
            }
        }
    }
    out.sort();
    out
}

/// The roster used everywhere: league sheet when it has one, fixture
/// names otherwise.
pub fn roster_or_fallback(league: &DataSet, fixtures: &[Fixture]) -> Vec<String> {
    let r = roster(league);
    if !r.is_empty() { return r; }
    from_fixtures(fixtures)
}
