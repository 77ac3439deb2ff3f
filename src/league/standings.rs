// src/league/standings.rs

use std::collections::HashMap;

use super::fixture::Fixture;

/// Aggregated statistics for one team, derived from completed fixtures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamRecord {
    fn zeroed(team: &str) -> Self {
        Self { team: s!(team), ..Self::default() }
    }
}

/// Fold `fixtures` into one record per roster team.
///
/// - Output preserves roster order; no rank is assigned here. Callers
///   that want points order apply [`rank_by_points`] afterwards.
/// - Roster names must be unique; on duplicates the first occurrence
///   wins and later ones are ignored.
/// - SkipIncomplete: fixtures without two parseable goal values are
///   skipped. Fixtures involving any team absent from the roster are
///   skipped whole.
pub fn compute<'a, R>(roster: R, fixtures: &[Fixture]) -> Vec<TeamRecord>
where
    R: IntoIterator<Item = &'a str>,
{
    let mut records: Vec<TeamRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for team in roster {
        if team.is_empty() || index.contains_key(team) {
            continue; // first occurrence wins
        }
        index.insert(s!(team), records.len());
        records.push(TeamRecord::zeroed(team));
    }

    for fx in fixtures {
        let (Some(hg), Some(ag)) = (fx.home_goals, fx.away_goals) else {
            continue; // SkipIncomplete
        };
        let (Some(&hi), Some(&ai)) = (index.get(&fx.home), index.get(&fx.away)) else {
            continue; // out-of-roster team
        };

        {
            let home = &mut records[hi];
            home.played += 1;
            home.goals_for += hg;
            home.goals_against += ag;
        }
        {
            let away = &mut records[ai];
            away.played += 1;
            away.goals_for += ag;
            away.goals_against += hg;
        }

        if hg > ag {
            records[hi].won += 1;
            records[hi].points += 3;
            records[ai].lost += 1;
        } else if hg < ag {
            records[ai].won += 1;
            records[ai].points += 3;
            records[hi].lost += 1;
        } else {
            records[hi].drawn += 1;
            records[hi].points += 1;
            records[ai].drawn += 1;
            records[ai].points += 1;
        }
    }

    for rec in &mut records {
        rec.goal_difference = rec.goals_for as i64 - rec.goals_against as i64;
    }

    records
}

/// Points order: points desc, goal difference desc, goals scored desc,
/// then name for a deterministic total order.
pub fn rank_by_points(records: &mut [TeamRecord]) {
    records.sort_by(|a, b| {
        b.points.cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.team.cmp(&b.team))
    });
}
