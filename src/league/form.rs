// src/league/form.rs

use std::cmp::Ordering;

use super::fixture::Fixture;

/// How many recent results make up a form summary.
pub const FORM_WINDOW: usize = 5;

/// One completed-match outcome from a given team's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn letter(&self) -> char {
        match self { Outcome::Win => 'W', Outcome::Draw => 'D', Outcome::Loss => 'L' }
    }

    fn classify(own: u32, opp: u32) -> Self {
        match own.cmp(&opp) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }
}

/// Compact "WDLWW" rendering of a form sequence.
pub fn letters(outcomes: &[Outcome]) -> String {
    outcomes.iter().map(Outcome::letter).collect()
}

/// A team's last [`FORM_WINDOW`] completed results, oldest-first.
pub fn recent(team: &str, fixtures: &[Fixture]) -> Vec<Outcome> {
    recent_n(team, fixtures, FORM_WINDOW)
}

/// Same, with an explicit window size.
///
/// Scheduled fixtures contribute nothing (SkipIncomplete). Ordering is
/// by matchday, most recent first; matchdays that don't parse as
/// integers count as least recent, and ties keep input order (stable
/// sort), so the result is deterministic for any input.
pub fn recent_n(team: &str, fixtures: &[Fixture], n: usize) -> Vec<Outcome> {
    let mut played: Vec<(Option<i64>, Outcome)> = fixtures.iter()
        .filter_map(|fx| {
            let (own, opp) = fx.goals_for(team)?;
            Some((fx.matchday.key(), Outcome::classify(own, opp)))
        })
        .collect();

    // Most recent first; unparseable matchdays last.
    played.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let mut out: Vec<Outcome> = played.into_iter()
        .take(n)
        .map(|(_, o)| o)
        .collect();
    out.reverse(); // chronological, oldest-first
    out
}
