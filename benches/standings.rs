// benches/standings.rs
//
// Folding a synthetic double round-robin season into standings, plus
// the per-team form derivation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use league_dash::league::fixture::{Fixture, Matchday};
use league_dash::league::{form, standings};

fn synthetic_season(teams: usize) -> (Vec<String>, Vec<Fixture>) {
    let roster: Vec<String> = (0..teams).map(|i| format!("Team {i:02}")).collect();

    let mut fixtures = Vec::new();
    let mut matchday = 1u32;
    for round in 0..2 {
        for i in 0..teams {
            for j in 0..teams {
                if i == j { continue; }
                // Deterministic pseudo-scores; a handful left unplayed.
                let played = (i + j + round) % 11 != 0;
                let (hg, ag) = if played {
                    (Some(((i * 7 + j) % 5) as u32), Some(((j * 3 + i) % 4) as u32))
                } else {
                    (None, None)
                };
                fixtures.push(Fixture {
                    matchday: Matchday::parse(&matchday.to_string()),
                    home: roster[i].clone(),
                    away: roster[j].clone(),
                    home_goals: hg,
                    away_goals: ag,
                });
            }
            matchday += 1;
        }
    }
    (roster, fixtures)
}

fn bench_standings(c: &mut Criterion) {
    let (roster, fixtures) = synthetic_season(20);

    c.bench_function("standings 20 teams", |b| {
        b.iter(|| {
            standings::compute(
                roster.iter().map(String::as_str),
                black_box(&fixtures),
            )
        })
    });

    c.bench_function("form per team", |b| {
        b.iter(|| {
            for team in &roster {
                black_box(form::recent(team, &fixtures));
            }
        })
    });
}

criterion_group!(benches, bench_standings);
criterion_main!(benches);
