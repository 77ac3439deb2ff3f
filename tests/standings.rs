// tests/standings.rs
//
// Aggregation scenarios and the arithmetic invariants every record
// must hold, whatever the fixture set looks like.
//
use league_dash::league::fixture::{Fixture, Matchday};
use league_dash::league::standings::{compute, rank_by_points, TeamRecord};

fn fx(md: &str, home: &str, away: &str, hg: Option<u32>, ag: Option<u32>) -> Fixture {
    Fixture {
        matchday: Matchday::parse(md),
        home: home.into(),
        away: away.into(),
        home_goals: hg,
        away_goals: ag,
    }
}

fn by_team<'a>(records: &'a [TeamRecord], team: &str) -> &'a TeamRecord {
    records.iter().find(|r| r.team == team).expect("team missing")
}

#[test]
fn home_win_counts_both_sides() {
    let roster = ["A", "B"];
    let fixtures = [fx("1", "A", "B", Some(2), Some(1))];
    let records = compute(roster, &fixtures);

    let a = by_team(&records, "A");
    assert_eq!((a.played, a.won, a.drawn, a.lost), (1, 1, 0, 0));
    assert_eq!((a.goals_for, a.goals_against), (2, 1));
    assert_eq!(a.goal_difference, 1);
    assert_eq!(a.points, 3);

    let b = by_team(&records, "B");
    assert_eq!((b.played, b.won, b.drawn, b.lost), (1, 0, 0, 1));
    assert_eq!((b.goals_for, b.goals_against), (1, 2));
    assert_eq!(b.goal_difference, -1);
    assert_eq!(b.points, 0);
}

#[test]
fn draw_gives_both_one_point() {
    let records = compute(["A", "B"], &[fx("1", "A", "B", Some(1), Some(1))]);

    for team in ["A", "B"] {
        let r = by_team(&records, team);
        assert_eq!((r.played, r.won, r.drawn, r.lost), (1, 0, 1, 0));
        assert_eq!(r.points, 1);
        assert_eq!(r.goal_difference, 0);
    }
}

#[test]
fn unplayed_fixture_contributes_nothing() {
    let fixtures = [
        fx("1", "A", "B", None, None),
        fx("2", "A", "B", Some(3), None),
        fx("3", "A", "B", None, Some(3)),
    ];
    let records = compute(["A", "B"], &fixtures);

    for r in &records {
        assert_eq!(*r, TeamRecord { team: r.team.clone(), ..TeamRecord::default() });
    }
}

#[test]
fn fixture_with_unknown_team_is_skipped_whole() {
    // "C" is not in the roster; neither side of that fixture counts.
    let fixtures = [
        fx("1", "A", "C", Some(4), Some(0)),
        fx("2", "A", "B", Some(1), Some(0)),
    ];
    let records = compute(["A", "B"], &fixtures);

    let a = by_team(&records, "A");
    assert_eq!(a.played, 1);
    assert_eq!(a.goals_for, 1);
    assert_eq!(a.points, 3);
}

#[test]
fn roster_order_preserved_and_no_rank_assigned() {
    // B tops the table on points but the output stays in roster order.
    let fixtures = [fx("1", "B", "A", Some(5), Some(0))];
    let records = compute(["A", "B", "C"], &fixtures);

    let names: Vec<&str> = records.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn duplicate_roster_entries_first_occurrence_wins() {
    let fixtures = [fx("1", "A", "B", Some(2), Some(0))];
    let records = compute(["A", "B", "A"], &fixtures);

    assert_eq!(records.len(), 2);
    assert_eq!(by_team(&records, "A").won, 1); // counted once
}

#[test]
fn empty_inputs_never_fail() {
    assert!(compute([], &[]).is_empty());

    let records = compute(["A"], &[]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].played, 0);
    assert_eq!(records[0].points, 0);
}

#[test]
fn invariants_hold_over_a_mixed_season() {
    let roster = ["A", "B", "C", "D"];
    let fixtures = [
        fx("1", "A", "B", Some(2), Some(1)),
        fx("1", "C", "D", Some(0), Some(0)),
        fx("2", "B", "C", Some(1), Some(3)),
        fx("2", "D", "A", Some(2), Some(2)),
        fx("3", "A", "C", None, None),          // not played yet
        fx("3", "D", "B", Some(1), Some(0)),
        fx("x", "B", "D", Some(4), Some(4)),    // odd matchday, still played
    ];
    let records = compute(roster, &fixtures);

    for r in &records {
        assert_eq!(r.played, r.won + r.drawn + r.lost, "{}", r.team);
        assert_eq!(r.points, 3 * r.won + r.drawn, "{}", r.team);
        assert_eq!(
            r.goal_difference,
            r.goals_for as i64 - r.goals_against as i64,
            "{}", r.team
        );
    }

    // Decisive completed fixtures: A>B, B<C, D>B = 3 wins in total.
    let total_wins: u32 = records.iter().map(|r| r.won).sum();
    assert_eq!(total_wins, 3);

    // Drawn completed fixtures: C-D, D-A, B-D = 3; each bumps two teams.
    let total_drawn: u32 = records.iter().map(|r| r.drawn).sum();
    assert_eq!(total_drawn, 6);
}

#[test]
fn repeated_calls_are_identical() {
    let roster = ["A", "B"];
    let fixtures = [
        fx("1", "A", "B", Some(2), Some(1)),
        fx("2", "B", "A", Some(0), Some(0)),
    ];
    let first = compute(roster, &fixtures);
    let second = compute(roster, &fixtures);
    assert_eq!(first, second);
}

#[test]
fn rank_by_points_orders_with_tiebreaks() {
    let fixtures = [
        fx("1", "A", "B", Some(0), Some(3)), // B wins big
        fx("2", "C", "A", Some(1), Some(0)), // C wins small
        fx("3", "B", "C", Some(0), Some(0)), // B and C draw
    ];
    let mut records = compute(["A", "B", "C"], &fixtures);
    rank_by_points(&mut records);

    // B: 4 pts GD+3, C: 4 pts GD+1, A: 0 pts.
    let names: Vec<&str> = records.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(names, ["B", "C", "A"]);
}
