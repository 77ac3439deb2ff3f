// tests/league_table.rs
//
// Display-table composition: roster + fixtures in, rendered rows out.
//
use league_dash::config::options::TeamFilter;
use league_dash::league::fixture;
use league_dash::league::table::{
    fixtures_table, league_table, FixturesView, LeagueView,
};
use league_dash::store::DataSet;

fn ds(headers: &[&str], rows: &[&[&str]]) -> DataSet {
    DataSet {
        headers: Some(headers.iter().map(|h| h.to_string()).collect()),
        rows: rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

fn fixtures_ds() -> DataSet {
    ds(
        &["Matchday", "Home Team", "Home Goals", "Away Goals", "Away Team"],
        &[
            &["1", "Alpha", "2", "1", "Beta"],
            &["1", "Gamma", "0", "0", "Alpha"],
            &["2", "Beta", "", "", "Gamma"], // future
        ],
    )
}

#[test]
fn league_rows_follow_sheet_order_with_display_index() {
    let league = ds(&["Team"], &[&["Gamma"], &["Alpha"], &["Beta"]]);
    let fixtures = fixture::from_dataset(&fixtures_ds());

    let (headers, rows) = league_table(&league, &fixtures, &LeagueView::default());

    assert_eq!(headers[..2], ["Pos".to_string(), "Team".to_string()]);
    // Sheet order Gamma, Alpha, Beta — Pos is just the row index.
    assert_eq!(rows[0][..2], ["1".to_string(), "Gamma".to_string()]);
    assert_eq!(rows[1][..2], ["2".to_string(), "Alpha".to_string()]);
    assert_eq!(rows[2][..2], ["3".to_string(), "Beta".to_string()]);

    // Alpha: one win, one draw.
    let alpha = &rows[1];
    assert_eq!(&alpha[2..10], &["2", "1", "1", "0", "2", "1", "1", "4"]);
}

#[test]
fn sorting_by_points_reassigns_positions() {
    let league = ds(&["Team"], &[&["Gamma"], &["Alpha"], &["Beta"]]);
    let fixtures = fixture::from_dataset(&fixtures_ds());

    let view = LeagueView { sort_by_points: true, ..LeagueView::default() };
    let (_, rows) = league_table(&league, &fixtures, &view);

    assert_eq!(rows[0][..2], ["1".to_string(), "Alpha".to_string()]); // 4 pts
    assert_eq!(rows[1][..2], ["2".to_string(), "Gamma".to_string()]); // 1 pt, GD 0
    assert_eq!(rows[2][..2], ["3".to_string(), "Beta".to_string()]);  // 0 pts
}

#[test]
fn filtered_view_still_numbers_from_one() {
    let league = ds(&["Team"], &[&["Gamma"], &["Alpha"], &["Beta"]]);
    let fixtures = fixture::from_dataset(&fixtures_ds());

    let view = LeagueView { filter: TeamFilter::One("Beta".into()), ..LeagueView::default() };
    let (_, rows) = league_table(&league, &fixtures, &view);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][..2], ["1".to_string(), "Beta".to_string()]);
}

#[test]
fn form_column_is_appended_when_asked() {
    let league = ds(&["Team"], &[&["Alpha"]]);
    let fixtures = fixture::from_dataset(&fixtures_ds());

    let view = LeagueView { show_form: true, ..LeagueView::default() };
    let (headers, rows) = league_table(&league, &fixtures, &view);

    assert_eq!(headers.last().map(String::as_str), Some("Form"));
    // Both Alpha games share matchday 1; the tie policy yields "DW".
    assert_eq!(rows[0].last().map(String::as_str), Some("DW"));
}

#[test]
fn extra_sheet_columns_pass_through() {
    let league = ds(
        &["Team", "Manager"],
        &[&["Alpha", "A. Coach"], &["Beta", "B. Boss"]],
    );
    let fixtures = fixture::from_dataset(&fixtures_ds());

    let (headers, rows) = league_table(&league, &fixtures, &LeagueView::default());

    assert_eq!(headers.last().map(String::as_str), Some("Manager"));
    assert_eq!(rows[0].last().map(String::as_str), Some("A. Coach"));
    assert_eq!(rows[1].last().map(String::as_str), Some("B. Boss"));
}

#[test]
fn empty_league_sheet_falls_back_to_fixture_teams() {
    let league = DataSet::default();
    let fixtures = fixture::from_dataset(&fixtures_ds());

    let (_, rows) = league_table(&league, &fixtures, &LeagueView::default());

    // Sorted fallback roster: Alpha, Beta, Gamma.
    let teams: Vec<&str> = rows.iter().map(|r| r[1].as_str()).collect();
    assert_eq!(teams, ["Alpha", "Beta", "Gamma"]);
}

#[test]
fn fixtures_table_filters_by_either_side() {
    let fixtures = fixture::from_dataset(&fixtures_ds());

    let view = FixturesView {
        filter: TeamFilter::One("Gamma".into()),
        ..FixturesView::default()
    };
    let (headers, rows) = fixtures_table(&fixtures, &view);

    assert_eq!(headers.len(), 5);
    assert_eq!(rows.len(), 2); // Gamma home vs Alpha, away vs Beta
    assert_eq!(rows[0], ["1", "Gamma", "0", "0", "Alpha"]);
    assert_eq!(rows[1], ["2", "Beta", "", "", "Gamma"]);
}

#[test]
fn score_columns_can_be_hidden() {
    let fixtures = fixture::from_dataset(&fixtures_ds());

    let view = FixturesView { show_scores: false, filter: TeamFilter::All };
    let (headers, rows) = fixtures_table(&fixtures, &view);

    assert_eq!(headers, ["Matchday", "Home team", "Away team"]);
    assert_eq!(rows[0], ["1", "Alpha", "Beta"]);
}
