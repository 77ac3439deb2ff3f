// tests/export_format.rs
//
// CSV/TSV formatting and export path helpers.
//
use std::collections::HashMap;
use std::path::Path;

use league_dash::core::sanitize::sanitize_team_filename;
use league_dash::csv::{parse_rows, to_export_string};
use league_dash::file::resolve_team_filename;

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn export_string_with_and_without_headers() {
    let headers = Some(vec!["Team".to_string(), "Pts".to_string()]);
    let body = rows(&[&["Alpha", "10"], &["Beta", "7"]]);

    let with = to_export_string(&headers, &body, true, ',');
    assert_eq!(with, "Team,Pts\nAlpha,10\nBeta,7\n");

    let without = to_export_string(&headers, &body, false, ',');
    assert_eq!(without, "Alpha,10\nBeta,7\n");
}

#[test]
fn tsv_uses_tabs() {
    let body = rows(&[&["Alpha FC", "10"]]);
    let out = to_export_string(&None, &body, true, '\t');
    assert_eq!(out, "Alpha FC\t10\n");
}

#[test]
fn fields_with_separators_get_quoted() {
    let body = rows(&[&["Sporting, FC", "say \"hi\""]]);
    let out = to_export_string(&None, &body, false, ',');
    assert_eq!(out, "\"Sporting, FC\",\"say \"\"hi\"\"\"\n");

    // And the parser reads its own output back.
    let parsed = parse_rows(&out, ',');
    assert_eq!(parsed, rows(&[&["Sporting, FC", "say \"hi\""]]));
}

#[test]
fn parse_skips_blank_lines_and_handles_crlf() {
    let parsed = parse_rows("a,b\r\n\r\nc,d\n", ',');
    assert_eq!(parsed, rows(&[&["a", "b"], &["c", "d"]]));
}

#[test]
fn parse_flushes_final_unterminated_row() {
    let parsed = parse_rows("a,b\nc,d", ',');
    assert_eq!(parsed, rows(&[&["a", "b"], &["c", "d"]]));
}

#[test]
fn team_filenames_are_sanitized() {
    assert_eq!(sanitize_team_filename("Alpha FC", 0), "Alpha_FC");
    assert_eq!(sanitize_team_filename("St. Mary's XI", 0), "St_Marys_XI");
    assert_eq!(sanitize_team_filename("  ", 4), "team_4");
}

#[test]
fn duplicate_stems_get_numbered_within_a_run() {
    let dir = Path::new("out");
    let mut seen: HashMap<String, usize> = HashMap::new();

    let first = resolve_team_filename(dir, "Alpha_FC", &mut seen, "csv");
    let second = resolve_team_filename(dir, "Alpha_FC", &mut seen, "csv");
    let other = resolve_team_filename(dir, "Beta_Town", &mut seen, "csv");

    assert_eq!(first, Path::new("out").join("Alpha_FC.csv"));
    assert_eq!(second, Path::new("out").join("Alpha_FC (2).csv"));
    assert_eq!(other, Path::new("out").join("Beta_Town.csv"));
}
