// tests/gviz.rs
//
// Offline decode of a captured gviz response body.
//
use league_dash::core::gviz;

// Trimmed capture of a real gviz answer: comment preamble, callback
// wrapper, formatted + raw values, a null cell, a short row.
const BODY: &str = r#"/*O_o*/
google.visualization.Query.setResponse({"version":"0.6","reqId":"0","status":"ok","sig":"1234","table":{"cols":[{"id":"A","label":"Matchday","type":"number","pattern":"General"},{"id":"B","label":"Home Team","type":"string"},{"id":"C","label":"Home Goals","type":"number"},{"id":"D","label":"Away Goals","type":"number"},{"id":"E","label":"Away Team","type":"string"}],"rows":[{"c":[{"v":1.0,"f":"1"},{"v":"Alpha FC"},{"v":2.0,"f":"2"},{"v":1.0,"f":"1"},{"v":"Beta Town"}]},{"c":[{"v":2.0,"f":"2"},{"v":"Beta Town"},null,null,{"v":"Alpha FC"}]},{"c":[{"v":3.0},{"v":"Alpha FC"}]}],"parsedNumHeaders":0}});"#;

#[test]
fn decodes_headers_and_rows() {
    let table = gviz::parse(BODY).expect("parse failed");

    assert_eq!(
        table.headers,
        ["Matchday", "Home Team", "Home Goals", "Away Goals", "Away Team"]
    );
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0], ["1", "Alpha FC", "2", "1", "Beta Town"]);
}

#[test]
fn null_cells_become_empty_strings() {
    let table = gviz::parse(BODY).unwrap();
    assert_eq!(table.rows[1], ["2", "Beta Town", "", "", "Alpha FC"]);
}

#[test]
fn short_rows_are_padded_to_the_column_count() {
    let table = gviz::parse(BODY).unwrap();
    assert_eq!(table.rows[2].len(), table.headers.len());
    assert_eq!(table.rows[2], ["3", "Alpha FC", "", "", ""]);
}

#[test]
fn formatted_value_wins_over_raw() {
    let body = r#"x({"table":{"cols":[{"label":"V"}],"rows":[{"c":[{"v":0.5,"f":"50%"}]}]}});"#;
    let table = gviz::parse(body).unwrap();
    assert_eq!(table.rows[0], ["50%"]);
}

#[test]
fn whole_numbers_stay_integral_without_formatting() {
    let body = r#"x({"table":{"cols":[{"label":"V"}],"rows":[{"c":[{"v":7.0}]}]}});"#;
    let table = gviz::parse(body).unwrap();
    assert_eq!(table.rows[0], ["7"]);
}

#[test]
fn garbage_body_is_an_error_not_a_panic() {
    assert!(gviz::parse("no json here").is_err());
    assert!(gviz::parse("callback({\"not\":\"a table\"});").is_err());
}
