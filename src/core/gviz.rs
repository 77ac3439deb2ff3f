// src/core/gviz.rs

// The gviz endpoint answers JSON wrapped in a JS callback:
//
//   /*O_o*/
//   google.visualization.Query.setResponse({"version":"0.6", ..., "table":{...}});
//
// Strip the envelope, then deserialize the table. Cells carry a raw
// value `v` (string/number/bool/null) and sometimes a formatted value
// `f`; the formatted one wins when present, null cells become "".

use std::error::Error;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Envelope {
    table: GvizTable,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    cols: Vec<GvizCol>,
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizCol {
    #[serde(default)]
    label: String,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Value,
    #[serde(default)]
    f: Option<String>,
}

/// Column labels + stringified row cells for one sheet.
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Cut the JSON object out of the callback wrapper.
/// Tolerant of the comment preamble and trailing junk: takes the slice
/// between the first '{' and the last '}'.
fn strip_envelope(body: &str) -> Result<&str, Box<dyn Error>> {
    let start = body.find('{').ok_or("gviz: no JSON object in response")?;
    let end = body.rfind('}').ok_or("gviz: unterminated JSON object")?;
    if end < start {
        return Err("gviz: malformed response envelope".into());
    }
    Ok(&body[start..=end])
}

fn cell_text(cell: &Option<GvizCell>) -> String {
    let Some(cell) = cell else { return s!(); };
    if let Some(f) = &cell.f {
        return f.clone();
    }
    match &cell.v {
        Value::Null => s!(),
        Value::String(v) => v.clone(),
        Value::Bool(v) => v.to_string(),
        Value::Number(n) => {
            // Whole numbers come back as "12.0" through f64 display; keep them integral.
            match n.as_i64() {
                Some(i) => i.to_string(),
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
                    _ => n.to_string(),
                },
            }
        }
        other => other.to_string(),
    }
}

/// Parse a raw gviz body into headers + rows.
/// Every row is padded/truncated to the column count so downstream
/// indexing by header position is always in bounds.
pub fn parse(body: &str) -> Result<SheetTable, Box<dyn Error>> {
    let json = strip_envelope(body)?;
    let envelope: Envelope = serde_json::from_str(json)?;

    let headers: Vec<String> = envelope.table.cols.iter()
        .map(|c| c.label.trim().to_string())
        .collect();
    let ncols = headers.len();

    let rows = envelope.table.rows.iter()
        .map(|r| {
            let mut row: Vec<String> = r.c.iter().take(ncols).map(cell_text).collect();
            row.resize(ncols, s!());
            row
        })
        .collect();

    Ok(SheetTable { headers, rows })
}
