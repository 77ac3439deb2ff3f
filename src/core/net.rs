// src/core/net.rs

// One HTTPS GET per logical sheet, against the gviz query endpoint.

use std::error::Error;
use std::time::Duration;

use crate::config::consts::{ FETCH_TIMEOUT_SECS, GVIZ_HOST };

fn encode_query(s: &str) -> String {
    // Percent-encode the sheet name for the query string. Spaces and the
    // handful of reserved characters sheet names can realistically contain.
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(ch),
            _ => {
                let mut buf = [0u8; 4];
                for b in ch.encode_utf8(&mut buf).as_bytes() {
                    out.push_str(&format!("%{:02X}", b));
                }
            }
        }
    }
    out
}

pub fn gviz_url(sheet_id: &str, sheet_name: &str) -> String {
    format!(
        "https://{}/spreadsheets/d/{}/gviz/tq?tqx=out:json&sheet={}",
        GVIZ_HOST, sheet_id, encode_query(sheet_name)
    )
}

/// Fetch the raw gviz body for one sheet. The caller strips the JS
/// envelope (core::gviz); this layer only owns the transport.
pub fn fetch_sheet(sheet_id: &str, sheet_name: &str) -> Result<String, Box<dyn Error>> {
    let url = gviz_url(sheet_id, sheet_name);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(concat!("league_dash/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let resp = client.get(&url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} for sheet '{}'", status, sheet_name).into());
    }
    Ok(resp.text()?)
}
