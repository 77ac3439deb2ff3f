// src/core/sanitize.rs

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Turn a team name into a safe file stem for per-team exports.
/// Keeps alphanumerics, maps whitespace runs to single underscores,
/// and falls back to a numbered stem when nothing survives.
pub fn sanitize_team_filename(name: &str, ordinal: usize) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { format!("team_{}", ordinal) } else { out }
}
