// src/runner.rs

// CLI runner: fetch live, compose the requested table, emit to stdout
// or files. No cache involvement — the CLI is for scripting, and a
// script wants today's sheet, not whatever the GUI last saw.

use std::collections::HashMap;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::{
    cli::Params,
    config::options::{ExportOptions, ExportType, FetchOptions, PageKind, TeamFilter},
    core::sanitize::sanitize_team_filename,
    csv::to_export_string,
    fetch,
    file,
    league::fixture::{ self, Fixture },
    league::form,
    league::table::{ self, FixturesView, LeagueView },
    store::DataSet,
    teams,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let mut opts = FetchOptions::default();
    if let Some(id) = &params.sheet_id {
        opts.sheet_id = id.clone();
    }

    // --form needs only the fixtures sheet.
    if let Some(team) = &params.form_team {
        let ds = fetch::collect_fixtures(&opts, None)?;
        let fixtures = fixture::from_dataset(&ds);
        println!("{}", form::letters(&form::recent(team, &fixtures)));
        return Ok(RunSummary { files_written: Vec::new() });
    }

    let datasets = fetch::collect_all(&opts, None)?;
    let by_kind: HashMap<PageKind, DataSet> = datasets.into_iter().collect();

    let empty = DataSet::default();
    let league = by_kind.get(&PageKind::League).unwrap_or(&empty);
    let fixtures: Vec<Fixture> = by_kind.get(&PageKind::Fixtures)
        .map(|ds| fixture::from_dataset(ds))
        .unwrap_or_default();

    if params.list_teams {
        for name in teams::roster_or_fallback(league, &fixtures) {
            println!("{}", name);
        }
        return Ok(RunSummary { files_written: Vec::new() });
    }

    let filter = match &params.team {
        Some(name) => TeamFilter::One(name.clone()),
        None => TeamFilter::All,
    };

    let compose = |filter: TeamFilter| -> (Vec<String>, Vec<Vec<String>>) {
        match params.page {
            PageKind::League => table::league_table(
                league,
                &fixtures,
                &LeagueView { sort_by_points: params.sort, show_form: true, filter },
            ),
            PageKind::Fixtures => table::fixtures_table(
                &fixtures,
                &FixturesView { show_scores: true, filter },
            ),
        }
    };

    if params.per_team {
        return per_team(params, league, &fixtures, compose);
    }

    let (headers, rows) = compose(filter);
    let text = to_export_string(
        &Some(headers),
        &rows,
        params.include_headers,
        params.format.delim(),
    );

    match &params.out {
        Some(out) => {
            let default_name = format!("{}.{}", params.page.stem(), params.format.ext());
            let path = file::resolve_single_out_path(
                out.to_string_lossy().as_ref(),
                &default_name,
            )?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    file::ensure_directory(parent)?;
                }
            }
            std::fs::write(&path, text)?;
            println!("Wrote {}", path.display());
            Ok(RunSummary { files_written: vec![path] })
        }
        None => {
            io::stdout().write_all(text.as_bytes())?;
            Ok(RunSummary { files_written: Vec::new() })
        }
    }
}

fn per_team(
    params: &Params,
    league: &DataSet,
    fixtures: &[Fixture],
    compose: impl Fn(TeamFilter) -> (Vec<String>, Vec<Vec<String>>),
) -> Result<RunSummary, Box<dyn Error>> {
    let out_dir = params.out.clone()
        .ok_or("--per-team needs -o <DIR>")?;

    let mut export = ExportOptions::default();
    export.format = params.format;
    export.export_type = ExportType::PerTeam;
    export.include_headers = params.include_headers;
    export.set_path(out_dir.to_string_lossy().as_ref());

    let targets: Vec<String> = match &params.team {
        Some(name) => vec![name.clone()],
        None => teams::roster_or_fallback(league, fixtures),
    };

    let dir = export.out_path();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::new();

    for (ordinal, team) in targets.iter().enumerate() {
        let (headers, rows) = compose(TeamFilter::One(team.clone()));
        if rows.is_empty() {
            continue;
        }
        let stem = sanitize_team_filename(team, ordinal);
        let path = file::write_export_team_file(
            &export, &dir, &stem, &mut seen, &Some(headers), &rows,
        )?;
        written.push(path);
    }

    println!("Wrote {} file(s) to {}", written.len(), dir.display());
    Ok(RunSummary { files_written: written })
}
