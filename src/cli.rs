// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{ExportFormat, PageKind};

#[derive(Clone)]
pub struct Params {
    pub page: PageKind,              // league table or fixtures
    pub team: Option<String>,        // filter output to one team
    pub form_team: Option<String>,   // print a team's recent form and exit
    pub list_teams: bool,            // list roster then exit
    pub sort: bool,                  // rank league table by points
    pub out: Option<PathBuf>,        // output path (file, or dir for per-team)
    pub per_team: bool,              // one file per team vs single output
    pub format: ExportFormat,
    pub include_headers: bool,
    pub sheet_id: Option<String>,    // override the built-in sheet
}

impl Params {
    pub fn new() -> Self {
        Self {
            page: PageKind::League,
            team: None,
            form_team: None,
            list_teams: false,
            sort: false,
            out: None,
            per_team: false,
            format: ExportFormat::Csv,
            include_headers: true,
            sheet_id: None,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    crate::runner::run(&params).map(|_| ())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "league" => PageKind::League,
                    "fixtures" => PageKind::Fixtures,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };}
            "--list-teams" => params.list_teams = true,
            "-t" | "--team" => {
                let v = args.next().ok_or("Missing team name")?;
                params.team = Some(v); }
            "--form" => {
                let v = args.next().ok_or("Missing team name for --form")?;
                params.form_team = Some(v); }
            "--sort" => params.sort = true,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => params.include_headers = false,
            "--per-team" => params.per_team = true,
            "--sheet" => {
                let v = args.next().ok_or("Missing value for --sheet")?;
                params.sheet_id = Some(v); }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
