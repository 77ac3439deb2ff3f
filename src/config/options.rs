// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    League,
    Fixtures,
}

impl PageKind {
    pub fn stem(&self) -> &'static str {
        match self { PageKind::League => "league", PageKind::Fixtures => "fixtures" }
    }
}

/// Team filter applied to the live table view.
/// The dashboard filter is single-choice: everything, or one team.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    All,
    One(String),
}

impl TeamFilter {
    pub fn matches(&self, team: &str) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::One(name) => name == team,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Spreadsheet document id the gviz queries run against.
    pub sheet_id: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { sheet_id: s!(SHEET_ID) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerTeam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Default output directory for a page's exports.
    pub fn default_dir_for(kind: PageKind) -> PathBuf {
        let sub = match kind {
            PageKind::League   => DEFAULT_LEAGUE_SUBDIR,
            PageKind::Fixtures => DEFAULT_FIXTURES_SUBDIR,
        };
        PathBuf::from(DEFAULT_OUT_DIR).join(sub)
    }

    pub fn set_default_dir_for_page(&mut self, kind: PageKind) {
        self.out_path.dir = Self::default_dir_for(kind);
    }

    pub fn current_dir(&self) -> &Path { &self.out_path.dir }

    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();

        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                let ext = self.format.ext();
                path.push(join!(stem, ".", ext));
            }
            ExportType::PerTeam => { /* directory only */ }
        }
        path
    }

    /// Parse UI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
            }
            ExportType::PerTeam => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_LEAGUE_SUBDIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
