// src/config/consts.rs

// Sheet feed
pub const SHEET_ID: &str = "1MobG_dUO9okerGz6QCPsvUoRagTcDl5a";
pub const LEAGUE_SHEET: &str = "League Table";
pub const FIXTURE_SHEET: &str = "Match Results";

// Net
pub const GVIZ_HOST: &str = "docs.google.com";
pub const FETCH_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_LEAGUE_SUBDIR: &str = "league";
pub const DEFAULT_FIXTURES_SUBDIR: &str = "fixtures";
pub const DEFAULT_FILE: &str = "all";
