// src/fetch/mod.rs
mod fetch;

pub use fetch::collect_all;
pub use fetch::collect_fixtures;
pub use fetch::collect_league;
