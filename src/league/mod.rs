// src/league/mod.rs
//! # League computation module
//!
//! Everything derived from the two sheet tables lives here, as pure
//! functions over typed values:
//!
//! - `fixture` — the parse boundary. Raw sheet rows (loose strings)
//!   become `Fixture` values exactly once; goals and matchdays that do
//!   not parse are carried as absent rather than failing the run.
//! - `standings` — folds completed fixtures into one `TeamRecord` per
//!   roster team. Roster order in, roster order out; ranking is a
//!   separate, caller-applied step.
//! - `form` — a team's most recent completed results as W/D/L tokens,
//!   oldest-first, capped at [`form::FORM_WINDOW`].
//! - `table` — composes display tables (headers + string rows) from
//!   the above for the GUI pages and the CLI runner.
//!
//! ## Conventions & invariants
//! - **SkipIncomplete**: a fixture missing either goal value (blank or
//!   unparseable) contributes nothing, anywhere. This is the single
//!   policy for spreadsheet rows that aren't played yet.
//! - Fixtures naming a team outside the roster contribute nothing.
//! - No function here touches I/O or shared state; each call builds
//!   its result from scratch, so repeated calls on the same inputs are
//!   identical.

pub mod fixture;
pub mod form;
pub mod standings;
pub mod table;

pub use fixture::{ Fixture, FixtureStatus, Matchday };
pub use form::Outcome;
pub use standings::TeamRecord;
