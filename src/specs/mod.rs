// src/specs/mod.rs
//! # Sheet "specs" module
//!
//! This module hosts the **per-table fetch specifications** for the
//! spreadsheet feed. Each spec focuses on a single sheet and encodes
//! *where the ground truth lives in the feed* and *how to extract it
//! robustly*.
//!
//! ## What lives here
//! - One `fetch()` per sheet, going through `core::net` (transport)
//!   and `core::gviz` (envelope + cell decoding).
//! - **Tidying** of the decoded table: whitespace normalization and
//!   dropping rows with no content, so downstream code sees clean
//!   cells.
//! - **Light shaping** into small bundle structs (headers + rows) that
//!   drop straight into `store::DataSet`.
//!
//! ## What does **not** live here
//! - **Caching/persistence** (`store::load_dataset` / `store::save_dataset`)
//!   — handled by higher layers (`fetch::collect_*`).
//! - **GUI concerns, filtering, or export formatting.**
//! - **Derived tables** — standings and form are computed from the
//!   fixtures table in `league::*`, never here.
//!
//! ## Conventions & invariants
//! - Return **stable column shapes** per sheet (documented in each
//!   spec) so the rest of the pipeline can rely on them.
//! - Sheet cells are loosely typed; specs keep them as strings. The
//!   typed parse happens once, at `league::fixture::from_dataset`.
//! - Specs are testable **offline**: the gviz decoding they rely on
//!   takes a captured body, no socket required.

pub mod fixtures;
pub mod league;
