// src/fetch/fetch.rs

use std::{
    error::Error,
    sync::mpsc,
    thread,
};

use crate::{
    config::options::{FetchOptions, PageKind},
    progress::Progress,
    specs,
    store::DataSet,
};

pub fn collect_league(
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching league table…");
    }
    let bundle = specs::league::fetch(&opts.sheet_id)?;
    Ok(DataSet { headers: bundle.headers, rows: bundle.rows })
}

pub fn collect_fixtures(
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching fixtures…");
    }
    let bundle = specs::fixtures::fetch(&opts.sheet_id)?;
    Ok(DataSet { headers: bundle.headers, rows: bundle.rows })
}

/// Fetch both sheets, one thread each, and hand back the results keyed
/// by page. A failed sheet fails the whole collect — half a dashboard
/// is worse than a visible error.
pub fn collect_all(
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<(PageKind, DataSet)>, Box<dyn Error>> {
    const SHEETS: [PageKind; 2] = [PageKind::League, PageKind::Fixtures];

    if let Some(p) = progress.as_deref_mut() {
        p.begin(SHEETS.len());
        p.log("Fetching sheets…");
    }

    type FetchResult = (PageKind, Result<DataSet, String>);
    let (tx, rx) = mpsc::channel::<FetchResult>();

    for kind in SHEETS {
        let tx = tx.clone();
        let opts = opts.clone();
        thread::spawn(move || {
            let result = match kind {
                PageKind::League => collect_league(&opts, None),
                PageKind::Fixtures => collect_fixtures(&opts, None),
            };
            let _ = tx.send((kind, result.map_err(|e| e.to_string())));
        });
    }
    drop(tx); // main thread is sole receiver now

    let mut out: Vec<(PageKind, DataSet)> = Vec::with_capacity(SHEETS.len());
    let mut first_err: Option<String> = None;

    for (kind, result) in rx {
        match result {
            Ok(ds) => {
                logf!("Fetch: OK {:?} rows={} headers={}", kind, ds.row_count(), ds.header_count());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(kind.stem());
                }
                out.push((kind, ds));
            }
            Err(msg) => {
                loge!("Fetch: {:?} failed: {}", kind, msg);
                if first_err.is_none() {
                    first_err = Some(format!("{}: {}", kind.stem(), msg));
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    match first_err {
        Some(msg) => Err(msg.into()),
        None => {
            // Stable order: league first, fixtures second.
            out.sort_by_key(|(k, _)| match k { PageKind::League => 0, PageKind::Fixtures => 1 });
            Ok(out)
        }
    }
}
