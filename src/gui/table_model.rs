// src/gui/table_model.rs
//! The composed table a page hands to the view layer: headers + owned
//! rows, already filtered and decorated. Pages build these from the
//! canonical datasets; the table widget and the export/copy paths
//! consume them without knowing how they were derived.

/// The table model used by the GUI
#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self {
        Self { headers: None, rows: Vec::new() }
    }

    pub fn with(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}
