// src/gui/pages/mod.rs
use std::collections::HashMap;
use std::error::Error;

use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::progress::Progress;
use crate::store::DataSet;

pub mod exchange_rates;
pub mod inflation;
pub mod money_supply;
pub mod policy_rates;
pub mod prices_wages;
pub mod prosperity;

/// One dashboard page = one CBSL series. The page knows its table shape,
/// how to scrape it, how to merge a fresh scrape into the cache, and how to
/// render its controls, summary tiles and chart. Persistence and layout
/// stay in the app.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Fallback headers when nothing is cached yet. Pages with dynamic
    /// columns (exchange rates) return None.
    fn default_headers(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Per-page column widths (px-ish).
    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        None
    }

    /// Columns rendered left-aligned; everything else is numeric-centered.
    fn non_numeric_columns(&self) -> &'static [usize] {
        &[]
    }

    /// Grouping column for per-series export, if the page has one.
    fn series_column(&self) -> Option<usize> {
        None
    }

    /// Sanity-check a cached dataset before adopting it.
    fn validate_cache(&self, ds: &DataSet) -> bool {
        match self.default_headers() {
            Some(h) => ds.header_count() == h.len(),
            None => ds.header_count() > 0,
        }
    }

    /// Page-specific filter controls. Returns true when a control changed
    /// (the app rebuilds the visible table).
    fn draw_controls(
        &self,
        _ui: &mut egui::Ui,
        _state: &mut AppState,
        _ds: Option<&DataSet>,
    ) -> bool {
        false
    }

    /// Metric tiles above the chart (latest values, deltas, KPIs).
    fn draw_summary(&self, _ui: &mut egui::Ui, _state: &AppState, _ds: &DataSet) {}

    /// The page's chart.
    fn draw_chart(&self, _ui: &mut egui::Ui, _state: &AppState, _ds: &DataSet) {}

    /// Execute the page's scrape (blocking).
    fn scrape(
        &self,
        state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>>;

    /// Merge freshly scraped rows into the canonical cache.
    /// Default: replace everything.
    fn merge(&self, into: &mut DataSet, new: DataSet) {
        *into = new;
    }

    /// Adapt headers/rows for on-screen display (column subset, filters).
    fn view_for_display(
        &self,
        _state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        (headers.clone(), rows.to_vec())
    }

    /// Transform headers/rows for export/copy.
    fn view_for_export(
        &self,
        _state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        (headers.clone(), rows.to_vec())
    }
}

/// Upsert `new` into `into` keyed on `key_cols`, newest row wins, result
/// sorted by key. Shared by every page whose rows are keyed by date.
pub fn merge_by_key(into: &mut DataSet, mut new: DataSet, key_cols: &[usize]) {
    if new.headers.is_some() {
        into.headers = new.headers.take();
    }

    let key_of = |r: &Vec<String>| -> Option<Vec<String>> {
        key_cols
            .iter()
            .map(|&c| r.get(c).cloned())
            .collect::<Option<Vec<String>>>()
    };

    let mut by_key: HashMap<Vec<String>, Vec<String>> =
        HashMap::with_capacity(into.rows.len().saturating_add(new.rows.len()));
    for r in std::mem::take(&mut into.rows) {
        if let Some(k) = key_of(&r) {
            by_key.insert(k, r);
        }
    }
    for r in new.rows {
        if let Some(k) = key_of(&r) {
            by_key.insert(k, r); // replace if exists, insert if not
        }
    }

    let mut rows: Vec<Vec<String>> = by_key.into_values().collect();
    rows.sort_by(|a, b| {
        let ka: Vec<&String> = key_cols.iter().filter_map(|&c| a.get(c)).collect();
        let kb: Vec<&String> = key_cols.iter().filter_map(|&c| b.get(c)).collect();
        ka.cmp(&kb)
    });
    into.rows = rows;
}

/// Distinct values of one column, first-seen order.
pub fn distinct_values(rows: &[Vec<String>], col: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in rows {
        if let Some(v) = r.get(col) {
            if !v.is_empty() && !out.iter().any(|x| x == v) {
                out.push(v.clone());
            }
        }
    }
    out
}
