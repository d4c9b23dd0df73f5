// src/gui/pages/policy_rates.rs
use std::error::Error;

use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::core::sanitize::parse_number;
use crate::gui::components::{chart, summary};
use crate::progress::Progress;
use crate::scrape;
use crate::specs::policy_rates::{RATE_OPR, RATE_SDFR, RATE_SLFR, RATE_SRR};
use crate::store::DataSet;

use super::{merge_by_key, Page};

pub struct PolicyRatesPage;

pub static PAGE: PolicyRatesPage = PolicyRatesPage;

const HEADERS: [&str; 3] = ["Date", "Rate", "Value"];

const DATE_COL: usize = 0;
const RATE_COL: usize = 1;
const VALUE_COL: usize = 2;

/// Latest and previous value for one rate; rows are sorted by (Date, Rate).
fn latest_pair(ds: &DataSet, rate: &str) -> (Option<f64>, Option<f64>) {
    let mut last = None;
    let mut prev = None;
    for r in &ds.rows {
        if r.get(RATE_COL).map(|s| s == rate).unwrap_or(false) {
            if let Some(v) = r.get(VALUE_COL).and_then(|s| parse_number(s)) {
                prev = last;
                last = Some(v);
            }
        }
    }
    (last, prev)
}

impl Page for PolicyRatesPage {
    fn title(&self) -> &'static str {
        "Policy Rates"
    }
    fn kind(&self) -> PageKind {
        PageKind::PolicyRates
    }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[100, 70, 90])
    }

    fn non_numeric_columns(&self) -> &'static [usize] {
        &[DATE_COL, RATE_COL]
    }

    fn series_column(&self) -> Option<usize> {
        Some(RATE_COL)
    }

    fn draw_controls(
        &self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        _ds: Option<&DataSet>,
    ) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Chart:");
            changed |= ui
                .checkbox(&mut state.gui.policy_show_sdfr, "Deposit (SDFR)")
                .changed();
            changed |= ui
                .checkbox(&mut state.gui.policy_show_slfr, "Lending (SLFR)")
                .changed();
            changed |= ui
                .checkbox(&mut state.gui.policy_show_srr, "Reserve ratio (SRR)")
                .changed();
        });
        changed
    }

    fn draw_summary(&self, ui: &mut egui::Ui, _state: &AppState, ds: &DataSet) {
        let mut tiles = Vec::new();
        for (rate, label) in [
            (RATE_OPR, "Overnight Policy Rate (OPR)"),
            (RATE_SDFR, "Standing Deposit Facility (SDFR)"),
            (RATE_SLFR, "Standing Lending Facility (SLFR)"),
            (RATE_SRR, "Statutory Reserve Ratio (SRR)"),
        ] {
            let (last, prev) = latest_pair(ds, rate);
            let Some(last) = last else { continue };
            let delta = prev.map(|p| last - p);
            tiles.push((label.to_string(), format!("{last:.2} %"), delta));
        }
        summary::metric_row(ui, &tiles);
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let mut wanted: Vec<&str> = Vec::new();
        if state.gui.policy_show_sdfr {
            wanted.push(RATE_SDFR);
        }
        if state.gui.policy_show_slfr {
            wanted.push(RATE_SLFR);
        }
        if state.gui.policy_show_srr {
            wanted.push(RATE_SRR);
        }
        if wanted.is_empty() {
            ui.weak("Select at least one rate to plot.");
            return;
        }

        let series = wanted
            .iter()
            .map(|rate| {
                let points = ds
                    .rows
                    .iter()
                    .filter(|r| r.get(RATE_COL).map(|s| s == rate).unwrap_or(false))
                    .filter_map(|r| {
                        let x = chart::date_x(r.get(DATE_COL)?)?;
                        let y = parse_number(r.get(VALUE_COL)?)?;
                        Some([x, y])
                    })
                    .collect();
                chart::SeriesLine { name: rate.to_string(), points }
            })
            .collect();

        chart::date_line_chart(ui, "policy_rates_chart", series, 280.0);
    }

    fn scrape(
        &self,
        _state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>> {
        scrape::collect_policy_rates(progress)
    }

    fn merge(&self, into: &mut DataSet, new: DataSet) {
        merge_by_key(into, new, &[DATE_COL, RATE_COL]);
    }
}
