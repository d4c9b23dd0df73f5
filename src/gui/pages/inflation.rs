// src/gui/pages/inflation.rs
use std::error::Error;

use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::{AppState, InflationMeasure, PriceIndex};
use crate::core::sanitize::parse_number;
use crate::gui::components::{chart, summary};
use crate::progress::Progress;
use crate::scrape;
use crate::store::DataSet;

use super::{merge_by_key, Page};

pub struct InflationPage;

pub static PAGE: InflationPage = InflationPage;

const HEADERS: [&str; 5] = [
    "Date",
    "CCPI Headline (YoY %)",
    "CCPI Core (YoY %)",
    "NCPI Headline (YoY %)",
    "NCPI Core (YoY %)",
];

const DATE_COL: usize = 0;

fn selected_column(state: &AppState) -> usize {
    match (&state.gui.inflation_index, &state.gui.inflation_measure) {
        (PriceIndex::Ccpi, InflationMeasure::Headline) => 1,
        (PriceIndex::Ccpi, InflationMeasure::Core) => 2,
        (PriceIndex::Ncpi, InflationMeasure::Headline) => 3,
        (PriceIndex::Ncpi, InflationMeasure::Core) => 4,
    }
}

fn column_values(ds: &DataSet, col: usize) -> Vec<(String, f64)> {
    ds.rows
        .iter()
        .filter_map(|r| {
            let date = r.get(DATE_COL)?;
            let v = parse_number(r.get(col)?)?;
            Some((date.clone(), v))
        })
        .collect()
}

impl Page for InflationPage {
    fn title(&self) -> &'static str {
        "Inflation"
    }
    fn kind(&self) -> PageKind {
        PageKind::Inflation
    }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[100, 140, 140, 140, 140])
    }

    fn non_numeric_columns(&self) -> &'static [usize] {
        &[DATE_COL]
    }

    fn draw_controls(
        &self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        _ds: Option<&DataSet>,
    ) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Index:");
            changed |= ui
                .radio_value(&mut state.gui.inflation_index, PriceIndex::Ccpi, "CCPI")
                .changed();
            changed |= ui
                .radio_value(&mut state.gui.inflation_index, PriceIndex::Ncpi, "NCPI")
                .changed();
            ui.separator();
            ui.label("Measure:");
            changed |= ui
                .radio_value(
                    &mut state.gui.inflation_measure,
                    InflationMeasure::Headline,
                    "Headline (Y-o-Y)",
                )
                .changed();
            changed |= ui
                .radio_value(
                    &mut state.gui.inflation_measure,
                    InflationMeasure::Core,
                    "Core (Y-o-Y)",
                )
                .changed();
        });
        changed
    }

    fn draw_summary(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let values = column_values(ds, selected_column(state));
        if values.is_empty() {
            return;
        }
        let n = values.len() as f64;
        let mean = values.iter().map(|(_, v)| v).sum::<f64>() / n;
        let var = values.iter().map(|(_, v)| (v - mean).powi(2)).sum::<f64>() / n;
        let (max_d, max_v) = values.iter().fold(("", f64::MIN), |acc, (d, v)| {
            if *v > acc.1 {
                (d.as_str(), *v)
            } else {
                acc
            }
        });
        let (min_d, min_v) = values.iter().fold(("", f64::MAX), |acc, (d, v)| {
            if *v < acc.1 {
                (d.as_str(), *v)
            } else {
                acc
            }
        });

        summary::metric_row(
            ui,
            &[
                ("Average (%)".to_string(), format!("{mean:.2}"), None),
                ("Std. Dev.".to_string(), format!("{:.2}", var.sqrt()), None),
                ("Max".to_string(), format!("{max_v:.2} ({max_d})"), None),
                ("Min".to_string(), format!("{min_v:.2} ({min_d})"), None),
            ],
        );
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let col = selected_column(state);
        let name = HEADERS.get(col).copied().unwrap_or("Y-o-Y %");
        let points = ds
            .rows
            .iter()
            .filter_map(|r| {
                let x = chart::date_x(r.get(DATE_COL)?)?;
                let y = parse_number(r.get(col)?)?;
                Some([x, y])
            })
            .collect();
        chart::date_line_chart(
            ui,
            "inflation_chart",
            vec![chart::SeriesLine { name: name.to_string(), points }],
            280.0,
        );
    }

    fn scrape(
        &self,
        _state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>> {
        scrape::collect_inflation(progress)
    }

    fn merge(&self, into: &mut DataSet, new: DataSet) {
        merge_by_key(into, new, &[DATE_COL]);
    }
}
