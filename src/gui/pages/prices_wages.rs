// src/gui/pages/prices_wages.rs
use std::error::Error;

use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::core::sanitize::parse_number;
use crate::gui::components::{chart, summary};
use crate::progress::Progress;
use crate::scrape;
use crate::store::DataSet;

use super::{distinct_values, merge_by_key, Page};

pub struct PricesWagesPage;

pub static PAGE: PricesWagesPage = PricesWagesPage;

const HEADERS: [&str; 4] = ["Date", "Series", "Value", "Source"];

const DATE_COL: usize = 0;
const SERIES_COL: usize = 1;
const VALUE_COL: usize = 2;
const SOURCE_COL: usize = 3;

impl Page for PricesWagesPage {
    fn title(&self) -> &'static str {
        "Prices & Wages"
    }
    fn kind(&self) -> PageKind {
        PageKind::PricesWages
    }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[100, 260, 110, 200])
    }

    fn non_numeric_columns(&self) -> &'static [usize] {
        &[DATE_COL, SERIES_COL, SOURCE_COL]
    }

    fn series_column(&self) -> Option<usize> {
        Some(SERIES_COL)
    }

    fn draw_controls(
        &self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        ds: Option<&DataSet>,
    ) -> bool {
        let Some(ds) = ds else { return false };
        let mut series = distinct_values(&ds.rows, SERIES_COL);
        series.sort();
        if series.is_empty() {
            return false;
        }
        let mut changed = false;
        if state.gui.wages_series.is_empty() || !series.contains(&state.gui.wages_series) {
            state.gui.wages_series = series[0].clone();
            changed = true;
        }
        ui.horizontal(|ui| {
            ui.label("Series:");
            egui::ComboBox::from_id_salt("wages_series")
                .selected_text(state.gui.wages_series.clone())
                .width(360.0)
                .show_ui(ui, |ui| {
                    for s in &series {
                        changed |= ui
                            .selectable_value(&mut state.gui.wages_series, s.clone(), s)
                            .changed();
                    }
                });
        });
        changed
    }

    fn draw_summary(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let sel = &state.gui.wages_series;
        if sel.is_empty() {
            return;
        }
        let mut last: Option<(String, f64)> = None;
        let mut count = 0usize;
        for r in &ds.rows {
            if r.get(SERIES_COL).map(|s| s == sel).unwrap_or(false) {
                count += 1;
                let (Some(d), Some(v)) =
                    (r.get(DATE_COL), r.get(VALUE_COL).and_then(|s| parse_number(s)))
                else {
                    continue;
                };
                last = Some((d.clone(), v));
            }
        }
        let Some((date, v)) = last else { return };
        summary::metric_row(
            ui,
            &[
                (format!("Latest ({date})"), format!("{v:.2}"), None),
                ("Observations".to_string(), count.to_string(), None),
            ],
        );
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let sel = &state.gui.wages_series;
        let points = ds
            .rows
            .iter()
            .filter(|r| r.get(SERIES_COL).map(|s| s == sel).unwrap_or(false))
            .filter_map(|r| {
                let x = chart::date_x(r.get(DATE_COL)?)?;
                let y = parse_number(r.get(VALUE_COL)?)?;
                Some([x, y])
            })
            .collect();
        chart::date_line_chart(
            ui,
            "wages_chart",
            vec![chart::SeriesLine { name: sel.clone(), points }],
            280.0,
        );
    }

    fn scrape(
        &self,
        _state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>> {
        scrape::collect_prices_wages(progress)
    }

    fn merge(&self, into: &mut DataSet, new: DataSet) {
        merge_by_key(into, new, &[DATE_COL, SERIES_COL, SOURCE_COL]);
    }

    /// Table shows the selected series only.
    fn view_for_display(
        &self,
        state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        let sel = &state.gui.wages_series;
        if sel.is_empty() {
            return (headers.clone(), rows.to_vec());
        }
        let filtered = rows
            .iter()
            .filter(|r| r.get(SERIES_COL).map(|s| s == sel).unwrap_or(false))
            .cloned()
            .collect();
        (headers.clone(), filtered)
    }
}
