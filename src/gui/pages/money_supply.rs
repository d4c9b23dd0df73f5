// src/gui/pages/money_supply.rs
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

pub struct MoneySupplyPage;

pub static PAGE: MoneySupplyPage = MoneySupplyPage;

const HEADERS: [&str; 3] = ["Date", "Indicator", "Value"];

const DATE_COL: usize = 0;
const INDICATOR_COL: usize = 1;
const VALUE_COL: usize = 2;

impl Page for MoneySupplyPage {
    fn title(&self) -> &'static str {
        "Money Supply"
    }
    fn kind(&self) -> PageKind {
        PageKind::MoneySupply
    }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[100, 320, 110])
    }

    fn non_numeric_columns(&self) -> &'static [usize] {
        &[DATE_COL, INDICATOR_COL]
    }

    fn series_column(&self) -> Option<usize> {
        Some(INDICATOR_COL)
    }

    fn draw_controls(
        &self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        ds: Option<&DataSet>,
    ) -> bool {
        let Some(ds) = ds else { return false };
        let mut indicators = distinct_values(&ds.rows, INDICATOR_COL);
        indicators.sort();
        if indicators.is_empty() {
            return false;
        }
        let mut changed = false;
        if state.gui.money_indicator.is_empty()
            || !indicators.contains(&state.gui.money_indicator)
        {
            state.gui.money_indicator = indicators[0].clone();
            changed = true;
        }
        ui.horizontal(|ui| {
            ui.label("Indicator:");
            egui::ComboBox::from_id_salt("money_indicator")
                .selected_text(state.gui.money_indicator.clone())
                .width(360.0)
                .show_ui(ui, |ui| {
                    for ind in &indicators {
                        changed |= ui
                            .selectable_value(&mut state.gui.money_indicator, ind.clone(), ind)
                            .changed();
                    }
                });
        });
        changed
    }

    fn draw_summary(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let ind = &state.gui.money_indicator;
        if ind.is_empty() {
            return;
        }
        let mut last: Option<(String, f64)> = None;
        let mut prev: Option<f64> = None;
        for r in &ds.rows {
            if r.get(INDICATOR_COL).map(|s| s == ind).unwrap_or(false) {
                let (Some(d), Some(v)) =
                    (r.get(DATE_COL), r.get(VALUE_COL).and_then(|s| parse_number(s)))
                else {
                    continue;
                };
                prev = last.as_ref().map(|(_, v)| *v);
                last = Some((d.clone(), v));
            }
        }
        let Some((date, v)) = last else { return };
        summary::metric_row(
            ui,
            &[(
                format!("{ind} ({date})"),
                format!("{v:.2}"),
                prev.map(|p| v - p),
            )],
        );
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let ind = &state.gui.money_indicator;
        let points = ds
            .rows
            .iter()
            .filter(|r| r.get(INDICATOR_COL).map(|s| s == ind).unwrap_or(false))
            .filter_map(|r| {
                let x = chart::date_x(r.get(DATE_COL)?)?;
                let y = parse_number(r.get(VALUE_COL)?)?;
                Some([x, y])
            })
            .collect();
        chart::date_line_chart(
            ui,
            "money_chart",
            vec![chart::SeriesLine { name: ind.clone(), points }],
            280.0,
        );
    }

    fn scrape(
        &self,
        _state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>> {
        scrape::collect_money_supply(progress)
    }

    fn merge(&self, into: &mut DataSet, new: DataSet) {
        merge_by_key(into, new, &[DATE_COL, INDICATOR_COL]);
    }

    /// Table shows the selected indicator only.
    fn view_for_display(
        &self,
        state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        let ind = &state.gui.money_indicator;
        if ind.is_empty() {
            return (headers.clone(), rows.to_vec());
        }
        let filtered = rows
            .iter()
            .filter(|r| r.get(INDICATOR_COL).map(|s| s == ind).unwrap_or(false))
            .cloned()
            .collect();
        (headers.clone(), filtered)
    }
}
