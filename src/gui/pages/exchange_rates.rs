// src/gui/pages/exchange_rates.rs
use std::error::Error;

use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::core::sanitize::parse_number;
use crate::gui::components::{chart, summary};
use crate::progress::Progress;
use crate::scrape;
use crate::specs::exchange_rates::{currency_of, is_buying};
use crate::store::DataSet;

use super::{merge_by_key, Page};

pub struct ExchangeRatesPage;

pub static PAGE: ExchangeRatesPage = ExchangeRatesPage;

const DATE_COL: usize = 0;

/// Distinct currency codes across the TT columns.
fn currencies(ds: &DataSet) -> Vec<String> {
    let Some(headers) = &ds.headers else {
        return Vec::new();
    };
    let mut out: Vec<String> = Vec::new();
    for h in headers.iter().skip(1) {
        if let Some(code) = currency_of(h) {
            if !out.iter().any(|c| *c == code) {
                out.push(code);
            }
        }
    }
    out.sort();
    out
}

/// Column indices (buying, selling) for a currency code.
fn columns_for(ds: &DataSet, code: &str) -> (Option<usize>, Option<usize>) {
    let Some(headers) = &ds.headers else {
        return (None, None);
    };
    let mut buying = None;
    let mut selling = None;
    for (ci, h) in headers.iter().enumerate().skip(1) {
        if currency_of(h).as_deref() != Some(code) {
            continue;
        }
        if is_buying(h) {
            buying = buying.or(Some(ci));
        } else {
            selling = selling.or(Some(ci));
        }
    }
    (buying, selling)
}

/// Last two parseable values of one column, rows already date-sorted.
fn last_two(ds: &DataSet, col: usize) -> (Option<(String, f64)>, Option<f64>) {
    let mut last = None;
    let mut prev = None;
    for r in &ds.rows {
        let (Some(date), Some(v)) = (r.get(DATE_COL), r.get(col).and_then(|s| parse_number(s)))
        else {
            continue;
        };
        prev = last.as_ref().map(|(_, v): &(String, f64)| *v);
        last = Some((date.clone(), v));
    }
    (last, prev)
}

impl Page for ExchangeRatesPage {
    fn title(&self) -> &'static str {
        "Exchange Rates"
    }
    fn kind(&self) -> PageKind {
        PageKind::ExchangeRates
    }

    fn non_numeric_columns(&self) -> &'static [usize] {
        &[DATE_COL]
    }

    fn validate_cache(&self, ds: &DataSet) -> bool {
        ds.headers
            .as_ref()
            .map(|h| h.len() >= 2 && h[0].eq_ignore_ascii_case("Date"))
            .unwrap_or(false)
    }

    fn draw_controls(
        &self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        ds: Option<&DataSet>,
    ) -> bool {
        let Some(ds) = ds else { return false };
        let codes = currencies(ds);
        if codes.is_empty() {
            return false;
        }
        let mut changed = false;
        if state.gui.fx_currency.is_empty() || !codes.contains(&state.gui.fx_currency) {
            state.gui.fx_currency = codes
                .iter()
                .find(|c| *c == "USD")
                .cloned()
                .unwrap_or_else(|| codes[0].clone());
            changed = true;
        }
        ui.horizontal(|ui| {
            ui.label("Currency:");
            egui::ComboBox::from_id_salt("fx_currency")
                .selected_text(state.gui.fx_currency.clone())
                .show_ui(ui, |ui| {
                    for code in &codes {
                        changed |= ui
                            .selectable_value(&mut state.gui.fx_currency, code.clone(), code)
                            .changed();
                    }
                });
        });
        changed
    }

    fn draw_summary(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let code = &state.gui.fx_currency;
        if code.is_empty() {
            return;
        }
        let (buy_col, sell_col) = columns_for(ds, code);

        let mut tiles = Vec::new();
        let mut as_of = None;
        for (label, col) in [("Buying", buy_col), ("Selling", sell_col)] {
            let Some(col) = col else { continue };
            let (last, prev) = last_two(ds, col);
            let Some((date, v)) = last else { continue };
            as_of = Some(date);
            tiles.push((
                format!("{label} ({code})"),
                format!("Rs. {v:.2}"),
                prev.map(|p| v - p),
            ));
        }
        if let Some(date) = as_of {
            ui.label(format!("Latest TT rates as of {date}"));
        }
        summary::metric_row(ui, &tiles);
    }

    fn draw_chart(&self, ui: &mut egui::Ui, state: &AppState, ds: &DataSet) {
        let code = &state.gui.fx_currency;
        let (buy_col, sell_col) = columns_for(ds, code);

        let mut series = Vec::new();
        for (label, col) in [("Buying", buy_col), ("Selling", sell_col)] {
            let Some(col) = col else { continue };
            let points = ds
                .rows
                .iter()
                .filter_map(|r| {
                    let x = chart::date_x(r.get(DATE_COL)?)?;
                    let y = parse_number(r.get(col)?)?;
                    Some([x, y])
                })
                .collect();
            series.push(chart::SeriesLine {
                name: format!("{label} {code}"),
                points,
            });
        }
        chart::date_line_chart(ui, "fx_chart", series, 280.0);
    }

    fn scrape(
        &self,
        _state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>> {
        scrape::collect_exchange_rates(progress)
    }

    fn merge(&self, into: &mut DataSet, new: DataSet) {
        // Column sets can differ between scrapes (currencies come and go);
        // adopting the fresh headers wholesale would silently misalign old
        // rows, so a header change replaces the cache instead of merging.
        if into.headers == new.headers {
            merge_by_key(into, new, &[DATE_COL]);
        } else {
            *into = new;
        }
    }

    /// Show Date plus the selected currency's two columns.
    fn view_for_display(
        &self,
        state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        let code = &state.gui.fx_currency;
        let Some(hs) = headers else {
            return (headers.clone(), rows.to_vec());
        };
        if code.is_empty() {
            return (headers.clone(), rows.to_vec());
        }

        let keep: Vec<usize> = hs
            .iter()
            .enumerate()
            .filter(|(ci, h)| *ci == DATE_COL || currency_of(h).as_deref() == Some(code.as_str()))
            .map(|(ci, _)| ci)
            .collect();
        if keep.len() <= 1 {
            return (headers.clone(), rows.to_vec());
        }

        let new_headers = Some(keep.iter().filter_map(|&ci| hs.get(ci).cloned()).collect());
        let new_rows = rows
            .iter()
            .map(|r| {
                keep.iter()
                    .map(|&ci| r.get(ci).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        (new_headers, new_rows)
    }
}
