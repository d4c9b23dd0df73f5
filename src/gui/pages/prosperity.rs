// src/gui/pages/prosperity.rs
use std::error::Error;

use eframe::egui;

use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::core::sanitize::parse_number;
use crate::gui::components::{chart, summary};
use crate::progress::Progress;
use crate::scrape;
use crate::store::DataSet;

use super::{merge_by_key, Page};

pub struct ProsperityPage;

pub static PAGE: ProsperityPage = ProsperityPage;

const HEADERS: [&str; 2] = ["Year", "SLPI"];

const YEAR_COL: usize = 0;
const VALUE_COL: usize = 1;

fn year_values(ds: &DataSet) -> Vec<(f64, f64)> {
    ds.rows
        .iter()
        .filter_map(|r| {
            let year = r.get(YEAR_COL)?.parse::<f64>().ok()?;
            let v = parse_number(r.get(VALUE_COL)?)?;
            Some((year, v))
        })
        .collect()
}

impl Page for ProsperityPage {
    fn title(&self) -> &'static str {
        "Prosperity Index"
    }
    fn kind(&self) -> PageKind {
        PageKind::ProsperityIndex
    }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [usize]> {
        Some(&[70, 90])
    }

    fn draw_summary(&self, ui: &mut egui::Ui, _state: &AppState, ds: &DataSet) {
        let values = year_values(ds);
        if values.is_empty() {
            return;
        }
        let avg = values.iter().map(|(_, v)| v).sum::<f64>() / values.len() as f64;
        let first = values.iter().map(|(y, _)| *y as i32).min().unwrap_or(0);
        let last = values.iter().map(|(y, _)| *y as i32).max().unwrap_or(0);
        summary::metric_row(
            ui,
            &[(
                format!("Average SLPI ({first}–{last})"),
                format!("{avg:.3}"),
                None,
            )],
        );
    }

    fn draw_chart(&self, ui: &mut egui::Ui, _state: &AppState, ds: &DataSet) {
        chart::year_bar_chart(ui, "slpi_chart", "SLPI", year_values(ds), 260.0);
    }

    fn scrape(
        &self,
        _state: &AppState,
        progress: Option<&mut dyn Progress>,
    ) -> Result<DataSet, Box<dyn Error>> {
        scrape::collect_prosperity(progress)
    }

    fn merge(&self, into: &mut DataSet, new: DataSet) {
        merge_by_key(into, new, &[YEAR_COL]);
    }
}
