// src/gui/components/chart.rs

// egui_plot wrappers shared by the pages: date-axis line charts for the
// time series, a year-axis bar chart for the prosperity index. X values
// are days-from-CE so chrono can format the axis back into dates.

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::core::dates::parse_date;

pub struct SeriesLine {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// X coordinate for a stored ISO date cell.
pub fn date_x(iso: &str) -> Option<f64> {
    parse_date(iso).map(|d| d.num_days_from_ce() as f64)
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

fn fmt_x(x: f64) -> String {
    x_to_date(x)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn date_line_chart(ui: &mut egui::Ui, id: &str, series: Vec<SeriesLine>, height: f32) {
    if series.iter().all(|s| s.points.is_empty()) {
        ui.weak("No data to plot. Scrape first.");
        return;
    }
    Plot::new(id.to_string())
        .height(height)
        .legend(Legend::default())
        .x_axis_formatter(|mark, _range| fmt_x(mark.value))
        .label_formatter(|name, point| {
            if name.is_empty() {
                format!("{}\n{:.2}", fmt_x(point.x), point.y)
            } else {
                format!("{}\n{}\n{:.2}", name, fmt_x(point.x), point.y)
            }
        })
        .show(ui, |plot_ui| {
            for s in series {
                if s.points.is_empty() {
                    continue;
                }
                plot_ui.line(Line::new(s.name, PlotPoints::from(s.points)));
            }
        });
}

/// One bar per year (prosperity index).
pub fn year_bar_chart(ui: &mut egui::Ui, id: &str, name: &str, values: Vec<(f64, f64)>, height: f32) {
    if values.is_empty() {
        ui.weak("No data to plot. Scrape first.");
        return;
    }
    let bars: Vec<Bar> = values
        .into_iter()
        .map(|(year, v)| Bar::new(year, v).width(0.6))
        .collect();

    Plot::new(id.to_string())
        .height(height)
        .legend(Legend::default())
        .x_axis_formatter(|mark, _range| format!("{}", mark.value.round() as i64))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(name.to_string(), bars));
        });
}
