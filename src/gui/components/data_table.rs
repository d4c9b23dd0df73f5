// src/gui/components/data_table.rs
//
// Draws the live table. Fills headers from the page defaults if None.
// Purely a view over App's current display rows.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::gui::pages::Page;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let kind = app.current_page_kind();

    // Prefer live headers; fall back to the page's known headers.
    if app.headers.is_none() {
        app.headers = page
            .default_headers()
            .map(|hs| hs.iter().map(|s| s.to_string()).collect());
    }

    let cols = app
        .headers
        .as_ref()
        .map(|h| h.len())
        .or_else(|| app.rows.first().map(|r| r.len()))
        .unwrap_or(0);
    if cols == 0 {
        ui.weak("No data yet. Hit SCRAPE.");
        return;
    }

    let mut widths: Vec<f32> = page
        .preferred_column_widths()
        .map(|ws| ws.iter().map(|&w| w as f32).collect())
        .unwrap_or_else(|| {
            let mut v = vec![110.0];
            v.extend(std::iter::repeat(90.0).take(cols.saturating_sub(1)));
            v
        });
    widths.resize(cols, 90.0);

    let non_numeric = page.non_numeric_columns();
    let numeric_cols: Vec<bool> = (0..cols).map(|ci| !non_numeric.contains(&ci)).collect();

    // Reserve space for the scroll bar instead of overlaying content.
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", kind));
            for &w in &widths {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let label = app
                                .headers
                                .as_ref()
                                .and_then(|hs| hs.get(ci).cloned())
                                .unwrap_or_else(|| format!("Col {}", ci + 1));
                            let text = RichText::new(label).strong();
                            if numeric_cols[ci] {
                                ui.centered_and_justified(|ui| {
                                    ui.label(text);
                                });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(text);
                                });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.rows.len(), |mut row| {
                        let row_idx = row.index();
                        for ci in 0..cols {
                            let cell = app
                                .rows
                                .get(row_idx)
                                .and_then(|r| r.get(ci))
                                .cloned()
                                .unwrap_or_default();
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric_cols[ci] {
                                    ui.centered_and_justified(|ui| {
                                        ui.label(&cell);
                                    });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.label(&cell);
                                    });
                                }
                            });
                        }
                    });
                });
        });
}
