// src/gui/app.rs
use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use eframe::egui;
use tracing::{debug, info, warn};

use crate::config::consts::{PRESS_LINKS_FILE, PROSPERITY_REPORTS_FILE};
use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::store::{self, DataSet};

use super::components;
use super::pages::Page;
use super::router;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "CBSL Data Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (mapped <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // in-memory display for CURRENT page (post view_for_display)
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,

    // status line (scrape progress writes here)
    pub status: Arc<Mutex<String>>,

    // per-page canonical data
    pub raw_data: HashMap<PageKind, DataSet>,

    // side datasets: inflation press-release links, prosperity report list
    pub press_links: Option<DataSet>,
    pub prosperity_reports: Option<DataSet>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = String::from("Idle");

        // canonical cache(s) from disk
        let mut raw_data: HashMap<PageKind, DataSet> = HashMap::new();
        for p in router::all_pages() {
            let kind = p.kind();
            match store::load_dataset(&kind) {
                Ok(ds) => {
                    if ds.is_empty() {
                        debug!("cache: {:?} is empty, skipping", kind);
                        continue;
                    }
                    if p.validate_cache(&ds) {
                        info!(
                            "cache: loaded {:?} (rows={}, headers={})",
                            kind,
                            ds.row_count(),
                            ds.header_count()
                        );
                        raw_data.insert(kind, ds);
                        status = String::from("Loaded local data");
                    } else {
                        warn!("cache: invalid shape for {:?}, ignoring", kind);
                    }
                }
                Err(e) => {
                    debug!("cache: missing {:?} ({})", kind, e);
                }
            }
        }

        let press_links = store::load_named(PRESS_LINKS_FILE).ok();
        let prosperity_reports = store::load_named(PROSPERITY_REPORTS_FILE).ok();

        state
            .options
            .export
            .set_default_dir_for_page(PageKind::PolicyRates);
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            out_path_text,
            out_path_dirty: false,
            headers: None,
            rows: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            raw_data,
            press_links,
            prosperity_reports,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.gui.current_page_index
    }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) {
        self.state.gui.current_page_index = idx;
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        router::all_pages()[self.current_index()]
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind {
        self.current_page().kind()
    }

    #[inline]
    pub fn current_raw(&self) -> Option<&DataSet> {
        self.raw_data.get(&self.current_page_kind())
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Rebuild the visible table from canonical raw + page view transform.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        let kind = page.kind();

        if let Some(raw) = self.raw_data.get(&kind) {
            let (headers, rows) = page.view_for_display(&self.state, &raw.headers, &raw.rows);
            self.headers = headers;
            self.rows = rows;
        } else {
            self.headers = page
                .default_headers()
                .map(|hs| hs.iter().map(|s| s.to_string()).collect());
            self.rows = Vec::new();
        }
    }

    fn draw_press_links(&self, ui: &mut egui::Ui) {
        let Some(links) = &self.press_links else { return };
        if links.is_empty() {
            return;
        }
        ui.collapsing("Press releases (PDF)", |ui| {
            egui::ScrollArea::vertical()
                .id_salt("press_links_scroll")
                .max_height(120.0)
                .show(ui, |ui| {
                    // Rows are [Year, Month, PDF], sorted ascending; show newest first.
                    for r in links.rows.iter().rev() {
                        let (Some(year), Some(month), Some(url)) =
                            (r.first(), r.get(1), r.get(2))
                        else {
                            continue;
                        };
                        ui.hyperlink_to(format!("Inflation in {month} {year}"), url);
                    }
                });
        });
    }

    fn draw_prosperity_reports(&self, ui: &mut egui::Ui) {
        let Some(reports) = &self.prosperity_reports else { return };
        if reports.is_empty() {
            return;
        }
        ui.collapsing("Annual reports", |ui| {
            for r in &reports.rows {
                if let Some(title) = r.first() {
                    ui.label(format!("• {title}"));
                }
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("pages")
            .resizable(false)
            .show(ctx, |ui| {
                components::nav_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            let kind = page.kind();

            ui.heading(page.title());
            ui.add_space(4.0);

            if let Some(raw) = self.raw_data.get(&kind) {
                page.draw_summary(ui, &self.state, raw);
                ui.add_space(4.0);
            }

            let controls_changed = {
                let raw = self.raw_data.get(&kind);
                page.draw_controls(ui, &mut self.state, raw)
            };
            if controls_changed {
                self.rebuild_view();
            }

            if let Some(raw) = self.raw_data.get(&kind) {
                page.draw_chart(ui, &self.state, raw);
            }

            if kind == PageKind::Inflation {
                self.draw_press_links(ui);
            }
            if kind == PageKind::ProsperityIndex {
                self.draw_prosperity_reports(ui);
            }

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
