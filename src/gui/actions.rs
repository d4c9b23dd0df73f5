// src/gui/actions.rs
//
// Button "executive" actions for the export bar. Layout stays in
// export_bar.rs; the operational logic lives here and mutates `app`
// (status line, canonical data) as needed.

use eframe::egui;
use tracing::{error, info};

use crate::config::consts::{PRESS_LINKS_FILE, PROSPERITY_REPORTS_FILE};
use crate::config::options::PageKind;
use crate::file;
use crate::gui::app::App;
use crate::gui::pages::Page;
use crate::gui::progress::GuiProgress;
use crate::store::{self, DataSet};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.current_page();

    let Some(raw) = app.current_raw() else {
        app.status("Nothing to copy (no cached data)");
        return;
    };
    let (h, r) = page.view_for_export(&app.state, &raw.headers, &raw.rows);
    if r.is_empty() {
        app.status("Nothing to copy");
        return;
    }

    info!(page = ?page.kind(), rows = r.len(), "copy to clipboard");
    let txt = file::to_export_string(&app.state.options.export, &h, &r);
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

pub fn export(app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();

    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
    }

    let Some(raw) = app.current_raw() else {
        app.status("Nothing to export (no cached data)");
        return;
    };
    let (h, r) = page.view_for_export(&app.state, &raw.headers, &raw.rows);
    if r.is_empty() {
        app.status("Nothing to export");
        return;
    }

    info!(page = ?kind, rows = r.len(), "export begin");
    match file::export_dataset(&app.state.options.export, &h, &r, page.series_column()) {
        Ok(paths) => match paths.last() {
            Some(last) => {
                info!(count = paths.len(), last = %last.display(), "export ok");
                app.status(format!(
                    "Exported {} file(s). Last: {}",
                    paths.len(),
                    last.display()
                ));
            }
            None => app.status("Export done"),
        },
        Err(e) => {
            error!("export failed: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn scrape(app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();

    // Keep scrape options aligned
    app.state.options.scrape.page = kind;

    info!(page = ?kind, "scrape begin");
    let mut prog = GuiProgress::new(app.status.clone());
    let ds_res = page.scrape(&app.state, Some(&mut prog));

    match ds_res {
        Ok(new_ds) => {
            info!(
                page = ?kind,
                rows = new_ds.row_count(),
                headers = new_ds.header_count(),
                "scrape ok"
            );

            let entry = app.raw_data.entry(kind).or_insert_with(DataSet::default);
            page.merge(entry, new_ds);

            match store::save_dataset(&kind, entry) {
                Ok(p) => info!(page = ?kind, path = %p.display(), "cache saved"),
                Err(e) => error!(page = ?kind, "cache save failed: {e}"),
            }

            // Scrapes that write side files refresh them in the app too.
            if kind == PageKind::Inflation {
                app.press_links = store::load_named(PRESS_LINKS_FILE).ok();
            }
            if kind == PageKind::ProsperityIndex {
                app.prosperity_reports = store::load_named(PROSPERITY_REPORTS_FILE).ok();
            }

            app.rebuild_view();
            app.status("Ready");
        }
        Err(e) => {
            error!(page = ?kind, "scrape failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
