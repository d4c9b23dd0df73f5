// src/gui/components/nav_panel.rs
//
// Left navigation: one entry per page, with cached row counts. Switching
// pages migrates the default export directory unless the user typed a
// custom path.

use eframe::egui::{self, RichText};
use tracing::info;

use crate::gui::pages::Page;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.heading("CBSL Data");
    ui.separator();

    let cur = app.current_index();
    let mut clicked: Option<usize> = None;

    for (idx, page) in router::all_pages().iter().enumerate() {
        let selected = idx == cur;
        let rows = app
            .raw_data
            .get(&page.kind())
            .map(|ds| ds.row_count())
            .unwrap_or(0);

        let label = if rows > 0 {
            format!("{}  ({rows})", page.title())
        } else {
            page.title().to_string()
        };
        if ui.selectable_label(selected, label).clicked() && !selected {
            clicked = Some(idx);
        }
    }

    if let Some(idx) = clicked {
        let prev = app.current_page_kind();
        app.set_current_index(idx);
        let new_kind = app.current_page_kind();
        info!("tab switch {:?} → {:?}", prev, new_kind);

        app.state.options.scrape.page = new_kind;
        if !app.out_path_dirty {
            app.state.options.export.set_default_dir_for_page(new_kind);
            app.out_path_text = app
                .state
                .options
                .export
                .out_path()
                .to_string_lossy()
                .into_owned();
        }
        app.rebuild_view();
    }

    ui.separator();
    ui.label(RichText::new("Cache: data/").small().weak());
    ui.label(
        RichText::new("Scrapes run on demand; cached CSVs load at startup.")
            .small()
            .weak(),
    );
}
