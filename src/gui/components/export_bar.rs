// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::debug;

use crate::config::options::{
    ExportFormat,
    ExportType::{PerSeries, SingleFile},
};
use crate::gui::pages::Page;
use crate::gui::{actions, app::App};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat {
    Csv,
    Tsv,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let series_col = app.current_page().series_column();

    {
        let export = &mut app.state.options.export;

        // --- Format + headers toggle ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            ui.separator();
            ui.checkbox(&mut export.include_headers, "Include headers");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            debug!("export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Per-series toggle + output field ---
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        if series_col.is_some() {
            let mut single = matches!(export.export_type, SingleFile);
            if ui.checkbox(&mut single, "All series in one file").changed() {
                export.export_type = if single { SingleFile } else { PerSeries };
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
                debug!("export type → {:?}", export.export_type);
            }
        } else {
            export.export_type = SingleFile;
            ui.label("All series in one file");
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }
    });

    // --- Actions (Copy / Export / SCRAPE) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        if ui
            .add(
                egui::Button::new(
                    egui::RichText::new("SCRAPE")
                        .color(egui::Color32::BLACK)
                        .strong(),
                )
                .fill(red),
            )
            .clicked()
        {
            actions::scrape(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(format!("Status: {status}"));
    });
}
