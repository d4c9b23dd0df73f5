// src/gui/components/summary.rs

// Metric tiles: label, big value, optional delta vs the previous
// observation. Rates going up paint the delta red, down green.

use eframe::egui::{self, Color32, RichText};

const DELTA_UP: Color32 = Color32::from_rgb(0xdc, 0x61, 0x49);
const DELTA_DOWN: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);

pub fn metric(ui: &mut egui::Ui, label: &str, value: &str, delta: Option<f64>) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).heading().strong());
        if let Some(d) = delta {
            let (txt, color) = if d > 0.0 {
                (format!("▲ {:+.2}", d), DELTA_UP)
            } else if d < 0.0 {
                (format!("▼ {:+.2}", d), DELTA_DOWN)
            } else {
                ("· 0.00".to_string(), ui.visuals().weak_text_color())
            };
            ui.label(RichText::new(txt).small().color(color));
        }
    });
}

pub fn metric_row(ui: &mut egui::Ui, tiles: &[(String, String, Option<f64>)]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 28.0;
        for (label, value, delta) in tiles {
            metric(ui, label, value, *delta);
        }
    });
}
