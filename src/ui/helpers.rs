// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Tarjeta de color con título y valor, para las estadísticas del mapa.
pub fn stat_tile(ui: &mut Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).small().weak());
            ui.label(RichText::new(value).heading().strong());
        });
    });
}

/// Insignia del panel de logros: a color si se ganó, apagada si no.
pub fn achievement_chip(ui: &mut Ui, name: &str, earned: bool) {
    let (icon, color) = if earned {
        ("🏆", Color32::from_rgb(234, 179, 8))
    } else {
        ("🔒", ui.visuals().weak_text_color())
    };
    ui.label(RichText::new(format!("{icon} {name}")).color(color));
}

pub fn feedback_color(correct: bool) -> Color32 {
    if correct {
        Color32::from_rgb(22, 163, 74)
    } else {
        Color32::from_rgb(220, 38, 38)
    }
}
