use crate::GeoQuestApp;
use egui::{Button, CentralPanel, Context, Frame, ProgressBar, RichText, Ui, Visuals};

/// Marca el indicador "Syncing…" durante un rato tras cada guardado.
fn syncing(app: &mut GeoQuestApp, ctx: &Context) -> bool {
    let now = ctx.input(|i| i.time);
    if app.sync_generation != app.sync_seen {
        app.sync_seen = app.sync_generation;
        app.sync_until = now + app.config.sync_indicator_secs;
    }
    let active = now < app.sync_until;
    if active {
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(app.sync_until - now));
    }
    active
}

pub fn top_panel(app: &mut GeoQuestApp, ctx: &Context) {
    let sync = syncing(app, ctx);
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("📐 GeoQuest").heading().strong());
            if sync {
                ui.add(egui::Spinner::new().size(12.0));
                ui.label(RichText::new("Syncing…").small().weak());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if app.notebook_open { "📓 Close notebook" } else { "📓 Notebook" };
                if ui.button(label).clicked() {
                    app.notebook_open = !app.notebook_open;
                }
                ui.separator();
                ui.label(RichText::new(format!("LVL {}", app.progress.profile().level)).strong());
                ui.label(format!("{} XP", app.progress.profile().xp));
                ui.add(
                    ProgressBar::new(app.xp_progress())
                        .desired_width(120.0)
                        .show_percentage(),
                );
            });
        });
    });
}

pub fn bottom_panel(app: &mut GeoQuestApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("🔄 Reset progress").clicked() {
                app.request_reset();
            }
            ui.label(RichText::new("GeoQuest · Geometry foundations").small().weak());

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    app.prefs.dark_mode = true;
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    app.prefs.dark_mode = false;
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho); un botón deshabilitado nunca cuenta.
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
