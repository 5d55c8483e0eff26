mod diagram;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::GeoQuestApp;
use crate::model::View;
use crate::speech::PlaybackState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for GeoQuestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.read_aloud.poll();
        if let Some(notice) = self.read_aloud.take_notice() {
            self.notice = Some(notice);
        }

        // Cabecera con XP y rango, pie con tema y reinicio
        top_panel(self, ctx);
        bottom_panel(self, ctx);

        match self.session.view {
            View::Map => views::map::ui_map(self, ctx),
            View::Lesson => views::lesson::ui_lesson(self, ctx),
            View::Quiz => views::quiz::ui_quiz(self, ctx),
            View::Victory => views::victory::ui_victory(self, ctx),
        }

        if self.notebook_open {
            views::notebook::ui_notebook(self, ctx);
        }
        if self.confirm_reset {
            self.confirm_reset_dialog(ctx);
        }
        notice_window(self, ctx);

        if matches!(self.read_aloud.state(), PlaybackState::Loading(_) | PlaybackState::Playing(_)) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}

fn notice_window(app: &mut GeoQuestApp, ctx: &Context) {
    let Some(text) = app.notice.clone() else {
        return;
    };
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 48.0])
        .show(ctx, |ui| {
            ui.label(text);
            if ui.button("OK").clicked() {
                app.notice = None;
            }
        });
}
