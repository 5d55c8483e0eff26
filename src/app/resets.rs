use super::*;

pub const RESET_PROMPT: &str =
    "Are you sure you want to reset your progress? This will clear all XP, levels, and badges.";

impl GeoQuestApp {
    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirm_reset = false;
    }

    /// Borra ambos registros y vuelve al estado de primera ejecución.
    pub fn reset_all(&mut self) {
        self.read_aloud.stop();
        for key in [&self.config.profile_key, &self.config.levels_key] {
            if let Err(e) = self.persistence.remove(key) {
                log::warn!("Failed to remove {key}: {e}");
            }
        }
        self.progress.reset(&self.catalog);
        self.session.reset();
        self.confirm_reset = false;
        self.notebook_open = false;
        log::info!("Progress reset");
    }

    pub fn confirm_reset_dialog(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset progress")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RESET_PROMPT);
                ui.horizontal(|ui| {
                    if ui.button("Yes, reset").clicked() {
                        self.reset_all();
                    }
                    if ui.button("No").clicked() {
                        self.cancel_reset();
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::{fresh_app, play_level};
    use crate::model::View;
    use crate::notebook::NotebookField;
    use crate::session::SessionState;

    #[test]
    fn reset_clears_records_and_restores_first_run() {
        let mut app = fresh_app();
        play_level(&mut app, 1);
        app.set_note(1, NotebookField::Cues, "undefined terms");
        app.request_reset();
        assert!(app.confirm_reset);

        app.reset_all();

        assert!(!app.confirm_reset);
        assert_eq!(app.session, SessionState::default());
        assert_eq!(app.progress.profile().xp, 0);
        assert_eq!(app.progress.profile().level, 1);
        assert!(app.progress.profile().badges.is_empty());
        assert!(app.notebook().is_empty());
        assert!(app.progress.is_unlocked(1));
        assert!(!app.progress.is_unlocked(2));
        let store = app.persistence().store();
        assert_eq!(store.get("geoquest_user_v1").expect("get"), None);
        assert_eq!(store.get("geoquest_levels_v1").expect("get"), None);
    }

    #[test]
    fn cancel_keeps_progress() {
        let mut app = fresh_app();
        play_level(&mut app, 1);
        app.request_reset();
        app.cancel_reset();

        assert!(!app.confirm_reset);
        assert_eq!(app.progress.profile().xp, 100);
        assert_eq!(app.session.view, View::Victory);
    }
}
