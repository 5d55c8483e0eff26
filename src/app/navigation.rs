use super::*;
use crate::model::View;
use crate::session::SlideStep;

impl GeoQuestApp {
    /// Mapa → Lección. Ignora niveles desconocidos o bloqueados.
    pub fn start_level(&mut self, id: u32) {
        if !self.progress.is_unlocked(id) {
            log::debug!("Ignoring start of locked or unknown level {id}");
            return;
        }
        if self.session.begin(id) {
            self.read_aloud.stop();
        }
    }

    pub fn advance_slide(&mut self) {
        let Some(id) = self.session.active_level else {
            return;
        };
        let Some(level) = self.progress.level(id) else {
            return;
        };
        if self.session.advance_slide(level) != SlideStep::Ignored {
            self.read_aloud.stop();
        }
    }

    pub fn previous_slide(&mut self) {
        if self.session.previous_slide() {
            self.read_aloud.stop();
        }
    }

    /// Vuelve al mapa desde cualquier vista. Salir antes de acabar una lección
    /// o un quiz lo abandona sin recompensas.
    pub fn return_to_map(&mut self) {
        if self.session.view == View::Map {
            return;
        }
        self.read_aloud.stop();
        self.session.reset();
    }

    /// Lee en voz alta la diapositiva actual, o para si ya se está leyendo.
    pub fn toggle_read_aloud(&mut self) {
        let (Some(key), Some(slide)) = (self.current_slide_key(), self.current_slide()) else {
            return;
        };
        let text = slide.narration();
        self.read_aloud.toggle(key, text);
    }
}
