use super::*;
use crate::notebook::NotebookField;
use crate::session::QuizStep;

impl GeoQuestApp {
    /// Una respuesta por pregunta; lo demás se ignora.
    pub fn record_answer(&mut self, option: usize) {
        let Some(id) = self.session.active_level else {
            return;
        };
        let Some(level) = self.progress.level(id) else {
            return;
        };
        if self.session.answer(level, option) {
            if let Some(fb) = &self.session.feedback {
                log::debug!(
                    "Level {id} question {}: option {option} correct={}",
                    self.session.quiz_index + 1,
                    fb.correct
                );
            }
        }
    }

    pub fn advance_quiz(&mut self) {
        let Some(id) = self.session.active_level else {
            return;
        };
        let Some(level) = self.progress.level(id) else {
            return;
        };
        if self.session.advance_question(level) == QuizStep::Finished {
            self.complete_level();
        }
    }

    pub fn set_note(&mut self, level_id: u32, field: NotebookField, text: impl Into<String>) {
        self.progress
            .profile_mut()
            .notebook
            .set_field(level_id, field, text);
        self.commit();
    }
}
