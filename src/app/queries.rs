use super::*;
use crate::model::{Level, Question, Slide, View};
use crate::notebook::{Notebook, NotebookEntry};
use crate::speech::SlideKey;

impl GeoQuestApp {
    pub fn active_level(&self) -> Option<&Level> {
        self.session
            .active_level
            .and_then(|id| self.progress.level(id))
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        if self.session.view != View::Lesson {
            return None;
        }
        self.active_level()?.slides.get(self.session.slide_index)
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.session.view != View::Quiz {
            return None;
        }
        self.active_level()?.quiz.get(self.session.quiz_index)
    }

    /// Identidad de la diapositiva en pantalla, sólo durante la lección
    pub fn current_slide_key(&self) -> Option<SlideKey> {
        if self.session.view != View::Lesson {
            return None;
        }
        let level_id = self.session.active_level?;
        Some(SlideKey {
            level_id,
            slide_index: self.session.slide_index,
        })
    }

    pub fn notebook(&self) -> &Notebook {
        &self.progress.profile().notebook
    }

    pub fn notebook_entry(&self, level_id: u32) -> Option<&NotebookEntry> {
        self.notebook().entry(level_id)
    }

    /// Hoja de estudio con los campos no vacíos agrupados por nivel.
    pub fn study_sheet(&self) -> String {
        self.notebook().compiled(self.progress.levels())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::fresh_app;
    use crate::notebook::NotebookField;

    #[test]
    fn slide_and_question_follow_the_view() {
        let mut app = fresh_app();
        assert!(app.current_slide().is_none());
        assert!(app.current_slide_key().is_none());

        app.start_level(1);
        let first = app.current_slide().expect("slide").title.clone();
        assert_eq!(first, app.catalog.levels[0].slides[0].title);
        assert!(app.current_question().is_none());

        while app.current_slide().is_some() {
            app.advance_slide();
        }
        assert!(app.current_question().is_some());
        assert!(app.current_slide_key().is_none());
    }

    #[test]
    fn study_sheet_lists_only_filled_levels() {
        let mut app = fresh_app();
        app.set_note(2, NotebookField::Notes, "an angle is two rays");

        let sheet = app.study_sheet();
        assert!(sheet.contains("an angle is two rays"));
        assert!(sheet.contains(&app.catalog.levels[1].title));
        assert!(!sheet.contains(&app.catalog.levels[0].title));
    }
}
