use crate::model::{Feedback, Level, View};
use crate::progression::CompletionReport;

pub const SUCCESS_MESSAGE: &str = "Excellent! Perfect understanding.";

/// Resultado de avanzar en una lección.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideStep {
    Next,
    QuizStarted,
    Ignored,
}

/// Resultado de avanzar en un quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStep {
    Next,
    Finished,
    Ignored,
}

/// Estado de navegación de la sesión. Nunca se guarda.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub view: View,
    pub active_level: Option<u32>,
    pub slide_index: usize,
    pub quiz_index: usize,
    pub score: u32,
    pub feedback: Option<Feedback>,
    pub last_completion: Option<CompletionReport>,
}

impl SessionState {
    /// Mapa → Lección. Quien llama comprueba que el nivel esté desbloqueado.
    pub fn begin(&mut self, level_id: u32) -> bool {
        if self.view != View::Map {
            return false;
        }
        *self = SessionState {
            view: View::Lesson,
            active_level: Some(level_id),
            ..SessionState::default()
        };
        true
    }

    pub fn advance_slide(&mut self, level: &Level) -> SlideStep {
        if self.view != View::Lesson {
            return SlideStep::Ignored;
        }
        if self.slide_index + 1 < level.slides.len() {
            self.slide_index += 1;
            SlideStep::Next
        } else {
            self.view = View::Quiz;
            self.quiz_index = 0;
            self.score = 0;
            self.feedback = None;
            SlideStep::QuizStarted
        }
    }

    pub fn previous_slide(&mut self) -> bool {
        if self.view != View::Lesson || self.slide_index == 0 {
            return false;
        }
        self.slide_index -= 1;
        true
    }

    /// Acepta una sola respuesta por pregunta. Devuelve si se aceptó.
    pub fn answer(&mut self, level: &Level, option: usize) -> bool {
        if self.view != View::Quiz || self.feedback.is_some() {
            return false;
        }
        let Some(question) = level.quiz.get(self.quiz_index) else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }

        let correct = question.is_correct(option);
        let message = if correct {
            SUCCESS_MESSAGE.to_string()
        } else {
            question.explanation.clone()
        };
        if correct {
            self.score += 1;
        }
        self.feedback = Some(Feedback { correct, message });
        true
    }

    /// Limpia el feedback y pasa a la siguiente pregunta, o indica que el quiz
    /// terminó si era la última.
    pub fn advance_question(&mut self, level: &Level) -> QuizStep {
        if self.view != View::Quiz || self.feedback.is_none() {
            return QuizStep::Ignored;
        }
        self.feedback = None;
        if self.quiz_index + 1 < level.quiz.len() {
            self.quiz_index += 1;
            QuizStep::Next
        } else {
            QuizStep::Finished
        }
    }

    pub fn finish(&mut self, report: Option<CompletionReport>) {
        self.feedback = None;
        self.last_completion = report;
        self.view = View::Victory;
    }

    /// Vuelta al mapa; todo lo demás a sus valores por defecto.
    pub fn reset(&mut self) {
        *self = SessionState::default();
    }

    pub fn is_last_slide(&self, level: &Level) -> bool {
        self.slide_index + 1 >= level.slides.len()
    }

    pub fn is_last_question(&self, level: &Level) -> bool {
        self.quiz_index + 1 >= level.quiz.len()
    }
}
