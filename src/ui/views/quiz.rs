use crate::GeoQuestApp;
use crate::ui::helpers::feedback_color;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn ui_quiz(app: &mut GeoQuestApp, ctx: &Context) {
    let Some(question) = app.current_question().cloned() else {
        app.return_to_map();
        return;
    };
    let Some(level) = app.active_level() else {
        return;
    };
    let total = level.quiz.len();
    let is_last = app.session.is_last_question(level);
    let index = app.session.quiz_index;
    let feedback = app.session.feedback.clone();

    let mut picked = None;
    let mut advance = false;
    let mut leave = false;

    centered_panel(ctx, 460.0, 640.0, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Assessment").weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} / {}", index + 1, total));
            });
        });
        ui.add_space(8.0);
        ui.heading(&question.text);
        ui.add_space(12.0);

        let width = ui.available_width();
        for (i, option) in question.options.iter().enumerate() {
            let letter = OPTION_LETTERS.get(i).copied().unwrap_or('?');
            let mut text = RichText::new(format!("{letter}. {option}"));
            if let Some(fb) = &feedback {
                if i == question.correct_answer {
                    text = text.color(feedback_color(true)).strong();
                } else if !fb.correct {
                    text = text.weak();
                }
            }
            let button = Button::new(text).min_size(egui::vec2(width, 36.0));
            if ui.add_enabled(feedback.is_none(), button).clicked() {
                picked = Some(i);
            }
            ui.add_space(6.0);
        }

        if let Some(fb) = &feedback {
            ui.add_space(8.0);
            let title = if fb.correct { "✔ Correct" } else { "✖ Not quite" };
            ui.label(RichText::new(title).strong().color(feedback_color(fb.correct)));
            ui.label(&fb.message);
            ui.add_space(8.0);
            let label = if is_last { "Finish Assessment" } else { "Continue" };
            if ui.add_sized([width, 36.0], Button::new(label)).clicked() {
                advance = true;
            }
        }

        ui.add_space(8.0);
        if ui.button("Return to Map").clicked() {
            leave = true;
        }
    });

    if let Some(option) = picked {
        app.record_answer(option);
    }
    if advance {
        app.advance_quiz();
    }
    if leave {
        app.return_to_map();
    }
}
