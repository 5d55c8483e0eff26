use crate::GeoQuestApp;
use crate::speech::PlaybackState;
use crate::ui::diagram::draw_diagram;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, Context, RichText};

enum Action {
    Previous,
    Next,
    ReadAloud,
    Map,
}

pub fn ui_lesson(app: &mut GeoQuestApp, ctx: &Context) {
    let Some(slide) = app.current_slide().cloned() else {
        app.return_to_map();
        return;
    };
    let Some(level) = app.active_level() else {
        return;
    };
    let level_title = level.title.clone();
    let total = level.slides.len();
    let is_last = app.session.is_last_slide(level);
    let index = app.session.slide_index;
    let reading = app
        .current_slide_key()
        .map(|k| app.read_aloud.is_active_for(k))
        .unwrap_or(false);
    let loading = matches!(app.read_aloud.state(), PlaybackState::Loading(_));

    let mut action = None;
    centered_panel(ctx, 520.0, 680.0, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&level_title).weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} / {}", index + 1, total));
            });
        });
        ui.add_space(8.0);
        ui.heading(&slide.title);
        ui.add_space(8.0);
        ui.label(&slide.content);

        if !slide.bullets.is_empty() {
            ui.add_space(8.0);
            for bullet in &slide.bullets {
                ui.label(format!("• {bullet}"));
            }
        }
        if let Some(diagram) = slide.diagram {
            ui.add_space(12.0);
            draw_diagram(ui, diagram);
        }

        ui.add_space(16.0);
        let read_label = if loading {
            "⏳ Loading…"
        } else if reading {
            "⏹ Stop reading"
        } else {
            "🔊 Read aloud"
        };
        if ui.add(Button::new(read_label)).clicked() {
            action = Some(Action::ReadAloud);
        }

        ui.add_space(12.0);
        let width = ui.available_width();
        let next_label = if is_last { "Start Assessment" } else { "Next ▶" };
        let (prev, next) = two_button_row(ui, width, ("◀ Previous", index > 0), (next_label, true));
        if prev {
            action = Some(Action::Previous);
        }
        if next {
            action = Some(Action::Next);
        }

        ui.add_space(8.0);
        if ui.button("Return to Map").clicked() {
            action = Some(Action::Map);
        }
    });

    match action {
        Some(Action::Previous) => app.previous_slide(),
        Some(Action::Next) => app.advance_slide(),
        Some(Action::ReadAloud) => app.toggle_read_aloud(),
        Some(Action::Map) => app.return_to_map(),
        None => {}
    }
}
