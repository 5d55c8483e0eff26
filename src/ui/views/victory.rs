use crate::GeoQuestApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_victory(app: &mut GeoQuestApp, ctx: &Context) {
    let is_final = app.session.active_level == Some(app.progress.rules().final_level);
    let total = app.active_level().map(|l| l.quiz.len()).unwrap_or(0);
    let score = app.session.score;
    let rewards = app.fresh_rewards().cloned();
    let mut leave = false;

    centered_panel(ctx, 360.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            let title = if is_final { "🎓 Certified!" } else { "⭐ Level Up!" };
            ui.heading(RichText::new(title).size(32.0).strong());
            ui.add_space(8.0);
            ui.label(format!("Score: {score} / {total}"));

            match &rewards {
                Some(r) => {
                    ui.label(
                        RichText::new(format!("+{} XP", r.xp_awarded))
                            .size(24.0)
                            .color(Color32::from_rgb(234, 179, 8)),
                    );
                    for badge in &r.badges_awarded {
                        ui.label(RichText::new(format!("🏅 New badge: {badge}")).strong());
                    }
                    if !r.newly_unlocked.is_empty() {
                        let ids: Vec<String> =
                            r.newly_unlocked.iter().map(|id| id.to_string()).collect();
                        ui.label(format!("Unlocked level {}", ids.join(", ")));
                    }
                }
                None => {
                    ui.label(RichText::new("Already cleared: no new XP this time.").weak());
                }
            }

            ui.add_space(16.0);
            let width = ui.available_width();
            if ui.add_sized([width, 36.0], Button::new("Return to Map")).clicked() {
                leave = true;
            }
        });
    });

    if leave {
        app.return_to_map();
    }
}
