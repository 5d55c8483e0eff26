use crate::GeoQuestApp;
use crate::ui::helpers::{achievement_chip, big_list_button, stat_tile};
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_map(app: &mut GeoQuestApp, ctx: &Context) {
    let cards = app.level_cards();
    let achievements = app.achievements();
    let (done, total) = app.units_cleared();
    let mut selected = None;

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let max_width = 640.0;
            let content_width = ui.available_width().min(max_width);
            ui.vertical_centered(|ui| {
                ui.set_width(content_width);
                ui.heading("Learning Path");
                ui.label(RichText::new("Complete each unit to unlock the next one.").weak());
                ui.add_space(16.0);

                for card in &cards {
                    let label = format!("{}  ·  +{} XP", card.label(), card.xp_value);
                    let clicked = big_list_button(ui, label, content_width, 44.0, card.unlocked);
                    let hint = if card.unlocked {
                        card.description.clone()
                    } else {
                        "Complete the previous unit to unlock".to_string()
                    };
                    ui.label(RichText::new(hint).small().weak());
                    if clicked {
                        selected = Some(card.id);
                    }
                    ui.add_space(8.0);
                }

                ui.add_space(16.0);
                ui.separator();
                ui.heading("Achievement Vault");
                ui.horizontal_wrapped(|ui| {
                    for a in &achievements {
                        achievement_chip(ui, a.name, a.earned);
                        ui.add_space(12.0);
                    }
                });

                ui.add_space(16.0);
                ui.heading("Mission Stats");
                ui.horizontal(|ui| {
                    stat_tile(ui, "Rank", app.rank_title().to_string());
                    stat_tile(ui, "Units Clear", format!("{done}/{total}"));
                    stat_tile(ui, "Badges", app.progress.profile().badges.len().to_string());
                });
            });
        });
    });

    if let Some(id) = selected {
        app.start_level(id);
    }
}
