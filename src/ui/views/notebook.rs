use crate::GeoQuestApp;
use crate::notebook::NotebookField;
use egui::{CollapsingHeader, Context, RichText, ScrollArea, TextEdit};

/// Cuaderno Cornell: claves, notas y resumen por nivel.
pub fn ui_notebook(app: &mut GeoQuestApp, ctx: &Context) {
    let mut open = app.notebook_open;
    let mut edits: Vec<(u32, NotebookField, String)> = Vec::new();
    let sheet = app.study_sheet();

    egui::Window::new("📓 Notebook")
        .open(&mut open)
        .default_width(420.0)
        .resizable(true)
        .show(ctx, |ui| {
            ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
                for level in app.progress.levels() {
                    let entry = app.notebook_entry(level.id).cloned().unwrap_or_default();
                    let active = app.session.active_level == Some(level.id);
                    CollapsingHeader::new(&level.title)
                        .id_salt(("notebook", level.id))
                        .default_open(active)
                        .show(ui, |ui| {
                            for field in NotebookField::ALL {
                                ui.label(RichText::new(field.label()).strong());
                                let mut text = entry.field(field).to_string();
                                let response = ui.add(
                                    TextEdit::multiline(&mut text)
                                        .desired_rows(2)
                                        .desired_width(f32::INFINITY),
                                );
                                if response.changed() {
                                    edits.push((level.id, field, text));
                                }
                            }
                        });
                }

                ui.separator();
                CollapsingHeader::new("Study sheet").show(ui, |ui| {
                    if sheet.is_empty() {
                        ui.label(RichText::new("Nothing written yet.").weak());
                    } else {
                        ui.label(&sheet);
                        if ui.button("📋 Copy").clicked() {
                            ui.ctx().copy_text(sheet.clone());
                        }
                    }
                });
            });
        });

    for (level_id, field, text) in edits {
        app.set_note(level_id, field, text);
    }
    app.notebook_open = open;
}
