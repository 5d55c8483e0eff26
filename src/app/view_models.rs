use super::*;
use crate::view_models::rank_title;

impl GeoQuestApp {
    pub fn level_cards(&self) -> Vec<LevelCard> {
        let final_level = self.progress.rules().final_level;
        self.progress
            .levels()
            .iter()
            .map(|l| LevelCard {
                id: l.id,
                title: l.title.clone(),
                description: l.description.clone(),
                xp_value: l.xp_value,
                unlocked: l.unlocked,
                completed: l.completed,
                is_final: l.id == final_level,
            })
            .collect()
    }

    /// Logros del panel; sólo se muestran, no se guardan
    pub fn achievements(&self) -> Vec<Achievement> {
        let profile = self.progress.profile();
        let done = profile.completed_levels.len();
        vec![
            Achievement {
                name: "Beginner",
                earned: done >= 1,
            },
            Achievement {
                name: "Explorer",
                earned: done >= 3,
            },
            Achievement {
                name: "Master",
                earned: profile.has_badge("Master"),
            },
            Achievement {
                name: "Grand Arch",
                earned: profile.has_badge("Architect"),
            },
        ]
    }

    pub fn rank_title(&self) -> &'static str {
        rank_title(self.progress.profile().level)
    }

    /// Fracción recorrida hacia el siguiente rango.
    pub fn xp_progress(&self) -> f32 {
        let step = self.progress.rules().rank_xp_step.max(1);
        (self.progress.profile().xp % step) as f32 / step as f32
    }

    pub fn units_cleared(&self) -> (usize, usize) {
        (
            self.progress.profile().completed_levels.len(),
            self.progress.levels().len(),
        )
    }
}
