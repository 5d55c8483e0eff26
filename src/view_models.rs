// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub xp_value: u32,
    pub unlocked: bool,
    pub completed: bool,
    pub is_final: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub earned: bool,
}

impl LevelCard {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} ✅", self.title)
        } else if self.unlocked {
            if self.is_final {
                format!("{} 🛡", self.title)
            } else {
                format!("{} 🔓", self.title)
            }
        } else {
            format!("{} 🔒", self.title)
        }
    }
}

/// Título del rango según el nivel derivado de la XP
pub fn rank_title(rank_level: u32) -> &'static str {
    if rank_level < 3 {
        "Novice"
    } else if rank_level < 5 {
        "Elite"
    } else {
        "Grand Architect"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_titles_by_tier() {
        assert_eq!(rank_title(1), "Novice");
        assert_eq!(rank_title(3), "Elite");
        assert_eq!(rank_title(5), "Grand Architect");
    }

    #[test]
    fn label_reflects_lock_state() {
        let mut card = LevelCard {
            id: 2,
            title: "Level 2: Rays & Angles".into(),
            description: String::new(),
            xp_value: 150,
            unlocked: false,
            completed: false,
            is_final: false,
        };
        assert!(card.label().ends_with('🔒'));
        card.unlocked = true;
        assert!(card.label().ends_with('🔓'));
        card.completed = true;
        assert!(card.label().ends_with('✅'));
    }
}
