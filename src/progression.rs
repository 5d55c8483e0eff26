use std::collections::HashMap;

use crate::model::{BadgeCondition, Catalog, Level, ProgressionRules, UserProfile};

/// Lo que cambió una llamada a [`Progress::complete_level`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionReport {
    pub level_id: u32,
    pub first_time: bool,
    pub xp_awarded: u32,
    pub badges_awarded: Vec<String>,
    pub newly_unlocked: Vec<u32>,
}

/// Estado de progreso: el perfil del usuario y las banderas de cada nivel.
#[derive(Clone, Debug)]
pub struct Progress {
    profile: UserProfile,
    levels: Vec<Level>,
    rules: ProgressionRules,
}

impl Progress {
    /// Estado de primera ejecución a partir del catálogo.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            profile: UserProfile::default(),
            levels: catalog.levels.clone(),
            rules: catalog.rules.clone(),
        }
    }

    /// Reconstruye el estado desde los registros guardados.
    ///
    /// El contenido sale siempre del catálogo; de los niveles guardados sólo se
    /// toman `unlocked`/`completed`. Después las banderas se recalculan desde
    /// `completed_levels`: un nivel está completado sólo si el perfil lo dice.
    pub fn restore(
        catalog: &Catalog,
        mut profile: UserProfile,
        stored_levels: Option<&[Level]>,
    ) -> Self {
        let mut progress = Self::new(catalog);

        dedup_in_place(&mut profile.badges);
        dedup_in_place(&mut profile.completed_levels);
        profile.level = progress.rank_for(profile.xp);
        progress.profile = profile;

        if let Some(stored) = stored_levels {
            let flags: HashMap<u32, (bool, bool)> = stored
                .iter()
                .map(|l| (l.id, (l.unlocked, l.completed)))
                .collect();
            for level in &mut progress.levels {
                if let Some(&(unlocked, completed)) = flags.get(&level.id) {
                    level.unlocked |= unlocked;
                    level.completed = completed;
                }
            }
        }

        let completed = progress.profile.completed_levels.clone();
        for level in &mut progress.levels {
            if level.completed && !completed.contains(&level.id) {
                log::warn!("Level {} flagged completed without a profile record", level.id);
                level.completed = false;
            }
        }
        for id in completed {
            if let Some(level) = progress.level_mut(id) {
                level.completed = true;
                progress.unlock_after(id);
            }
        }
        if let Some(first) = progress.levels.first_mut() {
            first.unlocked = true;
        }

        progress
    }

    pub fn reset(&mut self, catalog: &Catalog) {
        *self = Self::new(catalog);
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub(crate) fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn rules(&self) -> &ProgressionRules {
        &self.rules
    }

    pub fn level(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    fn level_mut(&mut self, id: u32) -> Option<&mut Level> {
        self.levels.iter_mut().find(|l| l.id == id)
    }

    pub fn is_unlocked(&self, id: u32) -> bool {
        self.level(id).map(|l| l.unlocked).unwrap_or(false)
    }

    pub fn rank_for(&self, xp: u32) -> u32 {
        xp / self.rules.rank_xp_step + 1
    }

    /// Niveles que abre completar `id`: el siguiente hasta el nivel final, más
    /// los desbloqueos extra de la tabla de reglas.
    pub fn unlock_targets(&self, id: u32) -> Vec<u32> {
        let mut targets = Vec::new();
        if id < self.rules.final_level && self.level(id + 1).is_some() {
            targets.push(id + 1);
        }
        for rule in self.rules.unlocks.iter().filter(|r| r.on_complete == id) {
            for &target in &rule.unlock {
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
        }
        targets
    }

    fn unlock_after(&mut self, id: u32) -> Vec<u32> {
        let mut opened = Vec::new();
        for target in self.unlock_targets(id) {
            if let Some(level) = self.level_mut(target) {
                if !level.unlocked {
                    level.unlocked = true;
                    opened.push(target);
                }
            }
        }
        opened
    }

    /// Aplica las reglas al completar `id`. Sólo recompensa la primera vez.
    ///
    /// Devuelve `None` si el nivel no está en el catálogo.
    pub fn complete_level(&mut self, id: u32) -> Option<CompletionReport> {
        let xp_value = self.level(id)?.xp_value;

        if self.profile.has_completed(id) {
            return Some(CompletionReport {
                level_id: id,
                first_time: false,
                xp_awarded: 0,
                badges_awarded: Vec::new(),
                newly_unlocked: Vec::new(),
            });
        }

        self.profile.xp = self.profile.xp.saturating_add(xp_value);
        self.profile.completed_levels.push(id);
        self.profile.level = self.rank_for(self.profile.xp);
        if let Some(level) = self.level_mut(id) {
            level.completed = true;
        }

        let badges_awarded = self.award_badges();
        let newly_unlocked = self.unlock_after(id);

        log::info!(
            "Level {id} completed: +{xp_value} XP (total {}), badges {:?}, unlocked {:?}",
            self.profile.xp,
            badges_awarded,
            newly_unlocked
        );

        Some(CompletionReport {
            level_id: id,
            first_time: true,
            xp_awarded: xp_value,
            badges_awarded,
            newly_unlocked,
        })
    }

    fn award_badges(&mut self) -> Vec<String> {
        let mut awarded = Vec::new();
        for rule in &self.rules.badges {
            if self.profile.has_badge(&rule.name) {
                continue;
            }
            let earned = match rule.when {
                BadgeCondition::XpAtLeast { xp } => self.profile.xp >= xp,
                BadgeCondition::CompletedLevel { level } => self.profile.has_completed(level),
            };
            if earned {
                self.profile.badges.push(rule.name.clone());
                awarded.push(rule.name.clone());
            }
        }
        awarded
    }
}

fn dedup_in_place<T: PartialEq + Clone>(items: &mut Vec<T>) {
    let mut seen: Vec<T> = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(item.clone());
            true
        }
    });
}
