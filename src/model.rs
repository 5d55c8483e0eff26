use serde::{Deserialize, Serialize};

use crate::notebook::Notebook;

/// Referencia simbólica al diagrama; sólo la vista sabe dibujarlo.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Diagram {
    PointLinePlane,
    SegmentDerivation,
    AngleDefinition,
    MidpointVisualization,
    ParallelPerpendicular,
    CoordinateMidpoint,
    GeometryMashup,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: String,
    pub content: String, // Cuerpo del slide
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<Diagram>,
}

impl Slide {
    /// Texto para el backend de voz: título, cuerpo y viñetas, uno por línea.
    pub fn narration(&self) -> String {
        let mut parts = Vec::with_capacity(2 + self.bullets.len());
        parts.push(self.title.trim());
        parts.push(self.content.trim());
        parts.extend(self.bullets.iter().map(|b| b.trim()));
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize, // índice dentro de options
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub xp_value: u32,
    pub slides: Vec<Slide>,
    pub quiz: Vec<Question>,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub completed: bool,
}

/// Condición para ganar una insignia.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeCondition {
    XpAtLeast { xp: u32 },
    CompletedLevel { level: u32 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BadgeRule {
    pub name: String,
    pub when: BadgeCondition,
}

/// Desbloqueos extra además de la regla secuencial "N desbloquea N+1".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UnlockRule {
    pub on_complete: u32,
    pub unlock: Vec<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProgressionRules {
    pub rank_xp_step: u32,
    pub final_level: u32,
    #[serde(default)]
    pub unlocks: Vec<UnlockRule>,
    #[serde(default)]
    pub badges: Vec<BadgeRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Catalog {
    pub levels: Vec<Level>,
    pub rules: ProgressionRules,
}

impl Catalog {
    pub fn level(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub xp: u32,
    #[serde(default = "first_rank")]
    pub level: u32, // rango derivado de xp
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub completed_levels: Vec<u32>,
    // Los perfiles antiguos no traen cuaderno
    #[serde(default)]
    pub notebook: Notebook,
}

fn first_rank() -> u32 {
    1
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            xp: 0,
            level: first_rank(),
            badges: Vec::new(),
            completed_levels: Vec::new(),
            notebook: Notebook::default(),
        }
    }
}

impl UserProfile {
    pub fn has_badge(&self, name: &str) -> bool {
        self.badges.iter().any(|b| b == name)
    }

    pub fn has_completed(&self, level_id: u32) -> bool {
        self.completed_levels.contains(&level_id)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Map,
    Lesson,
    Quiz,
    Victory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub message: String,
}
