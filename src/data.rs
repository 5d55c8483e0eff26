// src/data.rs

use crate::error::CatalogError;
use crate::model::Catalog;
use std::collections::HashSet;

const EMBEDDED_CATALOG: &str = include_str!("data/levels.yaml");

/// Carga el catálogo de niveles desde el YAML embebido
pub fn read_catalog_embedded() -> Catalog {
    parse_catalog(EMBEDDED_CATALOG).expect("No se pudo parsear el catálogo de niveles YAML")
}

pub fn parse_catalog(yaml: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    let invalid = |msg: String| Err(CatalogError::Invalid(msg));

    if catalog.levels.is_empty() {
        return invalid("no levels".into());
    }
    if catalog.rules.rank_xp_step == 0 {
        return invalid("rank_xp_step must be positive".into());
    }

    let mut level_ids = HashSet::new();
    for (i, level) in catalog.levels.iter().enumerate() {
        if level.id == 0 || !level_ids.insert(level.id) {
            return invalid(format!("level id {} is zero or duplicated", level.id));
        }
        if level.xp_value == 0 {
            return invalid(format!("level {} awards no XP", level.id));
        }
        if level.slides.is_empty() || level.quiz.is_empty() {
            return invalid(format!("level {} needs slides and questions", level.id));
        }
        // Solo el primer nivel arranca desbloqueado
        if level.unlocked != (i == 0) || level.completed {
            return invalid(format!("level {} has wrong initial flags", level.id));
        }

        let mut question_ids = HashSet::new();
        for q in &level.quiz {
            if !question_ids.insert(q.id) {
                return invalid(format!("question {} duplicated in level {}", q.id, level.id));
            }
            if q.options.len() < 2 {
                return invalid(format!("question {} needs at least two options", q.id));
            }
            if q.correct_answer >= q.options.len() {
                return invalid(format!("question {} correct answer out of range", q.id));
            }
        }
    }

    if !level_ids.contains(&catalog.rules.final_level) {
        return invalid(format!("final level {} not in catalog", catalog.rules.final_level));
    }
    for rule in &catalog.rules.unlocks {
        if let Some(bad) = std::iter::once(&rule.on_complete)
            .chain(rule.unlock.iter())
            .find(|id| !level_ids.contains(id))
        {
            return invalid(format!("unlock rule references unknown level {bad}"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BadgeCondition;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = read_catalog_embedded();
        assert_eq!(catalog.levels.len(), 6);
        assert!(catalog.levels[0].unlocked);
        assert!(catalog.levels[1..].iter().all(|l| !l.unlocked));
        assert_eq!(catalog.rules.final_level, 6);
        assert_eq!(catalog.level(6).map(|l| l.quiz.len()), Some(10));
    }

    #[test]
    fn embedded_catalog_carries_badge_table() {
        let catalog = read_catalog_embedded();
        let names: Vec<&str> = catalog.rules.badges.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Hero", "Master", "Architect"]);
        assert_eq!(
            catalog.rules.badges[0].when,
            BadgeCondition::XpAtLeast { xp: 500 }
        );
    }

    #[test]
    fn midpoint_question_answer_is_six_nine() {
        let catalog = read_catalog_embedded();
        let q = &catalog.level(5).expect("level 5").quiz[0];
        assert!(q.text.contains("(2, 6) and (10, 12)"));
        assert!(q.is_correct(2));
        assert_eq!(q.options[q.correct_answer], "(6, 9)");
    }

    fn catalog_with(level_yaml: &str) -> String {
        format!(
            "rules:\n  rank_xp_step: 200\n  final_level: 1\nlevels:\n{level_yaml}"
        )
    }

    #[test]
    fn rejects_out_of_range_correct_answer() {
        let yaml = catalog_with(
            r#"  - id: 1
    title: "L"
    description: "d"
    xpValue: 10
    unlocked: true
    slides: [{ title: "s", content: "c" }]
    quiz:
      - { id: 1, text: "q", options: ["a", "b"], correctAnswer: 2, explanation: "e" }
"#,
        );
        assert!(matches!(parse_catalog(&yaml), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn rejects_level_without_questions() {
        let yaml = catalog_with(
            r#"  - id: 1
    title: "L"
    description: "d"
    xpValue: 10
    unlocked: true
    slides: [{ title: "s", content: "c" }]
    quiz: []
"#,
        );
        assert!(matches!(parse_catalog(&yaml), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn rejects_duplicate_level_ids() {
        let yaml = catalog_with(
            r#"  - id: 1
    title: "L"
    description: "d"
    xpValue: 10
    unlocked: true
    slides: [{ title: "s", content: "c" }]
    quiz:
      - { id: 1, text: "q", options: ["a", "b"], correctAnswer: 0, explanation: "e" }
  - id: 1
    title: "Otra"
    description: "d"
    xpValue: 10
    slides: [{ title: "s", content: "c" }]
    quiz:
      - { id: 2, text: "q", options: ["a", "b"], correctAnswer: 1, explanation: "e" }
"#,
        );
        let err = parse_catalog(&yaml).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicated"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(parse_catalog("levels: [::"), Err(CatalogError::Parse(_))));
    }
}
