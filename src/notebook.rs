use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Level;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NotebookEntry {
    #[serde(default)]
    pub cues: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub summary: String,
}

impl NotebookEntry {
    pub fn field(&self, field: NotebookField) -> &str {
        match field {
            NotebookField::Cues => &self.cues,
            NotebookField::Notes => &self.notes,
            NotebookField::Summary => &self.summary,
        }
    }

    pub fn is_blank(&self) -> bool {
        NotebookField::ALL
            .iter()
            .all(|f| self.field(*f).trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotebookField {
    Cues,
    Notes,
    Summary,
}

impl NotebookField {
    pub const ALL: [NotebookField; 3] = [
        NotebookField::Cues,
        NotebookField::Notes,
        NotebookField::Summary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotebookField::Cues => "Cues",
            NotebookField::Notes => "Notes",
            NotebookField::Summary => "Summary",
        }
    }
}

/// Apuntes por nivel, indexados por id.
///
/// Se serializa como objeto JSON con los ids como claves de texto.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Notebook(BTreeMap<u32, NotebookEntry>);

impl Notebook {
    pub fn entry(&self, level_id: u32) -> Option<&NotebookEntry> {
        self.0.get(&level_id)
    }

    /// Sobrescribe un campo; si la entrada no existe la crea vacía.
    pub fn set_field(&mut self, level_id: u32, field: NotebookField, text: impl Into<String>) {
        let entry = self.0.entry(level_id).or_default();
        let text = text.into();
        match field {
            NotebookField::Cues => entry.cues = text,
            NotebookField::Notes => entry.notes = text,
            NotebookField::Summary => entry.summary = text,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hoja de estudio: cada entrada no vacía, en orden de catálogo, bajo el título del nivel.
    pub fn compiled(&self, levels: &[Level]) -> String {
        let mut sections = Vec::new();
        for level in levels {
            let Some(entry) = self.0.get(&level.id) else {
                continue;
            };
            if entry.is_blank() {
                continue;
            }
            let mut section = format!("# {}", level.title);
            for field in NotebookField::ALL {
                let text = entry.field(field).trim();
                if !text.is_empty() {
                    section.push_str(&format!("\n{}: {}", field.label(), text));
                }
            }
            sections.push(section);
        }
        sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: u32, title: &str) -> Level {
        Level {
            id,
            title: title.into(),
            description: String::new(),
            xp_value: 100,
            slides: Vec::new(),
            quiz: Vec::new(),
            unlocked: false,
            completed: false,
        }
    }

    #[test]
    fn set_field_creates_entry_with_empty_defaults() {
        let mut nb = Notebook::default();
        assert!(nb.entry(3).is_none());

        nb.set_field(3, NotebookField::Notes, "AM = MB");

        let entry = nb.entry(3).expect("entry created");
        assert_eq!(entry.notes, "AM = MB");
        assert_eq!(entry.cues, "");
        assert_eq!(entry.summary, "");
    }

    #[test]
    fn set_field_overwrites_only_named_field() {
        let mut nb = Notebook::default();
        nb.set_field(1, NotebookField::Cues, "undefined terms?");
        nb.set_field(1, NotebookField::Summary, "point, line, plane");
        nb.set_field(1, NotebookField::Cues, "atoms of geometry");

        let entry = nb.entry(1).expect("entry");
        assert_eq!(entry.cues, "atoms of geometry");
        assert_eq!(entry.summary, "point, line, plane");
        assert_eq!(nb.len(), 1);
    }

    #[test]
    fn notebook_serializes_with_string_keys() {
        let mut nb = Notebook::default();
        nb.set_field(5, NotebookField::Notes, "average");
        let json = serde_json::to_string(&nb).expect("serialize");
        assert_eq!(json, r#"{"5":{"cues":"","notes":"average","summary":""}}"#);

        let back: Notebook = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, nb);
    }

    #[test]
    fn compiled_follows_catalog_order_and_skips_blank_entries() {
        let levels = vec![level(1, "Level 1"), level(2, "Level 2"), level(3, "Level 3")];
        let mut nb = Notebook::default();
        nb.set_field(3, NotebookField::Summary, "midpoints");
        nb.set_field(2, NotebookField::Cues, "   ");
        nb.set_field(1, NotebookField::Notes, "no size");

        assert_eq!(
            nb.compiled(&levels),
            "# Level 1\nNotes: no size\n\n# Level 3\nSummary: midpoints"
        );
    }
}
