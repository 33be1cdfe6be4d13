use serde::{Deserialize, Serialize};

/// Title given to every freshly created note.
pub const DEFAULT_TITLE: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(id: String, title: String, content: String) -> Self {
        Self { id, title, content }
    }

    /// A blank note as produced by `create`: default title, empty content.
    pub fn untitled(id: String) -> Self {
        Self::new(id, DEFAULT_TITLE.to_string(), String::new())
    }
}

/// Editable staging area mirroring the active note.
///
/// Changes here do not touch the collection until they are committed
/// back through `NoteStore::commit` (or `update`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputBuffers {
    pub title: String,
    pub content: String,
}

impl InputBuffers {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_note_has_default_fields() {
        let note = Note::untitled("abc1234".into());
        assert_eq!(note.title, "Untitled");
        assert_eq!(note.content, "");
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let note = Note::new("k3j9x0a".into(), "Groceries".into(), "Milk,Eggs".into());
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "k3j9x0a", "title": "Groceries", "content": "Milk,Eggs"})
        );
    }

    #[test]
    fn collection_survives_json_roundtrip() {
        let notes = vec![
            Note::new("a".into(), "One".into(), "first\nline".into()),
            Note::untitled("b".into()),
        ];
        let json = serde_json::to_string(&notes).unwrap();
        let parsed: Vec<Note> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, notes);
    }

    #[test]
    fn buffers_clear_to_empty() {
        let mut buffers = InputBuffers::new("t", "c");
        assert!(!buffers.is_empty());
        buffers.clear();
        assert_eq!(buffers, InputBuffers::default());
    }
}
