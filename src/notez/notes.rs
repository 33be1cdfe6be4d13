//! # Note Store
//!
//! [`NoteStore`] owns the note collection, the active selection and the input
//! buffers. It is an explicit value: the application shell creates it, keeps
//! it, and hands references to whatever UI needs it.
//!
//! ## Persistence
//!
//! The whole collection lives in one slot of a [`SlotStorage`]. It is read once
//! by [`NoteStore::open`] and written back after every mutation whose result
//! differs (deep equality) from the last successful write. A failed write is
//! returned to the caller but the in-memory change stays, and the next
//! mutation (or an explicit [`NoteStore::sync`]) tries again.
//!
//! ## Selection
//!
//! ```text
//!   {none} --select/create--> {active} --delete(any id)--> {none}
//! ```
//!
//! `delete` always clears the selection and buffers, whichever note it removes.

use crate::error::{NotezError, Result};
use crate::id::{IdGenerator, RandomTokens, fresh_id};
use crate::model::{InputBuffers, Note};
use crate::store::{SlotStorage, validate_slot_key};
use log::{debug, warn};

pub struct NoteStore<S: SlotStorage, G: IdGenerator = RandomTokens> {
    storage: S,
    ids: G,
    slot_key: String,
    notes: Vec<Note>,
    active_id: Option<String>,
    buffers: InputBuffers,
    persisted: Vec<Note>,
}

impl<S: SlotStorage, G: IdGenerator> NoteStore<S, G> {
    /// Load the collection from `slot_key`. A slot that does not parse is an
    /// error; see [`NoteStore::open_or_reset`] for the forgiving variant.
    pub fn open(storage: S, ids: G, slot_key: impl Into<String>) -> Result<Self> {
        let slot_key = slot_key.into();
        validate_slot_key(&slot_key)?;

        let notes = match storage.read_slot(&slot_key)? {
            Some(raw) => parse_collection(&slot_key, &raw)?,
            None => Vec::new(),
        };
        debug!("loaded {} notes from slot '{}'", notes.len(), slot_key);

        Ok(Self {
            storage,
            ids,
            slot_key,
            persisted: notes.clone(),
            notes,
            active_id: None,
            buffers: InputBuffers::default(),
        })
    }

    /// Like [`NoteStore::open`], but a malformed slot yields an empty store.
    /// The bad slot is left on disk until the next mutation overwrites it.
    pub fn open_or_reset(storage: S, ids: G, slot_key: impl Into<String>) -> Result<Self> {
        let slot_key = slot_key.into();
        validate_slot_key(&slot_key)?;

        let notes = match storage.read_slot(&slot_key)? {
            Some(raw) => match parse_collection(&slot_key, &raw) {
                Ok(notes) => notes,
                Err(e) => {
                    warn!("{}; starting with an empty collection", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            storage,
            ids,
            slot_key,
            persisted: notes.clone(),
            notes,
            active_id: None,
            buffers: InputBuffers::default(),
        })
    }

    /// Append a new "Untitled" note and make it the active one.
    pub fn create(&mut self) -> Result<Note> {
        let id = fresh_id(&mut self.ids, &self.notes)?;
        let note = Note::untitled(id.clone());
        self.notes.push(note.clone());
        self.select(&id)?;
        debug!("created note {}", id);
        self.sync()?;
        Ok(note)
    }

    /// Make `id` the active note and copy its fields into the buffers.
    ///
    /// An unknown id leaves selection and buffers as they were.
    pub fn select(&mut self, id: &str) -> Result<&Note> {
        let note = self
            .notes
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| NotezError::NoteNotFound(id.to_string()))?;
        self.buffers = InputBuffers::from_note(note);
        self.active_id = Some(note.id.clone());
        Ok(note)
    }

    /// Remove the first note matching `id`, then clear selection and buffers.
    ///
    /// Returns the removed note, or `None` when nothing matched. The
    /// selection is cleared either way.
    pub fn delete(&mut self, id: &str) -> Result<Option<Note>> {
        let removed = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .map(|idx| self.notes.remove(idx));

        self.active_id = None;
        self.buffers.clear();

        match &removed {
            Some(note) => debug!("deleted note {}", note.id),
            None => debug!("delete: no note with id {}", id),
        }

        self.sync()?;
        Ok(removed)
    }

    /// Overwrite the active note's title and content.
    ///
    /// Without an active note this does nothing and returns `None`.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Option<Note>> {
        let Some(active) = self.active_id.as_deref() else {
            return Ok(None);
        };
        let Some(note) = self.notes.iter_mut().find(|n| n.id == active) else {
            return Ok(None);
        };

        note.title = title.into();
        note.content = content.into();
        let updated = note.clone();

        self.sync()?;
        Ok(Some(updated))
    }

    /// Commit the input buffers to the active note.
    pub fn commit(&mut self) -> Result<Option<Note>> {
        let InputBuffers { title, content } = self.buffers.clone();
        self.update(title, content)
    }

    /// Write the collection to its slot if it changed since the last write.
    /// Returns whether a write happened.
    pub fn sync(&mut self) -> Result<bool> {
        if self.notes == self.persisted {
            return Ok(false);
        }
        let raw = serde_json::to_string_pretty(&self.notes).map_err(NotezError::Serialization)?;
        self.storage.write_slot(&self.slot_key, &raw)?;
        self.persisted = self.notes.clone();
        debug!(
            "persisted {} notes to slot '{}'",
            self.notes.len(),
            self.slot_key
        );
        Ok(true)
    }

    pub fn set_buffer_title(&mut self, title: impl Into<String>) {
        self.buffers.title = title.into();
    }

    pub fn set_buffer_content(&mut self, content: impl Into<String>) {
        self.buffers.content = content.into();
    }

    pub fn buffers(&self) -> &InputBuffers {
        &self.buffers
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    /// True when the in-memory collection has changes not yet written.
    pub fn is_dirty(&self) -> bool {
        self.notes != self.persisted
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn parse_collection(key: &str, raw: &str) -> Result<Vec<Note>> {
    serde_json::from_str(raw).map_err(|source| NotezError::MalformedState {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ScriptedIds;
    use crate::store::NOTES_SLOT;
    use crate::store::memory::InMemorySlots;

    fn empty_store() -> NoteStore<InMemorySlots, ScriptedIds> {
        let ids = ScriptedIds::new(["aaaaaaa", "bbbbbbb", "ccccccc", "ddddddd"]);
        NoteStore::open(InMemorySlots::new(), ids, NOTES_SLOT).unwrap()
    }

    fn persisted(store: &NoteStore<InMemorySlots, ScriptedIds>) -> Vec<Note> {
        let raw = store.storage().read_slot(NOTES_SLOT).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn create_selects_untitled_note() {
        let mut store = empty_store();
        let note = store.create().unwrap();

        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.active_id(), Some(note.id.as_str()));
        assert_eq!(note.title, "Untitled");
        assert_eq!(note.content, "");
        assert_eq!(store.buffers(), &InputBuffers::new("Untitled", ""));
    }

    #[test]
    fn create_appends_in_order() {
        let mut store = empty_store();
        store.create().unwrap();
        store.create().unwrap();
        let ids: Vec<_> = store.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["aaaaaaa", "bbbbbbb"]);
        assert_eq!(store.active_id(), Some("bbbbbbb"));
    }

    #[test]
    fn create_retries_colliding_ids() {
        let ids = ScriptedIds::new(["aaaaaaa", "aaaaaaa", "bbbbbbb"]);
        let mut store = NoteStore::open(InMemorySlots::new(), ids, NOTES_SLOT).unwrap();
        store.create().unwrap();
        let second = store.create().unwrap();
        assert_eq!(second.id, "bbbbbbb");
    }

    #[test]
    fn select_copies_fields_into_buffers() {
        let mut store = empty_store();
        store.create().unwrap();
        store.update("Groceries", "Milk,Eggs").unwrap();
        store.create().unwrap();

        store.select("aaaaaaa").unwrap();
        assert_eq!(store.active_id(), Some("aaaaaaa"));
        assert_eq!(store.buffers(), &InputBuffers::new("Groceries", "Milk,Eggs"));
    }

    #[test]
    fn select_unknown_id_is_not_found_and_keeps_state() {
        let mut store = empty_store();
        store.create().unwrap();

        let err = store.select("missing").unwrap_err();
        assert!(matches!(err, NotezError::NoteNotFound(ref id) if id == "missing"));
        assert_eq!(store.active_id(), Some("aaaaaaa"));
        assert_eq!(store.buffers(), &InputBuffers::new("Untitled", ""));
    }

    #[test]
    fn update_without_active_note_is_noop() {
        let mut store = empty_store();
        store.create().unwrap();
        store.delete("missing").unwrap();
        let before = store.notes().to_vec();

        assert_eq!(store.update("x", "y").unwrap(), None);
        assert_eq!(store.notes(), before.as_slice());
    }

    #[test]
    fn update_touches_only_active_note() {
        let mut store = empty_store();
        store.create().unwrap();
        store.create().unwrap();
        store.select("aaaaaaa").unwrap();

        let updated = store.update("First", "body").unwrap().unwrap();
        assert_eq!(updated.id, "aaaaaaa");
        assert_eq!(store.get("aaaaaaa").unwrap().title, "First");
        assert_eq!(store.get("bbbbbbb").unwrap(), &Note::untitled("bbbbbbb".into()));
    }

    #[test]
    fn commit_writes_buffers_back() {
        let mut store = empty_store();
        store.create().unwrap();
        store.set_buffer_title("Todo");
        store.set_buffer_content("- ship it");
        assert_eq!(store.get("aaaaaaa").unwrap().title, "Untitled");

        store.commit().unwrap();
        let note = store.active_note().unwrap();
        assert_eq!(note.title, "Todo");
        assert_eq!(note.content, "- ship it");
    }

    #[test]
    fn delete_of_other_note_still_clears_selection() {
        let mut store = empty_store();
        store.create().unwrap();
        store.create().unwrap();
        assert_eq!(store.active_id(), Some("bbbbbbb"));

        let removed = store.delete("aaaaaaa").unwrap();
        assert_eq!(removed.map(|n| n.id), Some("aaaaaaa".to_string()));
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.active_id(), None);
        assert_eq!(store.buffers(), &InputBuffers::default());
    }

    #[test]
    fn delete_missing_id_is_tolerated() {
        let mut store = empty_store();
        store.create().unwrap();

        assert_eq!(store.delete("zzz").unwrap(), None);
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.active_id(), None);
    }

    #[test]
    fn groceries_scenario() {
        let mut store = empty_store();
        let note = store.create().unwrap();
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.active_id(), Some(note.id.as_str()));

        store.update("Groceries", "Milk,Eggs").unwrap();
        let stored = store.get(&note.id).unwrap();
        assert_eq!((stored.title.as_str(), stored.content.as_str()), ("Groceries", "Milk,Eggs"));

        store.delete(&note.id).unwrap();
        assert!(store.notes().is_empty());
        assert_eq!(store.active_id(), None);
        assert_eq!(store.buffers(), &InputBuffers::new("", ""));
        assert!(persisted(&store).is_empty());
    }

    #[test]
    fn slot_mirrors_collection_after_every_mutation() {
        let mut store = empty_store();

        store.create().unwrap();
        assert_eq!(persisted(&store), store.notes());
        store.update("A", "a").unwrap();
        assert_eq!(persisted(&store), store.notes());
        store.create().unwrap();
        assert_eq!(persisted(&store), store.notes());
        store.delete("aaaaaaa").unwrap();
        assert_eq!(persisted(&store), store.notes());
        store.update("ignored", "no active").unwrap();
        assert_eq!(persisted(&store), store.notes());
    }

    #[test]
    fn unchanged_collection_is_not_rewritten() {
        let mut store = empty_store();
        store.create().unwrap();
        assert_eq!(store.storage().write_count(), 1);

        store.select("aaaaaaa").unwrap();
        store.update("Untitled", "").unwrap();
        store.delete("missing").unwrap();
        assert_eq!(store.storage().write_count(), 1);
    }

    #[test]
    fn loads_existing_slot() {
        let raw = r#"[{"id":"x1","title":"Kept","content":"body"}]"#;
        let slots = InMemorySlots::new().with_slot(NOTES_SLOT, raw);
        let store = NoteStore::open(slots, ScriptedIds::new(["y"]), NOTES_SLOT).unwrap();

        assert_eq!(store.notes(), &[Note::new("x1".into(), "Kept".into(), "body".into())]);
        assert_eq!(store.active_id(), None);
        assert!(!store.is_dirty());
    }

    #[test]
    fn malformed_slot_is_rejected_by_open() {
        let slots = InMemorySlots::new().with_slot(NOTES_SLOT, "{not json");
        let err = NoteStore::open(slots, ScriptedIds::new(["y"]), NOTES_SLOT)
            .err()
            .unwrap();
        assert!(matches!(err, NotezError::MalformedState { ref key, .. } if key == "notes"));
    }

    #[test]
    fn malformed_slot_resets_with_open_or_reset() {
        let slots = InMemorySlots::new().with_slot(NOTES_SLOT, r#"[{"id": 3}]"#);
        let mut store =
            NoteStore::open_or_reset(slots, ScriptedIds::new(["aaaaaaa"]), NOTES_SLOT).unwrap();
        assert!(store.notes().is_empty());
        assert_eq!(store.storage().write_count(), 0);

        store.create().unwrap();
        assert_eq!(persisted(&store), store.notes());
    }

    #[test]
    fn failed_write_keeps_change_and_retries() {
        let mut store = empty_store();
        store.storage().set_simulate_write_error(true);

        assert!(store.create().is_err());
        assert_eq!(store.notes().len(), 1);
        assert!(store.is_dirty());

        store.storage().set_simulate_write_error(false);
        assert!(store.sync().unwrap());
        assert!(!store.is_dirty());
        assert_eq!(persisted(&store), store.notes());
    }
}
