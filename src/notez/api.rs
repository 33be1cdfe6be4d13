//! # API Facade
//!
//! The single entry point for notez operations, whatever the UI. It owns the
//! [`NoteStore`] and dispatches to `commands/*.rs`; it holds no business logic
//! and does no I/O of its own.
//!
//! `NotezApi<S, G>` is generic over the slot backend and the id source:
//! - Production: `NotezApi<FileSlots>`
//! - Testing: `NotezApi<InMemorySlots, ScriptedIds>`
//!
//! A UI that lives longer than one call (an editor pane, a TUI) can keep the
//! facade around; selection and buffers persist in the owned store between
//! calls. The CLI builds a fresh one per invocation.
//!
//! Configuration goes through the free function [`config`], which needs only
//! the data directory. It works while the notes slot cannot be opened.

use crate::commands;
use crate::config::{NotezConfig, RecoveryPolicy};
use crate::error::Result;
use crate::id::{IdGenerator, RandomTokens};
use crate::notes::NoteStore;
use crate::store::SlotStorage;

pub struct NotezApi<S: SlotStorage, G: IdGenerator = RandomTokens> {
    store: NoteStore<S, G>,
}

impl<S: SlotStorage, G: IdGenerator> NotezApi<S, G> {
    pub fn new(store: NoteStore<S, G>) -> Self {
        Self { store }
    }

    /// Open the notes slot named by `config`, honoring its recovery policy.
    pub fn open(storage: S, ids: G, config: &NotezConfig) -> Result<Self> {
        let store = match config.on_corrupt {
            RecoveryPolicy::Fail => NoteStore::open(storage, ids, config.slot_key.clone())?,
            RecoveryPolicy::Reset => {
                NoteStore::open_or_reset(storage, ids, config.slot_key.clone())?
            }
        };
        Ok(Self::new(store))
    }

    pub fn create_note(
        &mut self,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_note(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&mut self.store, id)
    }

    pub fn update_note(
        &mut self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, title, content)
    }

    pub fn delete_notes(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn slot_path(&self) -> Result<commands::CmdResult> {
        commands::path::run(&self.store)
    }

    pub fn store(&self) -> &NoteStore<S, G> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut NoteStore<S, G> {
        &mut self.store
    }
}

/// Show or change configuration under `paths.data_dir`.
pub fn config(paths: &commands::NotezPaths, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(paths, action)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{ActiveNote, CmdMessage, CmdResult, MessageLevel, NotezPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotezError;
    use crate::id::ScriptedIds;
    use crate::store::NOTES_SLOT;
    use crate::store::memory::InMemorySlots;
    use tempfile::TempDir;

    fn api() -> NotezApi<InMemorySlots, ScriptedIds> {
        let ids = ScriptedIds::new(["q1q1", "q2q2"]);
        NotezApi::open(InMemorySlots::new(), ids, &NotezConfig::default()).unwrap()
    }

    #[test]
    fn create_then_view_dispatches_to_store() {
        let mut api = api();
        api.create_note(Some("Hello".into()), None).unwrap();

        let viewed = api.view_note("q1q1").unwrap();
        assert_eq!(viewed.listed_notes[0].title, "Hello");
        assert_eq!(api.store().active_id(), Some("q1q1"));
    }

    #[test]
    fn selection_survives_between_calls() {
        let mut api = api();
        api.create_note(None, None).unwrap();
        api.store_mut().set_buffer_title("Draft");
        api.store_mut().commit().unwrap();

        let listed = api.list_notes().unwrap().listed_notes;
        assert_eq!(listed[0].title, "Draft");
    }

    #[test]
    fn open_honors_recovery_policy() {
        let broken = || InMemorySlots::new().with_slot(NOTES_SLOT, "not json");

        let strict_config = NotezConfig::default();
        let strict = NotezApi::open(broken(), ScriptedIds::new(["x"]), &strict_config);
        assert!(matches!(strict.err(), Some(NotezError::MalformedState { .. })));

        let lenient_config = NotezConfig {
            on_corrupt: RecoveryPolicy::Reset,
            ..NotezConfig::default()
        };
        let lenient = NotezApi::open(broken(), ScriptedIds::new(["x"]), &lenient_config).unwrap();
        assert!(lenient.store().notes().is_empty());
    }

    #[test]
    fn config_needs_no_open_store() {
        let dir = TempDir::new().unwrap();
        let paths = NotezPaths {
            data_dir: dir.path().to_path_buf(),
        };

        config(&paths, ConfigAction::Set("slot-key".into(), "work".into())).unwrap();
        let shown = config(&paths, ConfigAction::ShowAll).unwrap();

        assert_eq!(shown.config.unwrap().slot_key, "work");
    }
}
