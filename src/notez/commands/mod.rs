//! # Command Layer
//!
//! One module per operation. Commands take a [`NoteStore`](crate::notes::NoteStore)
//! (or paths, for configuration) plus plain Rust arguments and return a
//! [`CmdResult`]. They never print; messages are collected for the UI to render.

use crate::config::NotezConfig;
use crate::id::IdGenerator;
use crate::model::{InputBuffers, Note};
use crate::notes::NoteStore;
use crate::store::SlotStorage;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod path;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct NotezPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// The note currently staged for editing, with its buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNote {
    pub id: String,
    pub buffers: InputBuffers,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub active: Option<ActiveNote>,
    pub slot_path: Option<PathBuf>,
    pub config: Option<NotezConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_active(mut self, active: Option<ActiveNote>) -> Self {
        self.active = active;
        self
    }

    pub fn with_slot_path(mut self, path: PathBuf) -> Self {
        self.slot_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: NotezConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Snapshot of the store's selection, if any.
pub(crate) fn active_of<S: SlotStorage, G: IdGenerator>(
    store: &NoteStore<S, G>,
) -> Option<ActiveNote> {
    store.active_id().map(|id| ActiveNote {
        id: id.to_string(),
        buffers: store.buffers().clone(),
    })
}
