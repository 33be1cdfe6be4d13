//! # Storage Layer
//!
//! Notes are persisted to a single string-keyed **slot** holding the JSON array
//! of every note. The [`SlotStorage`] trait abstracts where slots live so the
//! note store can run against disk in production and memory in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileSlots`]: one `<key>.json` file per slot inside a data directory.
//!   Writes go to a temp file first and are renamed into place.
//! - [`memory::InMemorySlots`]: no persistence, can simulate write failures.
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── notes.json      # the collection slot (JSON array of {id, title, content})
//! └── config.json     # configuration, see config.rs
//! ```
//!
//! A slot is always overwritten wholesale. There is no versioning or migration.

use crate::error::{NotezError, Result};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Default key of the slot holding the note collection.
pub const NOTES_SLOT: &str = "notes";

/// Abstract interface for slot persistence.
///
/// Methods take `&self`; implementations needing mutation use interior
/// mutability, since everything runs on one thread.
pub trait SlotStorage {
    /// Read the raw slot value. `Ok(None)` when the slot was never written.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the slot value.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Where the slot lives. Virtual for non-file backends.
    fn slot_path(&self, key: &str) -> Result<PathBuf>;
}

/// Slot keys double as file names, so keep them to a safe alphabet.
pub fn validate_slot_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(NotezError::Store("Slot key cannot be empty".to_string()));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(NotezError::Store(format!(
            "Invalid slot key '{}': use letters, digits, '-' or '_'",
            key
        )));
    }
    Ok(())
}
