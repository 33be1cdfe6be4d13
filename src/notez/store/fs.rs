use super::{SlotStorage, validate_slot_key};
use crate::error::{NotezError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed slots: `<root>/<key>.json`.
pub struct FileSlots {
    root: PathBuf,
}

impl FileSlots {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotezError::Io)?;
        }
        Ok(())
    }
}

impl SlotStorage for FileSlots {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(NotezError::Io)?;
        Ok(Some(value))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let target = self.slot_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(NotezError::Io)?;
        fs::rename(&tmp_path, target).map_err(NotezError::Io)?;
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_slot_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}
