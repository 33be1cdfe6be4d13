use super::{SlotStorage, validate_slot_key};
use crate::error::{NotezError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory slots for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` so the `SlotStorage` methods can stay `&self`.
#[derive(Default)]
pub struct InMemorySlots {
    slots: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl InMemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, bypassing the write counter.
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn set_simulate_write_error(&self, fail: bool) {
        self.simulate_write_error.set(fail);
    }
}

impl SlotStorage for InMemorySlots {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        validate_slot_key(key)?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        validate_slot_key(key)?;
        if self.simulate_write_error.get() {
            return Err(NotezError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_slot_key(key)?;
        Ok(PathBuf::from(format!("memory://{}", key)))
    }
}
