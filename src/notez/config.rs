use crate::error::{NotezError, Result};
use crate::id::{DEFAULT_ID_LENGTH, MAX_ID_LENGTH, MIN_ID_LENGTH};
use crate::store::{NOTES_SLOT, validate_slot_key};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: &[&str] = &["slot-key", "id-length", "on-corrupt"];

/// What to do when the notes slot holds data that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryPolicy {
    /// Refuse to open the store.
    #[default]
    Fail,
    /// Start from an empty collection.
    Reset,
}

impl fmt::Display for RecoveryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryPolicy::Fail => write!(f, "fail"),
            RecoveryPolicy::Reset => write!(f, "reset"),
        }
    }
}

/// Configuration for notez, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotezConfig {
    /// Slot holding the note collection
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Length of generated note ids
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    #[serde(default)]
    pub on_corrupt: RecoveryPolicy,
}

fn default_slot_key() -> String {
    NOTES_SLOT.to_string()
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

impl Default for NotezConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            id_length: default_id_length(),
            on_corrupt: RecoveryPolicy::default(),
        }
    }
}

impl NotezConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotezError::Io)?;
        let config: NotezConfig =
            serde_json::from_str(&content).map_err(NotezError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotezError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotezError::Serialization)?;
        fs::write(config_path, content).map_err(NotezError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "slot-key" => Ok(self.slot_key.clone()),
            "id-length" => Ok(self.id_length.to_string()),
            "on-corrupt" => Ok(self.on_corrupt.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "slot-key" => {
                validate_slot_key(value)?;
                self.slot_key = value.to_string();
            }
            "id-length" => {
                let len: usize = value
                    .parse()
                    .map_err(|_| NotezError::Config(format!("Not a number: {}", value)))?;
                if !(MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&len) {
                    return Err(NotezError::Config(format!(
                        "id-length must be between {} and {}",
                        MIN_ID_LENGTH, MAX_ID_LENGTH
                    )));
                }
                self.id_length = len;
            }
            "on-corrupt" => {
                self.on_corrupt = match value {
                    "fail" => RecoveryPolicy::Fail,
                    "reset" => RecoveryPolicy::Reset,
                    other => {
                        return Err(NotezError::Config(format!(
                            "on-corrupt must be 'fail' or 'reset', got '{}'",
                            other
                        )));
                    }
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> NotezError {
    NotezError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
