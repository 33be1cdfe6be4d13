use crate::commands::{CmdMessage, CmdResult, NotezPaths};
use crate::config::NotezConfig;
use crate::error::Result;
use log::warn;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &NotezPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut result = CmdResult::default();
    let mut config = match NotezConfig::load(dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring unreadable config: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "Ignoring unreadable config ({}), showing defaults. Setting a key rewrites it.",
                e
            )));
            NotezConfig::default()
        }
    };

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}
