use crate::commands::CmdResult;
use crate::error::Result;
use crate::id::IdGenerator;
use crate::notes::NoteStore;
use crate::store::SlotStorage;

pub fn run<S: SlotStorage, G: IdGenerator>(store: &NoteStore<S, G>) -> Result<CmdResult> {
    let path = store.storage().slot_path(store.slot_key())?;
    Ok(CmdResult::default().with_slot_path(path))
}
