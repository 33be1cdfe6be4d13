use crate::commands::{CmdResult, active_of};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::notes::NoteStore;
use crate::store::SlotStorage;

/// Select a note and report it with its freshly loaded buffers.
pub fn run<S: SlotStorage, G: IdGenerator>(
    store: &mut NoteStore<S, G>,
    id: &str,
) -> Result<CmdResult> {
    let note = store.select(id)?.clone();
    Ok(CmdResult::default()
        .with_active(active_of(store))
        .with_listed_notes(vec![note]))
}
