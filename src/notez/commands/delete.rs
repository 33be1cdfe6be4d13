use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::notes::NoteStore;
use crate::store::SlotStorage;

/// Delete each id in turn. Ids that match nothing produce a warning, not an error.
pub fn run<S: SlotStorage, G: IdGenerator>(
    store: &mut NoteStore<S, G>,
    ids: &[String],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        match store.delete(id)? {
            Some(note) => {
                result.add_message(CmdMessage::success(format!(
                    "Note deleted ({}): {}",
                    note.id, note.title
                )));
                result.affected_notes.push(note);
            }
            None => result.add_message(CmdMessage::warning(format!("No note with id {}", id))),
        }
    }

    Ok(result)
}
