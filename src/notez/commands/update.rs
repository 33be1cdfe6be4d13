use crate::commands::{CmdMessage, CmdResult, active_of};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::notes::NoteStore;
use crate::store::SlotStorage;

/// Select `id`, stage whichever fields are given, and commit.
///
/// Fields left as `None` keep the note's current value.
pub fn run<S: SlotStorage, G: IdGenerator>(
    store: &mut NoteStore<S, G>,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<CmdResult> {
    store.select(id)?;
    if let Some(title) = title {
        store.set_buffer_title(title);
    }
    if let Some(content) = content {
        store.set_buffer_content(content);
    }

    let mut result = CmdResult::default();
    match store.commit()? {
        Some(note) => {
            result.add_message(CmdMessage::success(format!(
                "Note updated ({}): {}",
                note.id, note.title
            )));
            result.affected_notes.push(note);
        }
        None => result.add_message(CmdMessage::warning("No active note to update")),
    }
    Ok(result.with_active(active_of(store)))
}
