use crate::commands::{CmdMessage, CmdResult, active_of};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::notes::NoteStore;
use crate::store::SlotStorage;

/// Create a note, optionally filling in title and content right away.
///
/// The note is always born "Untitled"; given fields are staged in the
/// buffers and committed, the same way an editor would.
pub fn run<S: SlotStorage, G: IdGenerator>(
    store: &mut NoteStore<S, G>,
    title: Option<String>,
    content: Option<String>,
) -> Result<CmdResult> {
    let mut note = store.create()?;

    if title.is_some() || content.is_some() {
        if let Some(title) = title {
            store.set_buffer_title(title);
        }
        if let Some(content) = content {
            store.set_buffer_content(content);
        }
        if let Some(updated) = store.commit()? {
            note = updated;
        }
    }

    let mut result = CmdResult::default().with_active(active_of(store));
    result.add_message(CmdMessage::success(format!(
        "Note created ({}): {}",
        note.id, note.title
    )));
    Ok(result.with_affected_notes(vec![note]))
}
