use crate::commands::CmdResult;
use crate::error::Result;
use crate::id::IdGenerator;
use crate::notes::NoteStore;
use crate::store::SlotStorage;

/// The home view: every note, in insertion order.
pub fn run<S: SlotStorage, G: IdGenerator>(store: &NoteStore<S, G>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_notes(store.notes().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ScriptedIds;
    use crate::store::NOTES_SLOT;
    use crate::store::memory::InMemorySlots;

    #[test]
    fn lists_in_insertion_order() {
        let mut store = NoteStore::open(
            InMemorySlots::new(),
            ScriptedIds::new(["zzzz", "aaaa"]),
            NOTES_SLOT,
        )
        .unwrap();
        store.create().unwrap();
        store.create().unwrap();

        let ids: Vec<_> = run(&store)
            .unwrap()
            .listed_notes
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["zzzz", "aaaa"]);
    }
}
