use crate::model::entry::{Entry, EntryDraft, EntryId};

/// Flat arena holding the entries of every loaded document in encounter order.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    entries: Vec<Entry>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decorates one document's drafts with its filetags and appends them.
    /// Returns the number of entries added.
    pub fn push_document(&mut self, drafts: Vec<EntryDraft>, filetags: &[String]) -> usize {
        let offset = self.entries.len();
        let count = drafts.len();

        for (local, draft) in drafts.into_iter().enumerate() {
            // A parent must precede its child, which keeps every chain finite.
            let parent = draft
                .parent
                .filter(|p| *p < local)
                .map(|p| EntryId(offset + p));
            let id = EntryId(offset + local);
            self.entries.push(Entry::decorate(draft, id, parent, filetags));
        }

        count
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    pub fn parent(&self, entry: &Entry) -> Option<&Entry> {
        entry.parent.and_then(|id| self.get(id))
    }

    /// Walks from the entry's parent up to its tree root.
    pub fn ancestors<'a>(&'a self, entry: &Entry) -> Ancestors<'a> {
        Ancestors {
            outline: self,
            next: entry.parent,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct Ancestors<'a> {
    outline: &'a Outline,
    next: Option<EntryId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.outline.get(self.next?)?;
        self.next = entry.parent;
        Some(entry)
    }
}
