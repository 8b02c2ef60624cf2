//! Ordered in-memory list of songs. Order is insertion order; the only
//! reordering ever applied is removal. Sorting for display happens in the UI
//! and never touches this list.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::error::{CatalogError, Result};
use crate::models::{Entry, Song, SongId};

#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    entries: Vec<Entry>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already loaded songs, assigning fresh ids.
    pub fn from_songs(songs: Vec<Song>) -> Self {
        let mut store = Self::new();
        store.replace_all(songs);
        store
    }

    /// Validate and append a song, returning the id it was given.
    pub fn append(&mut self, song: Song) -> Result<SongId> {
        song.validate()?;
        let entry = Entry::new(song);
        let id = entry.id;
        self.entries.push(entry);
        debug!("appended song {id}; store now holds {}", self.entries.len());
        Ok(id)
    }

    /// Remove the songs at the given positions and return them in their
    /// original order.
    ///
    /// An empty set is rejected with [`CatalogError::EmptySelection`] and the
    /// store is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds. Indices always come from a live
    /// rendering of the store, so a stale one is a bug in the caller.
    pub fn delete(&mut self, indices: &BTreeSet<usize>) -> Result<Vec<Song>> {
        if indices.is_empty() {
            return Err(CatalogError::EmptySelection);
        }
        let len = self.entries.len();
        if let Some(&last) = indices.last() {
            assert!(last < len, "delete index {last} out of bounds (len {len})");
        }

        // Highest index first so earlier positions do not shift.
        let mut removed: Vec<Song> = indices
            .iter()
            .rev()
            .map(|&index| self.entries.remove(index).song)
            .collect();
        removed.reverse();
        debug!("deleted {} song(s) by position", removed.len());
        Ok(removed)
    }

    /// Remove songs by id. Every id must be present, otherwise nothing is
    /// removed.
    pub fn delete_ids(&mut self, ids: &[SongId]) -> Result<Vec<Song>> {
        if ids.is_empty() {
            return Err(CatalogError::EmptySelection);
        }
        let wanted: HashSet<SongId> = ids.iter().copied().collect();
        if let Some(missing) = wanted.iter().find(|id| self.position(**id).is_none()) {
            return Err(CatalogError::UnknownSong(*missing));
        }

        let mut removed = Vec::with_capacity(wanted.len());
        self.entries.retain(|entry| {
            if wanted.contains(&entry.id) {
                removed.push(entry.song.clone());
                false
            } else {
                true
            }
        });
        debug!("deleted {} song(s) by id", removed.len());
        Ok(removed)
    }

    /// Swap in a whole new list in one step. Every song gets a new id.
    pub fn replace_all(&mut self, songs: Vec<Song>) {
        self.entries = songs.into_iter().map(Entry::new).collect();
    }

    /// Restore a previous set of entries, ids included.
    pub(crate) fn restore(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    /// Read-only view in store order.
    pub fn snapshot(&self) -> &[Entry] {
        &self.entries
    }

    /// Owned copies of the songs in store order, ready to be saved.
    pub fn songs(&self) -> Vec<Song> {
        self.entries.iter().map(|entry| entry.song.clone()).collect()
    }

    pub fn get(&self, id: SongId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: SongId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    fn song(title: &str) -> Song {
        Song::new(title, "P", "初音ミク", "")
    }

    fn titles(store: &RecordStore) -> Vec<String> {
        store
            .snapshot()
            .iter()
            .map(|entry| entry.song.title.clone())
            .collect()
    }

    fn store_with(names: &[&str]) -> RecordStore {
        RecordStore::from_songs(names.iter().map(|name| song(name)).collect())
    }

    #[test]
    fn append_keeps_insertion_order_and_allows_duplicates() {
        let mut store = RecordStore::new();
        store.append(song("A")).unwrap();
        store.append(song("B")).unwrap();
        store.append(song("A")).unwrap();
        assert_eq!(titles(&store), ["A", "B", "A"]);
    }

    #[test]
    fn append_rejects_missing_fields() {
        let mut store = RecordStore::new();
        let err = store.append(Song::new("T", "P", "  ", "")).unwrap_err();
        assert!(matches!(err, CatalogError::MissingField(Field::Performers)));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_removes_exact_positions_and_keeps_order() {
        let mut store = store_with(&["A", "B", "C", "D", "E"]);
        let removed = store.delete(&BTreeSet::from([0, 2, 4])).unwrap();
        assert_eq!(
            removed.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
            ["A", "C", "E"]
        );
        assert_eq!(titles(&store), ["B", "D"]);
    }

    #[test]
    fn delete_with_empty_selection_leaves_store_unchanged() {
        let mut store = store_with(&["A", "B"]);
        let err = store.delete(&BTreeSet::new()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySelection));
        assert_eq!(titles(&store), ["A", "B"]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn delete_out_of_range_panics() {
        let mut store = store_with(&["A"]);
        let _ = store.delete(&BTreeSet::from([3]));
    }

    #[test]
    fn delete_ids_survives_reordered_views() {
        let mut store = store_with(&["A", "B", "C"]);
        let c = store.snapshot()[2].id;
        let a = store.snapshot()[0].id;
        let removed = store.delete_ids(&[c, a]).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(titles(&store), ["B"]);
    }

    #[test]
    fn delete_ids_with_unknown_id_removes_nothing() {
        let mut store = store_with(&["A", "B"]);
        let a = store.snapshot()[0].id;
        let err = store.delete_ids(&[a, SongId::new()]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSong(_)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_all_swaps_contents_and_reissues_ids() {
        let mut store = store_with(&["A"]);
        let old_id = store.snapshot()[0].id;
        store.replace_all(vec![song("X"), song("Y")]);
        assert_eq!(titles(&store), ["X", "Y"]);
        assert!(store.get(old_id).is_none());
    }
}
