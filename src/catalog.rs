//! The entry points the terminal UI calls. Every mutation is written through
//! to storage before returning; if that write fails the mutation is undone so
//! the in-memory list always matches what is stored.

use std::collections::BTreeSet;

use log::{info, warn};

use crate::error::Result;
use crate::filter::{filter_entries, FilterQuery};
use crate::models::{Entry, Song, SongDraft, SongId};
use crate::persistence::SongStorage;
use crate::store::RecordStore;

pub struct Catalog<S> {
    store: RecordStore,
    storage: S,
}

impl<S: SongStorage> Catalog<S> {
    /// Load everything from `storage` and hand back a ready catalog.
    pub fn startup(storage: S) -> Result<Self> {
        let songs = storage.load()?;
        info!("catalog started with {} song(s)", songs.len());
        Ok(Self {
            store: RecordStore::from_songs(songs),
            storage,
        })
    }

    /// Validate a draft from the add form, append it and save.
    pub fn add(&mut self, draft: SongDraft) -> Result<SongId> {
        let song = draft.into_song()?;
        self.append(song)
    }

    /// Append an already assembled song and save.
    pub fn append(&mut self, song: Song) -> Result<SongId> {
        let title = song.display_title();
        let before = self.store.snapshot().to_vec();
        let id = self.store.append(song)?;
        if let Err(err) = self.persist() {
            self.store.restore(before);
            return Err(err);
        }
        info!("added '{title}'");
        Ok(id)
    }

    /// Delete by position in store order and save. See
    /// [`RecordStore::delete`] for the contract on `indices`.
    pub fn delete(&mut self, indices: &BTreeSet<usize>) -> Result<Vec<Song>> {
        let before = self.store.snapshot().to_vec();
        let removed = self.store.delete(indices)?;
        self.finish_delete(before, removed)
    }

    /// Delete by id and save.
    pub fn delete_ids(&mut self, ids: &[SongId]) -> Result<Vec<Song>> {
        let before = self.store.snapshot().to_vec();
        let removed = self.store.delete_ids(ids)?;
        self.finish_delete(before, removed)
    }

    fn finish_delete(&mut self, before: Vec<Entry>, removed: Vec<Song>) -> Result<Vec<Song>> {
        if let Err(err) = self.persist() {
            self.store.restore(before);
            return Err(err);
        }
        info!("deleted {} song(s)", removed.len());
        Ok(removed)
    }

    /// Entries matching `query`, in store order.
    pub fn query(&self, query: &FilterQuery) -> Vec<&Entry> {
        filter_entries(self.store.snapshot(), query)
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.snapshot()
    }

    pub fn get(&self, id: SongId) -> Option<&Entry> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let songs = self.store.songs();
        self.storage.save(&songs).inspect_err(|err| {
            warn!("write-through failed: {}", err.detail());
        })
    }
}
