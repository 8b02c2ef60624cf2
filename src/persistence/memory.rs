use crate::error::Result;
use crate::models::Song;

use super::SongStorage;

/// Keeps the "stored" list in memory. Handy for running the catalog without a
/// working directory, and for tests that want to count writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    songs: Vec<Song>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-populated list.
    pub fn with_songs(songs: Vec<Song>) -> Self {
        Self { songs, saves: 0 }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SongStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Song>> {
        Ok(self.songs.clone())
    }

    fn save(&mut self, songs: &[Song]) -> Result<()> {
        self.songs = songs.to_vec();
        self.saves += 1;
        Ok(())
    }
}
