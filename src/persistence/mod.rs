//! Persistence split by backend. The catalog only talks to [`SongStorage`];
//! the binary wires in [`JsonFile`].

mod json_file;
mod memory;

pub use json_file::JsonFile;
pub use memory::MemoryStorage;

use crate::error::Result;
use crate::models::Song;

/// Whole-list load and save. Every save replaces everything previously
/// stored; there is no incremental write.
pub trait SongStorage {
    /// Read every stored song. Missing storage yields an empty list.
    fn load(&self) -> Result<Vec<Song>>;

    /// Replace the stored list with `songs`.
    fn save(&mut self, songs: &[Song]) -> Result<()>;
}
