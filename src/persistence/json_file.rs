use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::models::Song;

use super::SongStorage;

/// Indentation used for the song file. Matches what earlier versions of the
/// file were written with, so diffs stay small.
const INDENT: &[u8] = b"    ";

/// The song list as a JSON array of `[title, producer, performers, link]`
/// arrays.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Sibling temp file used for the write-then-rename swap.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "songs".to_string());
        self.path
            .with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4()))
    }
}

/// Render songs as indented JSON. Non-ASCII text is written as-is.
fn encode(songs: &[Song]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    songs.serialize(&mut serializer)?;
    Ok(buf)
}

/// Best-effort removal of a temp file left by a failed save.
fn discard_temp(tmp: &Path) {
    match fs::remove_file(tmp) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => warn!("could not remove {}: {err}", tmp.display()),
    }
}

impl SongStorage for JsonFile {
    fn load(&self) -> Result<Vec<Song>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no song file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let songs: Vec<Song> =
            serde_json::from_slice(&content).map_err(|source| CatalogError::Format {
                path: self.path.clone(),
                source,
            })?;
        info!("loaded {} song(s) from {}", songs.len(), self.path.display());
        Ok(songs)
    }

    fn save(&mut self, songs: &[Song]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let bytes = encode(songs).map_err(|source| CatalogError::Format {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.temp_path();
        if let Err(err) = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, &self.path)) {
            discard_temp(&tmp);
            return Err(self.io_error(err));
        }

        debug!("saved {} song(s) to {}", songs.len(), self.path.display());
        Ok(())
    }
}
