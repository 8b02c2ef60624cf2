use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::SongId;

/// Required song fields. Used to name the offending field when a draft is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Producer,
    Performers,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "Song title",
            Field::Producer => "Producer",
            Field::Performers => "Performers",
        };
        f.write_str(name)
    }
}

/// Failures reported by the catalog core. The terminal UI turns these into
/// status messages; the core itself never talks to the user.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0} is required.")]
    MissingField(Field),

    #[error("No songs selected for deletion.")]
    EmptySelection,

    #[error("Song {0} is not in the catalog.")]
    UnknownSong(SongId),

    #[error("could not access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid song list", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// The message followed by every underlying cause, joined with `: `.
    /// Used where there is no anyhow chain to print the causes.
    pub fn detail(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
