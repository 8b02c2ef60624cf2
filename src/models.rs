//! Domain types shared by the store, the JSON file and the terminal UI.
//! `Song` is the persisted record; `Entry` pairs it with an in-memory id so
//! the UI can address rows without relying on their position.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PERFORMER_SEPARATOR;
use crate::error::{CatalogError, Field, Result};

/// On-disk shape of a song: `[title, producer, performers, link]`.
type SongRow = (String, String, String, String);

/// One catalogued song. Serialized as a four element JSON array, so the field
/// order here is part of the file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SongRow", into = "SongRow")]
pub struct Song {
    pub title: String,
    /// Creator of the song, shown in the "Producer" column.
    pub producer: String,
    /// Performer names joined with [`PERFORMER_SEPARATOR`].
    pub performers: String,
    /// Usually a URL. May be empty.
    pub link: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        producer: impl Into<String>,
        performers: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            producer: producer.into(),
            performers: performers.into(),
            link: link.into(),
        }
    }

    /// `Title - Producer`, used in status messages and dialogs.
    pub fn display_title(&self) -> String {
        if self.producer.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.producer)
        }
    }

    pub fn has_link(&self) -> bool {
        !self.link.trim().is_empty()
    }

    /// Check the three required fields, in column order.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::MissingField(Field::Title));
        }
        if self.producer.trim().is_empty() {
            return Err(CatalogError::MissingField(Field::Producer));
        }
        if self.performers.trim().is_empty() {
            return Err(CatalogError::MissingField(Field::Performers));
        }
        Ok(())
    }
}

impl From<SongRow> for Song {
    fn from((title, producer, performers, link): SongRow) -> Self {
        Self {
            title,
            producer,
            performers,
            link,
        }
    }
}

impl From<Song> for SongRow {
    fn from(song: Song) -> Self {
        (song.title, song.producer, song.performers, song.link)
    }
}

/// Identifier handed out for every song held in memory. Ids are never written
/// to disk; a fresh set is generated each time the file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongId(Uuid);

impl SongId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SongId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A song together with its in-memory id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: SongId,
    pub song: Song,
}

impl Entry {
    pub fn new(song: Song) -> Self {
        Self {
            id: SongId::new(),
            song,
        }
    }
}

/// Raw input collected by the add form before it becomes a [`Song`].
#[derive(Debug, Clone, Default)]
pub struct SongDraft {
    pub title: String,
    pub producer: String,
    /// Names picked from the fixed vocabulary, in selection order.
    pub performers: Vec<String>,
    /// Free-form, comma separated extra performer names.
    pub custom_performers: String,
    pub link: String,
}

impl SongDraft {
    /// Trim every field, join the performers and validate the result.
    pub fn into_song(self) -> Result<Song> {
        let performers = join_performers(&self.performers, &self.custom_performers);
        let song = Song::new(
            self.title.trim(),
            self.producer.trim(),
            performers,
            self.link.trim(),
        );
        song.validate()?;
        Ok(song)
    }
}

/// Concatenate selected names followed by the comma separated custom names.
/// Blank entries are dropped; order is preserved.
pub fn join_performers<S: AsRef<str>>(selected: &[S], custom_csv: &str) -> String {
    selected
        .iter()
        .map(|name| name.as_ref().trim())
        .chain(custom_csv.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(PERFORMER_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_performers_keeps_selection_then_custom_order() {
        let selected = ["初音ミク", "鏡音リン"];
        let joined = join_performers(&selected, " Custom A, ,Custom B ");
        assert_eq!(joined, "初音ミク / 鏡音リン / Custom A / Custom B");
    }

    #[test]
    fn join_performers_handles_custom_only_and_nothing() {
        let none: [&str; 0] = [];
        assert_eq!(join_performers(&none, "Solo"), "Solo");
        assert_eq!(join_performers(&none, " , "), "");
    }

    #[test]
    fn draft_trims_fields() {
        let draft = SongDraft {
            title: "  Tell Your World ".into(),
            producer: " livetune".into(),
            performers: vec!["初音ミク".into()],
            custom_performers: String::new(),
            link: " https://example.com ".into(),
        };
        let song = draft.into_song().unwrap();
        assert_eq!(
            song,
            Song::new("Tell Your World", "livetune", "初音ミク", "https://example.com")
        );
    }

    #[test]
    fn draft_requires_title_producer_and_performers() {
        let mut draft = SongDraft {
            title: "  ".into(),
            producer: "P".into(),
            performers: vec!["IA".into()],
            ..SongDraft::default()
        };
        assert!(matches!(
            draft.clone().into_song(),
            Err(CatalogError::MissingField(Field::Title))
        ));

        draft.title = "T".into();
        draft.producer = String::new();
        assert!(matches!(
            draft.clone().into_song(),
            Err(CatalogError::MissingField(Field::Producer))
        ));

        draft.producer = "P".into();
        draft.performers.clear();
        draft.custom_performers = " ,, ".into();
        assert!(matches!(
            draft.into_song(),
            Err(CatalogError::MissingField(Field::Performers))
        ));
    }

    #[test]
    fn empty_link_is_accepted() {
        let draft = SongDraft {
            title: "T".into(),
            producer: "P".into(),
            custom_performers: "GUMI".into(),
            ..SongDraft::default()
        };
        assert_eq!(draft.into_song().unwrap().link, "");
    }

    #[test]
    fn song_serializes_as_four_element_array() {
        let song = Song::new("T", "P", "A / B", "");
        let json = serde_json::to_string(&song).unwrap();
        assert_eq!(json, r#"["T","P","A / B",""]"#);
    }

    #[test]
    fn display_title_omits_blank_producer() {
        assert_eq!(Song::new("T", "", "A", "").display_title(), "T");
        assert_eq!(Song::new("T", "P", "A", "").display_title(), "T - P");
    }
}
