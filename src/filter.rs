//! Case-insensitive substring filtering over the three text columns.

use crate::models::{Entry, Song};

/// The three filter inputs. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub song: String,
    pub producer: String,
    pub performer: String,
}

impl FilterQuery {
    pub fn new(
        song: impl Into<String>,
        producer: impl Into<String>,
        performer: impl Into<String>,
    ) -> Self {
        Self {
            song: song.into(),
            producer: producer.into(),
            performer: performer.into(),
        }
    }

    /// True when no query would narrow the list.
    pub fn is_empty(&self) -> bool {
        self.song.is_empty() && self.producer.is_empty() && self.performer.is_empty()
    }

    /// Clear all three queries.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// All three substring tests must pass. The performer query runs against
    /// the whole joined performer string, not individual names.
    pub fn matches(&self, song: &Song) -> bool {
        contains_ci(&song.title, &self.song)
            && contains_ci(&song.producer, &self.producer)
            && contains_ci(&song.performers, &self.performer)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Songs matching `query`, in their original order.
pub fn filter<'a>(songs: &'a [Song], query: &FilterQuery) -> Vec<&'a Song> {
    songs.iter().filter(|song| query.matches(song)).collect()
}

/// Same as [`filter`] but over store entries, keeping ids attached.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &FilterQuery) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| query.matches(&entry.song))
        .collect()
}
