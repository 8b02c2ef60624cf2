//! Song catalog: an ordered list of songs kept in `songs_data.json`, with
//! case-insensitive filtering and a Ratatui front-end.
//!
//! The core ([`store`], [`filter`], [`persistence`], [`catalog`]) has no
//! terminal dependencies so it can be driven from tests or other tooling.
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod persistence;
pub mod store;
pub mod ui;

pub use catalog::Catalog;
pub use error::{CatalogError, Field, Result};
pub use filter::{filter, filter_entries, FilterQuery};
pub use models::{Entry, Song, SongDraft, SongId};
pub use persistence::{JsonFile, MemoryStorage, SongStorage};
pub use store::RecordStore;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
