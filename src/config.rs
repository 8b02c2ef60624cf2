//! Fixed locations and vocabularies. The catalog deliberately has no command
//! line flags or environment overrides; everything lives here as constants.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Song list file, resolved against the process working directory.
pub const DATA_FILE: &str = "songs_data.json";

/// Log file name, placed in the per-user data directory when one exists.
pub const LOG_FILE_NAME: &str = "song-catalog.log";

/// Joins performer names inside the persisted `performers` field.
pub const PERFORMER_SEPARATOR: &str = " / ";

/// Selectable performers offered by the add form. Custom names can be typed
/// in addition to these.
pub const PERFORMER_VOCABULARY: &[&str] = &[
    "初音ミク",
    "鏡音リン",
    "鏡音レン",
    "巡音ルカ",
    "MEIKO",
    "KAITO",
    "重音テト",
    "IA",
    "GUMI",
    "可不",
    "flower",
    "歌愛ユキ",
];

/// Paths used by the binary at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Build the fixed configuration. The log file goes to the platform data
    /// directory, falling back to the working directory when no home exists.
    pub fn resolve() -> Self {
        let log_path = ProjectDirs::from("", "", "song-catalog")
            .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME));

        Self {
            data_path: PathBuf::from(DATA_FILE),
            log_path,
        }
    }
}
