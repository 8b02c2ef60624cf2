use std::collections::BTreeSet;
use std::fs;

use song_catalog::{Catalog, CatalogError, FilterQuery, JsonFile, Song, SongDraft, SongStorage};
use tempfile::TempDir;

fn catalog_in(dir: &TempDir) -> Catalog<JsonFile> {
    Catalog::startup(JsonFile::new(dir.path().join("songs_data.json"))).unwrap()
}

fn seed(dir: &TempDir, body: &str) {
    fs::write(dir.path().join("songs_data.json"), body).unwrap();
}

#[test]
fn missing_file_starts_empty_and_is_created_on_first_add() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_in(&dir);
    assert!(catalog.is_empty());
    assert!(!dir.path().join("songs_data.json").exists());

    catalog
        .append(Song::new("メルト", "ryo", "初音ミク", ""))
        .unwrap();
    assert!(dir.path().join("songs_data.json").exists());
}

#[test]
fn appended_song_is_last_after_reload() {
    let dir = TempDir::new().unwrap();
    seed(&dir, r#"[["A", "X", "Miku", ""], ["B", "Y", "Rin", "https://b"]]"#);

    let mut catalog = catalog_in(&dir);
    let draft = SongDraft {
        title: "  C ".into(),
        producer: "Z".into(),
        performers: vec!["鏡音リン".into(), "鏡音レン".into()],
        custom_performers: "Guest, ".into(),
        link: String::new(),
    };
    catalog.add(draft).unwrap();

    let reloaded = catalog_in(&dir);
    let songs: Vec<&Song> = reloaded.entries().iter().map(|e| &e.song).collect();
    assert_eq!(songs.len(), 3);
    assert_eq!(songs[0].title, "A");
    assert_eq!(
        *songs[2],
        Song::new("C", "Z", "鏡音リン / 鏡音レン / Guest", "")
    );
}

#[test]
fn positional_delete_is_persisted() {
    let dir = TempDir::new().unwrap();
    seed(
        &dir,
        r#"[["A", "X", "P", ""], ["B", "X", "P", ""], ["C", "X", "P", ""], ["D", "X", "P", ""]]"#,
    );

    let mut catalog = catalog_in(&dir);
    let removed = catalog.delete(&BTreeSet::from([0, 2])).unwrap();
    assert_eq!(removed.len(), 2);

    let stored = JsonFile::new(dir.path().join("songs_data.json"))
        .load()
        .unwrap();
    let titles: Vec<&str> = stored.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["B", "D"]);
}

#[test]
fn empty_delete_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let body = r#"[["A", "X", "P", ""]]"#;
    seed(&dir, body);

    let mut catalog = catalog_in(&dir);
    let err = catalog.delete(&BTreeSet::new()).unwrap_err();
    assert!(matches!(err, CatalogError::EmptySelection));
    assert_eq!(fs::read_to_string(dir.path().join("songs_data.json")).unwrap(), body);
}

#[test]
fn invalid_add_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let mut catalog = catalog_in(&dir);
    let err = catalog
        .add(SongDraft {
            title: "T".into(),
            producer: "P".into(),
            ..SongDraft::default()
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Performers is required.");
    assert!(!dir.path().join("songs_data.json").exists());
}

#[test]
fn query_filters_loaded_file() {
    let dir = TempDir::new().unwrap();
    seed(
        &dir,
        r#"[["Tell Your World", "livetune", "初音ミク", ""],
            ["ロミオとシンデレラ", "doriko", "初音ミク", ""],
            ["Magnet", "minato", "初音ミク / 巡音ルカ", ""]]"#,
    );
    let catalog = catalog_in(&dir);

    let hits = catalog.query(&FilterQuery::new("", "", "ルカ"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].song.title, "Magnet");

    let hits = catalog.query(&FilterQuery::new("WORLD", "LIVE", ""));
    assert_eq!(hits.len(), 1);
    assert_eq!(catalog.query(&FilterQuery::default()).len(), 3);
}

#[test]
fn malformed_file_refuses_to_start() {
    let dir = TempDir::new().unwrap();
    seed(&dir, r#"[["only", "three", "fields"]]"#);
    let result = Catalog::startup(JsonFile::new(dir.path().join("songs_data.json")));
    assert!(matches!(result, Err(CatalogError::Format { .. })));
}
