//! Binary entry point: resolve paths, start file logging, load the catalog
//! and hand control to the terminal UI.
use anyhow::Context;
use log::{info, LevelFilter};
use song_catalog::config::AppConfig;
use song_catalog::{logging, run_app, App, Catalog, JsonFile};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::resolve();

    // The UI still works without a log file.
    if let Err(err) = logging::init(&config.log_path, LevelFilter::Info) {
        eprintln!("logging disabled: {err:#}");
    }

    let storage = JsonFile::new(config.data_path.clone());
    let catalog = Catalog::startup(storage)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    info!("loaded {} song(s)", catalog.len());

    let mut app = App::new(catalog);
    run_app(&mut app)
}
