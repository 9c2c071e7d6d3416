use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

/// Marker keywords and list location. Defaults mirror the reference flow;
/// any field can be overridden through HARVEST_* environment variables
/// (HARVEST_LIST_PATH, HARVEST_START_MARKER, HARVEST_END_MARKER).
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub start_marker: String,
    pub end_marker: String,
    pub list_path: PathBuf,
}

pub fn load() -> Result<Settings> {
    let settings = Config::builder()
        .set_default("start_marker", "playnitegames")?
        .set_default("end_marker", "playnitegamesend")?
        .set_default("list_path", "games.txt")?
        .add_source(Environment::with_prefix("HARVEST"))
        .build()
        .context("failed to load settings")?
        .try_deserialize()
        .context("invalid settings")?;
    Ok(settings)
}
