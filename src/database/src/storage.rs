use chrono::{DateTime, Utc};
use fm_core::League;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A saved game: the full league state plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    pub league: League,
    pub week: u32,
    pub saved_at: DateTime<Utc>,
}

impl SaveGame {
    pub fn new(league: League, week: u32) -> Self {
        SaveGame {
            league,
            week,
            saved_at: Utc::now(),
        }
    }
}

pub fn save_game<P: AsRef<Path>>(path: P, save: &SaveGame) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(save)?;
    fs::write(&path, json)?;

    info!("saved game to {}", path.as_ref().display());

    Ok(())
}

pub fn load_game<P: AsRef<Path>>(path: P) -> Result<SaveGame, StorageError> {
    let json = fs::read_to_string(&path)?;
    let save = serde_json::from_str(&json)?;

    info!("loaded game from {}", path.as_ref().display());

    Ok(save)
}
