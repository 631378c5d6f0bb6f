//! Pick history persistence
//!
//! Remembers which level was chosen for which document, so reopening a
//! document can start the cursor on the previous choice.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Maximum number of entries kept on disk
pub const HISTORY_LIMIT: usize = 100;

/// A single recorded pick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickHistoryEntry {
    pub timestamp: DateTime<Local>,
    /// Document path the pick was made in
    pub document: String,
    pub level_id: String,
    pub level_name: String,
}

/// Wrapper for persisting pick history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickHistory {
    pub entries: Vec<PickHistoryEntry>,
}

impl PickHistory {
    fn history_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".level-picker"))
    }

    fn history_path() -> Option<PathBuf> {
        Self::history_dir().map(|dir| dir.join("history.json"))
    }

    pub fn load() -> Vec<PickHistoryEntry> {
        let history_path = match Self::history_path() {
            Some(p) => p,
            None => return Vec::new(),
        };

        if !history_path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&history_path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<PickHistory>(&contents) {
            Ok(history) => history.entries,
            Err(_) => Vec::new(),
        }
    }

    pub fn save(entries: &[PickHistoryEntry]) -> anyhow::Result<()> {
        let history_dir = Self::history_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        if !history_dir.exists() {
            fs::create_dir_all(&history_dir)?;
        }

        let history_path = Self::history_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine history path"))?;

        let history = PickHistory {
            entries: entries.to_vec(),
        };

        let json = serde_json::to_string_pretty(&history)?;
        fs::write(&history_path, json)?;

        Ok(())
    }
}

/// Level id of the most recent pick recorded for `document`, if any
///
/// Entries are stored newest first, so the first match wins.
pub fn last_pick_for<'a>(entries: &'a [PickHistoryEntry], document: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| e.document == document)
        .map(|e| e.level_id.as_str())
}
