//! Storage and transcript settings (`[history]` and `[logging]` sections)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "promptsmith";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Snapshot file; defaults to `<data dir>/promptsmith/history.json`
    pub path: Option<String>,
    /// Keep history in memory only
    pub in_memory: bool,
}

impl FileHistoryConfig {
    /// Where the history snapshot lives, or `None` for an in-memory store.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.in_memory {
            return None;
        }
        match &self.path {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join(APP_DIR).join("history.json")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL interaction transcript
    pub transcript: Option<String>,
    /// Directory for daily-rolling diagnostic logs
    pub dir: Option<String>,
}

impl FileLoggingConfig {
    pub fn transcript_path(&self) -> Option<PathBuf> {
        self.transcript.as_deref().map(expand_home)
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.dir.as_deref().map(expand_home)
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    Path::new(path).to_path_buf()
}
