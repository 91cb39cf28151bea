use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domains::ChatMessage;
use crate::error::{Result, SpendwiseChatError};
use crate::history::ChatHistory;

/// Persists a [`ChatHistory`] as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    path: PathBuf,
}

impl TranscriptStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty history, not an error.
    pub fn load(&self) -> Result<ChatHistory> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no transcript yet");
                return Ok(ChatHistory::new());
            }
            Err(err) => {
                return Err(SpendwiseChatError::Io(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )))
            }
        };
        let history: ChatHistory = serde_json::from_str(&raw)
            .map_err(|e| SpendwiseChatError::Serialization(e.to_string()))?;
        debug!(path = %self.path.display(), messages = history.len(), "loaded transcript");
        Ok(history)
    }

    pub fn save(&self, history: &ChatHistory) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SpendwiseChatError::Io(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let body = serde_json::to_string_pretty(history)
            .map_err(|e| SpendwiseChatError::Serialization(e.to_string()))?;
        let staging = self.staging_path();
        fs::write(&staging, body).map_err(|e| {
            SpendwiseChatError::Io(format!("failed to write {}: {e}", staging.display()))
        })?;
        fs::rename(&staging, &self.path).map_err(|e| {
            SpendwiseChatError::Io(format!(
                "failed to move {} into place: {e}",
                staging.display()
            ))
        })?;
        info!(path = %self.path.display(), messages = history.len(), "saved transcript");
        Ok(())
    }

    /// Replaces whatever is on disk, readable or not, with an empty transcript.
    pub fn clear(&self) -> Result<()> {
        self.save(&ChatHistory::new())
    }

    pub fn append(&self, message: ChatMessage) -> Result<ChatHistory> {
        let mut history = self.load()?;
        history.push(message);
        self.save(&history)?;
        Ok(history)
    }

    /// Sibling file the next save is written to before it replaces the transcript.
    pub fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "transcript".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
