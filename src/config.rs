use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SpendwiseChatError};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HistoryConfig {
    pub max_messages: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    pub history: Option<HistoryConfig>,
    pub transcript_path: Option<String>,
}

impl Config {
    pub fn convention_defaults() -> Self {
        Self {
            history: Some(HistoryConfig { max_messages: None }),
            transcript_path: Some(crate::runtime_paths::default_transcript_path()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            SpendwiseChatError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: Config =
            serde_json::from_str(&raw).map_err(|e| SpendwiseChatError::Config(e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn history_config(&self) -> HistoryConfig {
        self.history.clone().unwrap_or_default()
    }

    pub fn resolved_transcript_path(&self) -> String {
        self.transcript_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .unwrap_or_else(crate::runtime_paths::default_transcript_path)
    }
}
