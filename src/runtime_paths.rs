use directories::ProjectDirs;
use std::path::PathBuf;

/// Points every default location at a different root, e.g. a sandbox or a test dir.
pub const HOME_ENV: &str = "SPENDWISE_HOME";

pub fn app_root() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(home);
    }

    ProjectDirs::from("", "", "spendwise")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("spendwise"))
}

pub fn default_transcript_path() -> String {
    app_root()
        .join("data")
        .join("chat_history.json")
        .to_string_lossy()
        .to_string()
}
