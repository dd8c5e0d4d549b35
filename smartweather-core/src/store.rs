use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{collections::HashMap, fs, path::PathBuf};
use tracing::warn;

/// Key holding the last successfully viewed city name (plain string).
pub const LAST_CITY_KEY: &str = "last_city";

/// Key holding the recency list (JSON-serialized ordered list of strings).
pub const RECENT_CITIES_KEY: &str = "recent_cities";

/// Minimal string key-value persistence, the dashboard's only external state.
///
/// Writes are simple overwrites: a failed write is logged and leaves the
/// previously persisted state stale, it never propagates to the caller.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: one JSON object of string entries under the platform
/// data directory, rewritten wholesale on each `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at its default platform location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Self::state_file_path()?))
    }

    /// Open a store at an explicit path. An absent or malformed file is
    /// treated as empty prior state, never an error.
    pub fn open(path: PathBuf) -> Self {
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<HashMap<String, String>>(&raw).ok())
            .unwrap_or_default();

        Self { path, entries }
    }

    /// Path to the persisted state file.
    pub fn state_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "smartweather", "smartweather")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join("state.json"))
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize persisted state")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write state file: {}", self.path.display()))?;

        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());

        if let Err(err) = self.flush() {
            warn!("failed to persist state for key '{key}', prior state left stale: {err:#}");
        }
    }
}
