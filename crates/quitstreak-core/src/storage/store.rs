//! JSON blob persistence for the habit registry.
//!
//! The registry serializes to a single file under a fixed name. The host
//! loads it once at startup and writes the whole thing back after every
//! mutating call; the engine itself never touches the disk. A missing
//! file reads as an empty registry, and malformed fields are normalized
//! to safe defaults at deserialization rather than raised as errors.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::HabitRegistry;

use super::data_dir;

const STORE_FILE: &str = "habits.json";

/// Handle to the registry blob on disk.
#[derive(Debug, Clone)]
pub struct HabitStore {
    path: PathBuf,
}

impl HabitStore {
    /// Open the store at the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join(STORE_FILE),
        })
    }

    /// Open the store at an explicit path (tests, alternate hosts).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry. A missing blob is an empty registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob exists but cannot be read or parsed.
    pub fn load(&self) -> Result<HabitRegistry> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HabitRegistry::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the full registry, replacing the previous blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be serialized or written.
    pub fn save(&self, registry: &HabitRegistry) -> Result<()> {
        let content = serde_json::to_string_pretty(registry)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
