//! JSON file save store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::traits::SaveStore;
use crate::codec::{self, CombatantRecord};

/// Stores the record as a single JSON document.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// save, so an interrupted write never leaves a half-written document.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Result<Option<CombatantRecord>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record = codec::from_json(&json)?;
        tracing::debug!("Loaded save from {}", self.path.display());

        Ok(Some(record))
    }

    fn save(&self, record: &CombatantRecord) -> Result<()> {
        let json = codec::to_json(record)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved to {}", self.path.display());

        Ok(())
    }
}
