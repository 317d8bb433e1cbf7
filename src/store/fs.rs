use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::warn;

use crate::error::{Result, SejourError};
use crate::store::FavoritesBackend;

const FAVORITES_FILENAME: &str = "favorites.json";

/// File-backed favorites store: one JSON array of listing ids.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stores under the platform data directory for the app.
    pub fn in_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "sejour", "sejour")
            .ok_or_else(|| SejourError::Store("Could not determine data dir".to_string()))?;
        Ok(Self::new(dirs.data_dir().join(FAVORITES_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesBackend for FileBackend {
    fn load(&self) -> Result<BTreeSet<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(SejourError::Io(e)),
        };

        // A damaged store reads as an empty set.
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable favorites file");
                Ok(BTreeSet::new())
            }
        }
    }

    fn save(&mut self, favorites: &BTreeSet<String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(SejourError::Io)?;
            }
        }
        let ids: Vec<&String> = favorites.iter().collect();
        let content = serde_json::to_string_pretty(&ids).map_err(SejourError::Serialization)?;
        fs::write(&self.path, content).map_err(SejourError::Io)?;
        Ok(())
    }
}
