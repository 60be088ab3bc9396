use super::backend::StorageBackend;
use super::Snapshot;
use crate::error::{AbookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(AbookError::Io)?;
        }
        Ok(())
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl StorageBackend for FsBackend {
    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(AbookError::Io)?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        Ok(Some(snapshot))
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(snapshot).map_err(AbookError::Serialization)?;

        // Atomic write
        let tmp_file = dir.join(format!(".contacts-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(AbookError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(AbookError::Io)?;

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
