//! Persistence backends for a todo list

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::StoreError;
use crate::item::TodoList;

/// Outcome of writing the list; saving never raises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed,
}

impl SaveStatus {
    pub fn is_saved(self) -> bool {
        self == Self::Saved
    }
}

/// Where a todo list is read from and written to
pub trait Persistence {
    /// Load the whole list; an absent store yields an empty list
    fn load(&self) -> Result<TodoList, StoreError>;

    /// Write the whole list, logging and reporting failure instead of raising
    fn save(&self, list: &TodoList) -> SaveStatus;

    /// Human-readable location, used in logs and by `tl path`
    fn location(&self) -> String;
}

/// A single JSON file holding the whole list
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, list: &TodoList) -> eyre::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(list)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Persistence for JsonFile {
    fn load(&self) -> Result<TodoList, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "JsonFile::load: no store file, starting empty");
                return Ok(TodoList::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let list: TodoList = serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        debug!(path = %self.path.display(), count = list.len(), "JsonFile::load: loaded tasks");
        Ok(list)
    }

    fn save(&self, list: &TodoList) -> SaveStatus {
        if let Err(e) = self.write(list) {
            error!(path = %self.path.display(), error = %e, "Failed to save file");
            return SaveStatus::Failed;
        }

        if self.path.exists() {
            info!(path = %self.path.display(), count = list.len(), "File saved successfully");
            SaveStatus::Saved
        } else {
            error!(path = %self.path.display(), "Failed to save file: not present after write");
            SaveStatus::Failed
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
