//! Core TodoStore implementation

use std::path::Path;
use tracing::debug;

use crate::error::StoreError;
use crate::item::{TodoItem, TodoList};
use crate::persist::{JsonFile, Persistence, SaveStatus};

/// Applies list operations and writes the whole list after each mutation.
///
/// The store never owns the list: callers hold the `TodoList` and pass it in.
#[derive(Debug, Clone)]
pub struct TodoStore<P = JsonFile> {
    backend: P,
}

impl TodoStore<JsonFile> {
    /// Open a store backed by the JSON file at `path`
    pub fn open(path: impl AsRef<Path>) -> Self {
        let backend = JsonFile::new(path);
        debug!(path = %backend.path().display(), "Opened todo store");
        Self { backend }
    }
}

impl<P: Persistence> TodoStore<P> {
    /// Build a store over any persistence backend
    pub fn with_backend(backend: P) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Load the persisted list; a missing store is an empty list
    pub fn load(&self) -> Result<TodoList, StoreError> {
        self.backend.load()
    }

    /// Write the whole list
    pub fn save(&self, list: &TodoList) -> SaveStatus {
        self.backend.save(list)
    }

    /// Append a new task and persist.
    ///
    /// Blank text is ignored: returns `None` and nothing is written.
    pub fn add_task(&self, list: &mut TodoList, text: &str) -> Option<usize> {
        if text.trim().is_empty() {
            debug!("add_task: blank text, ignoring");
            return None;
        }

        let index = list.push(TodoItem::new(text));
        debug!(index, "add_task: appended");
        self.save(list);
        Some(index)
    }

    /// Flip the completion flag at `index` and persist. Returns the new flag.
    pub fn toggle_task(&self, list: &mut TodoList, index: usize) -> Result<bool, StoreError> {
        let current = item_at(list, index)?.done;
        self.set_done(list, index, !current)?;
        Ok(!current)
    }

    /// Set the completion flag at `index`; persists only when it changes.
    /// Returns whether the flag changed.
    pub fn set_done(&self, list: &mut TodoList, index: usize, done: bool) -> Result<bool, StoreError> {
        let len = list.len();
        let item = list.get_mut(index).ok_or(StoreError::IndexOutOfRange { index, len })?;

        if item.done == done {
            debug!(index, done, "set_done: unchanged");
            return Ok(false);
        }

        item.done = done;
        debug!(index, done, "set_done: changed");
        self.save(list);
        Ok(true)
    }

    /// Remove the task at `index`, shifting later tasks down, and persist
    pub fn delete_task(&self, list: &mut TodoList, index: usize) -> Result<TodoItem, StoreError> {
        item_at(list, index)?;
        let removed = list.remove(index);
        debug!(index, text = %removed.text, "delete_task: removed");
        self.save(list);
        Ok(removed)
    }
}

fn item_at(list: &TodoList, index: usize) -> Result<&TodoItem, StoreError> {
    list.get(index).ok_or(StoreError::IndexOutOfRange { index, len: list.len() })
}
