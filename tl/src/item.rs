//! TodoItem and TodoList domain types
//!
//! In memory a list is one ordered `Vec<TodoItem>`. On disk it is stored as
//! two index-aligned arrays (`TodoListData`), and conversion back is checked
//! so misaligned files are rejected instead of silently truncated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single task: its text and completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub done: bool,
}

impl TodoItem {
    /// Create a new, not yet completed task
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "x" } else { " " };
        write!(f, "[{}] {}", mark, self.text)
    }
}

/// Ordered list of tasks; display order is insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TodoListData", try_from = "TodoListData")]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    pub(crate) fn push(&mut self, item: TodoItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut TodoItem> {
        self.items.get_mut(index)
    }

    pub(crate) fn remove(&mut self, index: usize) -> TodoItem {
        self.items.remove(index)
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// On-disk shape: parallel `Tasks` / `TaskStates` arrays
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListData {
    #[serde(rename = "Tasks", default)]
    pub tasks: Vec<String>,

    #[serde(rename = "TaskStates", default)]
    pub task_states: Vec<bool>,
}

impl From<TodoList> for TodoListData {
    fn from(list: TodoList) -> Self {
        let (tasks, task_states) = list.items.into_iter().map(|item| (item.text, item.done)).unzip();
        Self { tasks, task_states }
    }
}

impl TryFrom<TodoListData> for TodoList {
    type Error = String;

    fn try_from(data: TodoListData) -> Result<Self, Self::Error> {
        if data.tasks.len() != data.task_states.len() {
            return Err(format!(
                "Tasks has {} entries but TaskStates has {}",
                data.tasks.len(),
                data.task_states.len()
            ));
        }

        Ok(data
            .tasks
            .into_iter()
            .zip(data.task_states)
            .map(|(text, done)| TodoItem { text, done })
            .collect())
    }
}
