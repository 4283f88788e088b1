//! TodoList - a small persisted to-do list
//!
//! Keeps an ordered list of tasks, each a text plus a completion flag, in a
//! single JSON file. The list is loaded whole, mutated by add/delete/toggle,
//! and written whole after every mutation.
//!
//! # On-disk layout
//!
//! ```text
//! {"Tasks":["Buy milk","Ship it"],"TaskStates":[false,true]}
//! ```
//!
//! # Example
//!
//! ```ignore
//! use todolist::TodoStore;
//!
//! let store = TodoStore::open("todolist.json");
//! let mut list = store.load()?;
//! store.add_task(&mut list, "Buy milk");
//! store.toggle_task(&mut list, 0)?;
//! ```

pub mod cli;
pub mod config;
mod error;
mod item;
mod persist;
mod store;

pub use error::StoreError;
pub use item::{TodoItem, TodoList, TodoListData};
pub use persist::{JsonFile, Persistence, SaveStatus};
pub use store::TodoStore;

/// File name of the persisted list inside the data directory
pub const DEFAULT_FILE_NAME: &str = "todolist.json";

/// Directory name used under the platform data/config directories
pub const APP_DIR_NAME: &str = "todolist";
