//! CLI argument parsing for todolist

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, about = "Small persisted to-do list", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Path to the JSON store (overrides config)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show all tasks (default)
    List,

    /// Add a new task
    Add {
        /// Task text; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Flip a task between done and not done
    Toggle {
        /// Task index as shown by `list`
        index: usize,
    },

    /// Mark a task done
    Done {
        /// Task index as shown by `list`
        index: usize,
    },

    /// Mark a task not done
    Undone {
        /// Task index as shown by `list`
        index: usize,
    },

    /// Delete a task
    Delete {
        /// Task index as shown by `list`
        index: usize,
    },

    /// Print the store location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["tl"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_joins_words() {
        let cli = Cli::try_parse_from(["tl", "add", "Buy", "milk"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Add {
                text: vec!["Buy".to_string(), "milk".to_string()]
            })
        );
    }

    #[test]
    fn test_global_store_after_subcommand() {
        let cli = Cli::try_parse_from(["tl", "toggle", "2", "--store", "x.json"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("x.json")));
        assert_eq!(cli.command, Some(Command::Toggle { index: 2 }));
    }

    #[test]
    fn test_negative_index_rejected() {
        assert!(Cli::try_parse_from(["tl", "delete", "-1"]).is_err());
    }
}
