use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use todolist::cli::{Cli, Command};
use todolist::config::Config;
use todolist::{TodoList, TodoStore};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN (stdout is for the list itself)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!(e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn render(list: &TodoList) {
    if list.is_empty() {
        println!("No tasks");
        return;
    }

    for (index, item) in list.iter().enumerate() {
        if item.done {
            println!("{} {:>2}  {}", "[x]".green(), index, item.text.dimmed());
        } else {
            println!("{} {:>2}  {}", "[ ]".yellow(), index, item.text);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let store_path = cli.store.clone().unwrap_or(config.store_path);

    let store = TodoStore::open(&store_path);
    info!(store = %store.location(), "todolist starting");

    let command = cli.command.unwrap_or(Command::List);
    debug!(?command, "main: dispatching command");

    if command == Command::Path {
        println!("{}", store.location());
        return Ok(());
    }

    let mut list = store
        .load()
        .context(format!("Failed to load tasks from {}", store.location()))?;

    match command {
        Command::List | Command::Path => {}
        Command::Add { text } => {
            let text = text.join(" ");
            match store.add_task(&mut list, &text) {
                Some(index) => println!("{} Added task {}: {}", "✓".green(), index, text.cyan()),
                None => println!("{} Nothing to add: task text is blank", "!".yellow()),
            }
        }
        Command::Toggle { index } => {
            let done = store.toggle_task(&mut list, index)?;
            let state = if done { "done" } else { "not done" };
            println!("{} Task {} marked {}", "✓".green(), index, state);
        }
        Command::Done { index } => {
            if store.set_done(&mut list, index, true)? {
                println!("{} Task {} marked done", "✓".green(), index);
            } else {
                println!("Task {} already done", index);
            }
        }
        Command::Undone { index } => {
            if store.set_done(&mut list, index, false)? {
                println!("{} Task {} marked not done", "✓".green(), index);
            } else {
                println!("Task {} already not done", index);
            }
        }
        Command::Delete { index } => {
            let removed = store.delete_task(&mut list, index)?;
            println!("{} Deleted task {}: {}", "✓".green(), index, removed.text);
        }
    }

    render(&list);
    Ok(())
}
