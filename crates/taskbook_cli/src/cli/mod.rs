use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taskbook", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Colour theme for list output (overrides the config file)
    #[arg(long, global = true, value_name = "THEME")]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: taskbook add "Buy milk"
    Add {
        text: Option<String>,
    },
    /// List all tasks with their completion status
    ///
    /// Example: taskbook list
    List,
    /// Mark a task as completed
    ///
    /// Example: taskbook done 1
    Done {
        id: u64,
    },
    /// Flip a task between pending and completed
    ///
    /// Example: taskbook toggle 1
    Toggle {
        id: u64,
    },
    /// Delete a task
    ///
    /// Example: taskbook delete 1
    Delete {
        id: u64,
    },
    /// Remove every completed task
    ///
    /// Example: taskbook clear-completed
    ClearCompleted,
}
