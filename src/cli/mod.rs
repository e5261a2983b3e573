//! CLI 模块

pub mod add;
pub mod list;
pub mod toggle;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tick")]
#[command(version)]
#[command(about = "Terminal task tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task and print its id
    Add {
        /// Task title (blank titles are rejected)
        title: String,
        /// Optional description
        #[arg(default_value = "")]
        description: String,
    },
    /// Print tasks, optionally filtered by completion state
    List {
        /// Filter: all, completed or pending
        #[arg(short, long, default_value = "all")]
        filter: String,
    },
    /// Toggle completion of a task by id
    Toggle {
        /// Task id (as printed by add/list)
        id: u64,
    },
}
