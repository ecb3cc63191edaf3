//! CLI module - Command-line interface for Cinelog
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Cinelog - a personal movie journal
/// Serves the GraphQL API and talks to it from the terminal
#[derive(Parser)]
#[command(name = "cinelog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the GraphQL server until Ctrl+C
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Manage user accounts directly in the database
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Read and edit journal entries through a running server
    #[command(alias = "e")]
    Entries {
        /// Token for the `authorization` header
        #[arg(long, env = "CINELOG_TOKEN", global = true)]
        token: Option<String>,

        /// GraphQL endpoint, defaults to `client.endpoint` from the config
        #[arg(long, global = true)]
        endpoint: Option<String>,

        #[command(subcommand)]
        command: EntriesCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user and print its token
    Create {
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Print a user's token
    Token {
        username: String,
        /// Replace the token with a new random one
        #[arg(long)]
        regenerate: bool,
    },
}

#[derive(Subcommand)]
pub enum EntriesCommands {
    /// List your entries
    #[command(alias = "ls")]
    List,
    /// Show one entry
    Show {
        id: String,
    },
    /// Record a new entry
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Rating 0-4 (😀 😐 😭 😠 🤬)
        #[arg(long, default_value = "0")]
        stars: i32,
    },
    /// Change an entry; omitted fields keep their value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        stars: Option<i32>,
    },
    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        id: String,
    },
    /// Find entries of any user by exact title, ignoring case
    #[command(alias = "s")]
    Search {
        title: String,
    },
}

pub use commands::*;
