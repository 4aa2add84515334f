//! CLI module - command-line interface for Watchlist
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Watchlist - single-user movie watchlist server
#[derive(Parser)]
#[command(name = "watchlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default when no subcommand is given)
    Serve,

    /// Initialize the database
    Initdb {
        /// Create after drop
        #[arg(long)]
        drop: bool,
    },

    /// Generate fixture data
    Forge,

    /// Create or update the single admin account
    Admin {
        /// The username used to login
        #[arg(long)]
        username: String,

        /// The password used to login
        #[arg(long)]
        password: String,
    },
}

pub use commands::*;
