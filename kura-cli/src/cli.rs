//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddSpaceCommand, AddUserCommand, BookCommand, CancelCommand, CompletionsCommand, InitCommand,
    ListCommand, SetStatusCommand, ShowCommand, SpacesCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing rental-space reservations.
#[derive(Parser)]
#[command(name = "kura")]
#[command(version, about = "Manage rental-space reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "KURA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "KURA_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "KURA_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the kura data directory and database
    Init(InitCommand),

    /// Register a new user
    AddUser(AddUserCommand),

    /// Register a new rental space
    AddSpace(AddSpaceCommand),

    /// List registered spaces
    Spaces(SpacesCommand),

    /// Book a space over an inclusive date range
    Book(BookCommand),

    /// Update the status of a reservation
    SetStatus(SetStatusCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List reservations
    List(ListCommand),

    /// Show a single reservation
    Show(ShowCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
