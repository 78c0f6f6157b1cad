//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the kura data directory and database, optionally with demonstration
//! data.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use kura::database::{default_data_dir, Database, DatabaseConfig};
use kura::seed::seed_database;
use std::path::PathBuf;

/// Initialize kura data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Overwrite an existing database
    #[arg(long)]
    overwrite: bool,

    /// Insert demonstration users, spaces, and reservations
    #[arg(long)]
    seed: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Note: This command does NOT honor --disable-autoinit (would be
    /// paradoxical). The --data-dir flag has a different meaning here
    /// (where to create, not where to find).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Determine data directory to initialize
        // Priority: command flag > global flag > default
        let data_dir = self
            .data_dir
            .or_else(|| global.data_dir.clone())
            .or_else(|| default_data_dir().ok())
            .ok_or_else(|| {
                CliError::Config(
                    "Could not determine data directory (home directory not found)".to_string(),
                )
            })?;

        let db_path = data_dir.join("kura.db");

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize kura in: {}", data_dir.display());

            if !data_dir.exists() {
                println!("  - Create data directory: {}", data_dir.display());
            } else {
                println!("  - Data directory already exists: {}", data_dir.display());
            }

            if db_path.exists() {
                if self.overwrite {
                    println!("  - Remove existing database: {}", db_path.display());
                    println!("  - Create new database: {}", db_path.display());
                } else {
                    println!(
                        "  - ERROR: Database already exists (use --overwrite to replace): {}",
                        db_path.display()
                    );
                }
            } else {
                println!("  - Create database: {}", db_path.display());
            }

            if self.seed {
                println!("  - Insert demonstration data");
            }

            return Ok(());
        }

        if db_path.exists() {
            if self.overwrite {
                std::fs::remove_file(&db_path)?;
            } else {
                return Err(CliError::InvalidArguments(format!(
                    "database already exists (use --overwrite to replace): {}",
                    db_path.display()
                )));
            }
        }

        let mut db = Database::open(DatabaseConfig::new(&db_path)).map_err(CliError::from)?;
        println!("Initialized kura in: {}", data_dir.display());
        println!("  - Created database: {}", db_path.display());

        if self.seed {
            let summary = seed_database(&mut db).map_err(CliError::from)?;
            println!(
                "  - Seeded {} users, {} spaces, {} reservations",
                summary.users, summary.spaces, summary.reservations
            );
        }

        Ok(())
    }
}
