//! Add-user command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use kura::User;

/// Register a new user.
#[derive(Args)]
pub struct AddUserCommand {
    /// Username (unique)
    #[arg(long, value_name = "NAME")]
    pub username: String,

    /// Email address
    #[arg(long, value_name = "EMAIL")]
    pub email: String,
}

impl AddUserCommand {
    /// Execute the add-user command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let user = User::new(&self.username, &self.email)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = db.insert_user(&user).map_err(CliError::from)?;

        // Just the id on stdout (shell-friendly)
        println!("{id}");

        if !global.quiet {
            eprintln!("Registered user '{}' with id {id}", self.username);
        }

        Ok(())
    }
}
