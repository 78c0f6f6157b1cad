//! Spaces command implementation.
//!
//! Lists registered spaces using the library formatters, so the output
//! format follows the `output_format` configuration key unless overridden
//! on the command line.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use kura::output::OutputFormat;
use kura::Database;

/// List registered spaces.
#[derive(Args)]
pub struct SpacesCommand {
    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

impl SpacesCommand {
    /// Execute the spaces command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let format = match self.format {
            Some(ref value) => value
                .parse::<OutputFormat>()
                .map_err(CliError::InvalidArguments)?,
            None => config.effective_output_format(),
        };

        let spaces = Database::list_spaces(db.connection()).map_err(CliError::from)?;
        let formatter = format.create_formatter();
        let rendered = formatter.format_spaces(&spaces).map_err(CliError::from)?;

        println!("{rendered}");

        Ok(())
    }
}
