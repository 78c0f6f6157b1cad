//! Add-space command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, GlobalOptions};
use clap::Args;
use kura::Space;

/// Register a new rental space.
#[derive(Args)]
pub struct AddSpaceCommand {
    /// Owner of the space
    #[arg(long, value_name = "OWNER")]
    pub owner: String,

    /// Listing title
    #[arg(long, value_name = "TITLE")]
    pub title: String,

    /// Longer description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Street address
    #[arg(long, value_name = "ADDRESS")]
    pub address: String,

    /// Floor area in square metres
    #[arg(long, value_name = "SQM")]
    pub size_sqm: f64,

    /// Price per day in the smallest currency unit
    #[arg(long, value_name = "PRICE")]
    pub price_per_day: i64,

    /// First advertised available date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub available_from: String,

    /// Last advertised available date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub available_until: Option<String>,
}

impl AddSpaceCommand {
    /// Execute the add-space command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut builder = Space::builder()
            .owner(&self.owner)
            .title(&self.title)
            .address(&self.address)
            .size_sqm(self.size_sqm)
            .price_per_day(self.price_per_day)
            .available_from(parse_date(&self.available_from, "available-from")?);

        if let Some(ref description) = self.description {
            builder = builder.description(description);
        }
        if let Some(ref until) = self.available_until {
            builder = builder.available_until(parse_date(until, "available-until")?);
        }

        let space = builder
            .build()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = db.insert_space(&space).map_err(CliError::from)?;

        // Just the id on stdout (shell-friendly)
        println!("{id}");

        if !global.quiet {
            eprintln!("Registered space '{}' with id {id}", self.title);
        }

        Ok(())
    }
}
