//! Show command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use kura::{Database, ReservationId};

/// Show a single reservation.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let id = ReservationId::new(self.id);
        let reservation = Database::get_reservation(db.connection(), id)
            .map_err(CliError::from)?
            .ok_or_else(|| {
                CliError::Library(kura::Error::NotFound {
                    resource: format!("reservation {id}"),
                })
            })?;

        if self.json {
            let rendered = serde_json::to_string_pretty(&reservation)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            println!("{rendered}");
            return Ok(());
        }

        println!("Reservation {id}");
        println!("  Space:    {}", reservation.space_id());
        println!("  User:     {}", reservation.user_id());
        println!(
            "  Dates:    {} ({} days)",
            reservation.range(),
            reservation.range().days_inclusive()
        );
        println!("  Total:    {}", reservation.total_price());
        println!("  Status:   {}", reservation.status());
        println!("  Payment:  {}", reservation.payment_status());
        println!(
            "  Created:  {}",
            reservation.created_at().format("%Y-%m-%d %H:%M:%S")
        );
        println!(
            "  Updated:  {}",
            reservation.updated_at().format("%Y-%m-%d %H:%M:%S")
        );

        Ok(())
    }
}
