//! Cancel command implementation.
//!
//! Cancelling releases the reservation's dates for rebooking. With
//! `--refund` the payment status is set to refunded in the same update.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use kura::booking::{PlanExecutor, StatusPlan, StatusUpdate};
use kura::ReservationId;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Also mark the payment as refunded
    #[arg(long)]
    pub refund: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let update = StatusUpdate::cancel(ReservationId::new(self.id), self.refund);
        let plan = StatusPlan::new(update).build_plan(&db).map_err(CliError::from)?;
        PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        if !global.quiet {
            if self.refund {
                eprintln!("Cancelled reservation {} (refunded)", self.id);
            } else {
                eprintln!("Cancelled reservation {}", self.id);
            }
        }

        Ok(())
    }
}
