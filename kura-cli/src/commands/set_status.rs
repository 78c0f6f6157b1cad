//! Set-status command implementation.
//!
//! Both status domains can be changed independently; either flag may be
//! given on its own, or both together.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use kura::booking::{PlanExecutor, StatusPlan, StatusUpdate};
use kura::{PaymentStatus, ReservationId, ReservationStatus};

/// Update the status of a reservation.
#[derive(Args)]
pub struct SetStatusCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New lifecycle status (pending, confirmed, cancelled, completed)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,

    /// New payment status (unpaid, paid, refunded)
    #[arg(long, value_name = "STATUS")]
    pub payment_status: Option<String>,
}

impl SetStatusCommand {
    /// Execute the set-status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut update = StatusUpdate::new(ReservationId::new(self.id));

        if let Some(ref status) = self.status {
            let status: ReservationStatus = status
                .parse()
                .map_err(|e: kura::Error| CliError::InvalidArguments(e.to_string()))?;
            update = update.with_status(status);
        }

        if let Some(ref payment) = self.payment_status {
            let payment: PaymentStatus = payment
                .parse()
                .map_err(|e: kura::Error| CliError::InvalidArguments(e.to_string()))?;
            update = update.with_payment_status(payment);
        }

        if update.status.is_none() && update.payment_status.is_none() {
            return Err(CliError::InvalidArguments(
                "provide --status, --payment-status, or both".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = StatusPlan::new(update).build_plan(&db).map_err(CliError::from)?;
        let result = PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        if !global.quiet {
            for action in &result.actions_taken {
                eprintln!("{action}");
            }
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }
}
