//! Book command implementation.
//!
//! This module implements the `book` command, which books a space for a
//! user over an inclusive date range using the plan/execute pipeline.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, resolve_user, GlobalOptions};
use clap::Args;
use kura::booking::{BookingPlan, BookingRequest, PlanExecutor};
use kura::{DateRange, SpaceId};

/// Book a space over an inclusive date range.
#[derive(Args)]
pub struct BookCommand {
    /// Space id to book
    #[arg(long, value_name = "ID")]
    pub space: i64,

    /// Booking user (id or username)
    #[arg(long, value_name = "USER")]
    pub user: String,

    /// First day of the booking (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Last day of the booking (YYYY-MM-DD), inclusive
    #[arg(long, value_name = "DATE")]
    pub end: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse the requested range
        let start = parse_date(&self.start, "start")?;
        let end = parse_date(&self.end, "end")?;
        let range = DateRange::new(start, end).map_err(CliError::from)?;

        // 2. Load configuration and open the database
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        // 3. Resolve the booking user
        let user = resolve_user(&db, &self.user)?;

        // 4. Build the plan
        let request = BookingRequest::new(SpaceId::new(self.space), user, range);
        let plan = BookingPlan::new(request, &config)
            .build_plan(&db)
            .map_err(CliError::from)?;

        // 5. Execute or dry-run
        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run - would perform the following actions:");
                for (i, action) in plan.actions.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, action.description());
                }
                if !plan.warnings.is_empty() {
                    eprintln!("Warnings:");
                    for warning in &plan.warnings {
                        eprintln!("  - {warning}");
                    }
                }
            }
            return Ok(());
        }

        let result = PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        // 6. Output just the reservation id (shell-friendly) to stdout
        if let Some(id) = result.reservation_id {
            println!("{id}");
        }

        // 7. Price and warnings to stderr
        if !global.quiet {
            if let Some(total) = result.total_price {
                eprintln!("Total price: {total} ({} days)", range.days_inclusive());
            }
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }
}
