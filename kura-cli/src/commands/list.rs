//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_user, GlobalOptions};
use clap::{Args, ValueEnum};
use kura::{Database, ReservationFilter, ReservationRecord, SpaceId};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 9] = [
    "id",
    "space",
    "user",
    "start_date",
    "end_date",
    "days",
    "total_price",
    "status",
    "payment_status",
];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "KURA_LIST_FORMAT",
        ignore_case = true
    )]
    pub format: ListFormat,

    /// Filter by booking user (id or username)
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Filter by space id
    #[arg(long, value_name = "ID")]
    pub space: Option<i64>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open database (read-only access is fine)
        let db = open_database(global, &config)?;

        // 3. Build the filter
        let mut filter = ReservationFilter::default();
        if let Some(ref user) = self.user {
            filter = filter.for_user(resolve_user(&db, user)?);
        }
        if let Some(space) = self.space {
            filter = filter.for_space(SpaceId::new(space));
        }

        // 4. Query reservations
        let records =
            Database::list_reservations(db.connection(), &filter).map_err(CliError::from)?;

        // 5. Format and output to stdout
        match self.format {
            ListFormat::Table => format_as_table(&records)?,
            ListFormat::Json => format_as_json(&records)?,
            ListFormat::Csv => format_as_delimited(&records, b',')?,
            ListFormat::Tsv => format_as_delimited(&records, b'\t')?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(records: &[ReservationRecord]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    // Print each reservation
    for record in records {
        let r = &record.reservation;
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.id().map_or_else(|| "-".to_string(), |id| id.to_string()),
            record.space_title,
            record.username,
            r.range().start(),
            r.range().end(),
            r.range().days_inclusive(),
            r.total_price(),
            r.status(),
            r.payment_status(),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(records: &[ReservationRecord]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, records)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(records: &[ReservationRecord], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    // Write header
    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    // Write each reservation
    for record in records {
        let r = &record.reservation;
        writer
            .write_record(&[
                r.id().map_or_else(String::new, |id| id.to_string()),
                record.space_title.clone(),
                record.username.clone(),
                r.range().start().to_string(),
                r.range().end().to_string(),
                r.range().days_inclusive().to_string(),
                r.total_price().to_string(),
                r.status().to_string(),
                r.payment_status().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
