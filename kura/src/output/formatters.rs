//! Output formatter implementations.

use crate::database::ReservationRecord;
use crate::{Error, Result, Space};

use super::OutputFormatter;

/// Formatter for human-readable table output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_reservations(&self, records: &[ReservationRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok("No reservations found.".to_string());
        }

        let mut lines = vec![format!(
            "{:<6} {:<20} {:<24} {:<23} {:>10} {:<10} {:<8}",
            "ID", "USER", "SPACE", "DATES", "TOTAL", "STATUS", "PAYMENT"
        )];

        for record in records {
            let r = &record.reservation;
            let id = r
                .id()
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            lines.push(format!(
                "{:<6} {:<20} {:<24} {:<23} {:>10} {:<10} {:<8}",
                id,
                truncate(&record.username, 20),
                truncate(&record.space_title, 24),
                r.range().to_string(),
                r.total_price(),
                r.status(),
                r.payment_status(),
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format_spaces(&self, spaces: &[Space]) -> Result<String> {
        if spaces.is_empty() {
            return Ok("No spaces found.".to_string());
        }

        let mut lines = vec![format!(
            "{:<6} {:<24} {:<16} {:>8} {:>10} {:<23}",
            "ID", "TITLE", "OWNER", "SQM", "PRICE/DAY", "AVAILABLE"
        )];

        for space in spaces {
            let id = space
                .id()
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            let window = space.available_until().map_or_else(
                || format!("{}..", space.available_from()),
                |until| format!("{}..{until}", space.available_from()),
            );
            lines.push(format!(
                "{:<6} {:<24} {:<16} {:>8.1} {:>10} {:<23}",
                id,
                truncate(space.title(), 24),
                truncate(space.owner(), 16),
                space.size_sqm(),
                space.price_per_day(),
                window,
            ));
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_reservations(&self, records: &[ReservationRecord]) -> Result<String> {
        serde_json::to_string_pretty(records).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }

    fn format_spaces(&self, spaces: &[Space]) -> Result<String> {
        serde_json::to_string_pretty(spaces).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Truncates a string for fixed-width table columns.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
