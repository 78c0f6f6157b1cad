//! Output formatting module for reservation listings.
//!
//! This module provides the output formats for displaying reservations
//! and space listings, in human-readable table form or JSON.

mod formatters;

use serde::{Deserialize, Serialize};

use crate::database::ReservationRecord;
use crate::{Result, Space};

pub use formatters::{HumanFormatter, JsonFormatter};

/// Trait for formatting listings into different output formats.
pub trait OutputFormatter {
    /// Formats a list of reservations into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_reservations(&self, records: &[ReservationRecord]) -> Result<String>;

    /// Formats a list of space listings into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_spaces(&self, spaces: &[Space]) -> Result<String>;
}

/// Available output formats for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    Human,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Creates a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(format!("invalid output format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(format!("{}", OutputFormat::Human), "human");
        assert_eq!(format!("{}", OutputFormat::Json), "json");
    }
}
