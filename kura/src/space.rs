//! Rental space listings.
//!
//! A space is a storage area offered for rent at a fixed daily price.
//! Listings carry an advertised availability window, which is shown to
//! renters but not enforced by the booking engine; only overlapping
//! reservations block a booking.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A unique identifier for a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(i64);

impl SpaceId {
    /// Creates a space id from its database row id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying row id.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rental space listing.
///
/// Construct with [`Space::builder`].
///
/// # Examples
///
/// ```
/// use kura::Space;
///
/// let space = Space::builder()
///     .owner("storage-co")
///     .title("Dry basement, 8 sqm")
///     .address("2-4-1 Marunouchi, Chiyoda")
///     .size_sqm(8.0)
///     .price_per_day(1500)
///     .available_from("2025-01-01".parse().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(space.price_per_day(), 1500);
/// assert!(space.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    id: Option<SpaceId>,
    owner: String,
    title: String,
    description: Option<String>,
    address: String,
    size_sqm: f64,
    price_per_day: i64,
    available_from: NaiveDate,
    available_until: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl Space {
    /// Returns a builder for constructing a space listing.
    #[must_use]
    pub fn builder() -> SpaceBuilder {
        SpaceBuilder::default()
    }

    /// Reconstructs a space from persisted fields.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_row(
        id: SpaceId,
        owner: String,
        title: String,
        description: Option<String>,
        address: String,
        size_sqm: f64,
        price_per_day: i64,
        available_from: NaiveDate,
        available_until: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            owner,
            title,
            description,
            address,
            size_sqm,
            price_per_day,
            available_from,
            available_until,
            created_at,
        }
    }

    /// Returns the row id, if this record has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<SpaceId> {
        self.id
    }

    /// Returns the owner's display name.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-form description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the floor area in square meters.
    #[must_use]
    pub const fn size_sqm(&self) -> f64 {
        self.size_sqm
    }

    /// Returns the daily price in the marketplace's minor currency unit.
    #[must_use]
    pub const fn price_per_day(&self) -> i64 {
        self.price_per_day
    }

    /// Returns the advertised first available day.
    #[must_use]
    pub const fn available_from(&self) -> NaiveDate {
        self.available_from
    }

    /// Returns the advertised last available day, if bounded.
    #[must_use]
    pub const fn available_until(&self) -> Option<NaiveDate> {
        self.available_until
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builder for [`Space`].
#[derive(Debug, Default, Clone)]
pub struct SpaceBuilder {
    owner: Option<String>,
    title: Option<String>,
    description: Option<String>,
    address: Option<String>,
    size_sqm: Option<f64>,
    price_per_day: Option<i64>,
    available_from: Option<NaiveDate>,
    available_until: Option<NaiveDate>,
}

impl SpaceBuilder {
    /// Sets the owner's display name (required).
    #[must_use]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the listing title (required).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the street address (required).
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the floor area in square meters (required).
    #[must_use]
    pub fn size_sqm(mut self, size_sqm: f64) -> Self {
        self.size_sqm = Some(size_sqm);
        self
    }

    /// Sets the daily price (required).
    #[must_use]
    pub fn price_per_day(mut self, price_per_day: i64) -> Self {
        self.price_per_day = Some(price_per_day);
        self
    }

    /// Sets the advertised first available day (required).
    #[must_use]
    pub fn available_from(mut self, date: NaiveDate) -> Self {
        self.available_from = Some(date);
        self
    }

    /// Sets the advertised last available day.
    #[must_use]
    pub fn available_until(mut self, date: NaiveDate) -> Self {
        self.available_until = Some(date);
        self
    }

    /// Validates the accumulated fields and builds the space.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or empty, the
    /// size or price is not positive, or the availability window is
    /// inverted.
    pub fn build(self) -> Result<Space, ValidationError> {
        let require = |field: &str, value: Option<String>| -> Result<String, ValidationError> {
            match value.map(|v| v.trim().to_string()) {
                Some(v) if !v.is_empty() => Ok(v),
                _ => Err(ValidationError {
                    field: field.to_string(),
                    message: format!("{field} must be provided and non-empty"),
                }),
            }
        };

        let owner = require("owner", self.owner)?;
        let title = require("title", self.title)?;
        let address = require("address", self.address)?;

        let size_sqm = self.size_sqm.ok_or_else(|| ValidationError {
            field: "size_sqm".to_string(),
            message: "size_sqm must be provided".to_string(),
        })?;
        if !size_sqm.is_finite() || size_sqm <= 0.0 {
            return Err(ValidationError {
                field: "size_sqm".to_string(),
                message: format!("size must be a positive number, got {size_sqm}"),
            });
        }

        let price_per_day = self.price_per_day.ok_or_else(|| ValidationError {
            field: "price_per_day".to_string(),
            message: "price_per_day must be provided".to_string(),
        })?;
        if price_per_day <= 0 {
            return Err(ValidationError {
                field: "price_per_day".to_string(),
                message: format!("price must be positive, got {price_per_day}"),
            });
        }

        let available_from = self.available_from.ok_or_else(|| ValidationError {
            field: "available_from".to_string(),
            message: "available_from must be provided".to_string(),
        })?;
        if let Some(until) = self.available_until {
            if until < available_from {
                return Err(ValidationError {
                    field: "available_until".to_string(),
                    message: format!(
                        "availability window is inverted: {available_from}..{until}"
                    ),
                });
            }
        }

        Ok(Space {
            id: None,
            owner,
            title,
            description: self.description.map(|d| d.trim().to_string()),
            address,
            size_sqm,
            price_per_day,
            available_from,
            available_until: self.available_until,
            created_at: Utc::now(),
        })
    }
}
