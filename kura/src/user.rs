//! User account records.
//!
//! Users are the renters in the marketplace. Only the fields the booking
//! engine needs are modeled here; authentication is out of scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A unique identifier for a user.
///
/// # Examples
///
/// ```
/// use kura::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(format!("{id}"), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    /// Creates a user id from its database row id.
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

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user account.
///
/// # Examples
///
/// ```
/// use kura::User;
///
/// let user = User::new("yamada_taro", "yamada@example.com").unwrap();
/// assert_eq!(user.username(), "yamada_taro");
/// assert!(user.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Option<UserId>,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record that has not been persisted yet.
    ///
    /// Username and email are trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty after trimming, or the
    /// email is empty or contains no `@`.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(ValidationError {
                field: "username".into(),
                message: "username must be non-empty after trimming whitespace".into(),
            });
        }

        let email = email.into().trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError {
                field: "email".into(),
                message: format!("'{email}' is not a plausible email address"),
            });
        }

        Ok(Self {
            id: None,
            username,
            email,
            created_at: Utc::now(),
        })
    }

    /// Reconstructs a user from persisted fields.
    #[must_use]
    pub fn from_row(
        id: UserId,
        username: String,
        email: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            username,
            email,
            created_at,
        }
    }

    /// Returns the row id, if this record has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
