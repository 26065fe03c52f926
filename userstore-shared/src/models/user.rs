//! User record and its input shapes
//!
//! A `User` is the only entity the store keeps. Identifiers and timestamps are
//! stamped by the store; callers only ever supply a `NewUser` (for create) or
//! a `UserChanges` (for update).
//!
//! # Example
//!
//! ```
//! use userstore_shared::models::user::NewUser;
//! use userstore_shared::store::{InMemoryUserStore, UserStore};
//!
//! let store = InMemoryUserStore::new();
//! let user = store.create(NewUser::new("alice", "alice@example.com"));
//!
//! assert_eq!(user.id, 1);
//! assert_eq!(user.created_at, user.updated_at);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored user record
///
/// Values of this type handed out by the store are owned copies; mutating one
/// has no effect on the store's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, starting at 1 and never reused
    pub id: u64,

    /// Display name (3-20 characters, checked by the transport)
    pub username: String,

    /// Email address (shape checked by the transport)
    pub email: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    ///
    /// Equal to `created_at` until the first successful update.
    pub updated_at: DateTime<Utc>,
}

/// Candidate record for creation
///
/// Carries no identifier or timestamps: those belong to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Replacement values for an update
///
/// Both fields are always overwritten; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    pub username: String,
    pub email: String,
}

impl UserChanges {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

impl From<NewUser> for UserChanges {
    fn from(new: NewUser) -> Self {
        Self {
            username: new.username,
            email: new.email,
        }
    }
}
