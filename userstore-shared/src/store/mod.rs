//! User storage layer
//!
//! This module defines the storage contract and its in-memory implementation.
//!
//! # Modules
//!
//! - `memory`: process-lifetime store guarded by a single reader/writer lock
//!
//! # Contract
//!
//! Any `UserStore` implementation must:
//! - assign identifiers monotonically from 1, never reusing one
//! - stamp `created_at`/`updated_at` itself, ignoring caller-supplied values
//! - apply each write atomically (a failed call mutates nothing)
//! - report a missing identifier as [`StoreError::NotFound`]
//!
//! # Example
//!
//! ```
//! use userstore_shared::models::user::{NewUser, UserChanges};
//! use userstore_shared::store::{InMemoryUserStore, StoreError, UserStore};
//!
//! let store = InMemoryUserStore::new();
//! let alice = store.create(NewUser::new("alice", "alice@example.com"));
//!
//! let renamed = store
//!     .update(alice.id, UserChanges::new("alicia", "alicia@example.com"))
//!     .unwrap();
//! assert_eq!(renamed.id, alice.id);
//!
//! store.delete(alice.id).unwrap();
//! assert_eq!(store.get_by_id(alice.id), Err(StoreError::NotFound(alice.id)));
//! ```

pub mod memory;

pub use memory::InMemoryUserStore;

use crate::models::user::{NewUser, User, UserChanges};

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No live record has this identifier
    #[error("user {0} not found")]
    NotFound(u64),
}

/// Storage backend for user records
///
/// Calls are synchronous and must be safe to invoke from many threads at once.
/// Returned records are owned copies.
pub trait UserStore: Send + Sync {
    /// Stores a new record under the next identifier and returns it
    fn create(&self, new_user: NewUser) -> User;

    /// Returns the record for `id`
    fn get_by_id(&self, id: u64) -> StoreResult<User>;

    /// Returns every live record, in no particular order
    fn list_all(&self) -> Vec<User>;

    /// Overwrites username and email of record `id`, refreshing `updated_at`
    fn update(&self, id: u64, changes: UserChanges) -> StoreResult<User>;

    /// Removes record `id` permanently
    fn delete(&self, id: u64) -> StoreResult<()>;

    /// Number of live records
    fn count(&self) -> usize {
        self.list_all().len()
    }
}
