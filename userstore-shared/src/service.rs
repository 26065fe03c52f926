//! User service layer
//!
//! The service sits between the HTTP handlers and the store. Today every call
//! is passed straight through and the store's outcome is returned unchanged.
//! Rules that need more than field-level validation (duplicate email checks,
//! per-caller permissions) belong here, so handlers never talk to a store
//! directly.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use userstore_shared::models::user::NewUser;
//! use userstore_shared::service::{StoreUserService, UserService};
//! use userstore_shared::store::InMemoryUserStore;
//!
//! let service = StoreUserService::new(Arc::new(InMemoryUserStore::new()));
//! let user = service.create_user(NewUser::new("alice", "alice@example.com"));
//!
//! assert_eq!(service.get_user(user.id).unwrap(), user);
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::models::user::{NewUser, User, UserChanges};
use crate::store::{StoreResult, UserStore};

/// Operations exposed to the transport layer
///
/// Mirrors [`UserStore`] one-to-one.
pub trait UserService: Send + Sync {
    fn create_user(&self, new_user: NewUser) -> User;

    fn get_user(&self, id: u64) -> StoreResult<User>;

    fn list_users(&self) -> Vec<User>;

    fn update_user(&self, id: u64, changes: UserChanges) -> StoreResult<User>;

    fn delete_user(&self, id: u64) -> StoreResult<()>;

    /// Number of live users, used by the health endpoint
    fn user_count(&self) -> usize;
}

/// Service backed by any [`UserStore`]
#[derive(Clone)]
pub struct StoreUserService {
    store: Arc<dyn UserStore>,
}

impl StoreUserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

impl UserService for StoreUserService {
    fn create_user(&self, new_user: NewUser) -> User {
        debug!(username = %new_user.username, "create_user");
        self.store.create(new_user)
    }

    fn get_user(&self, id: u64) -> StoreResult<User> {
        self.store.get_by_id(id)
    }

    fn list_users(&self) -> Vec<User> {
        self.store.list_all()
    }

    fn update_user(&self, id: u64, changes: UserChanges) -> StoreResult<User> {
        debug!(user_id = id, "update_user");
        self.store.update(id, changes)
    }

    fn delete_user(&self, id: u64) -> StoreResult<()> {
        debug!(user_id = id, "delete_user");
        self.store.delete(id)
    }

    fn user_count(&self) -> usize {
        self.store.count()
    }
}
