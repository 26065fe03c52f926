//! In-memory user store
//!
//! The whole index (id → record map plus the next-id counter) sits behind one
//! `parking_lot::RwLock`:
//!
//! - `create`, `update`, `delete` take the write lock
//! - `get_by_id`, `list_all`, `count` take the read lock
//!
//! The counter lives inside the locked state, so identifier assignment and
//! insertion happen as one step and two concurrent creates can never observe
//! the same counter value. Nothing under the lock performs I/O.
//!
//! All data is lost when the store is dropped.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use tracing::{debug, trace};

use super::{StoreError, StoreResult, UserStore};
use crate::models::user::{NewUser, User, UserChanges};

/// First identifier handed out by a fresh store
const FIRST_ID: u64 = 1;

#[derive(Debug)]
struct Index {
    users: HashMap<u64, User>,
    next_id: u64,
}

/// Process-lifetime user store
#[derive(Debug)]
pub struct InMemoryUserStore {
    index: RwLock<Index>,
}

impl InMemoryUserStore {
    /// Creates an empty store whose first record will get id 1
    pub fn new() -> Self {
        Self {
            index: RwLock::new(Index {
                users: HashMap::new(),
                next_id: FIRST_ID,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time, nudged forward so it is strictly after `previous`
///
/// Keeps `updated_at` moving forward even when two writes land within the
/// clock's resolution or the wall clock steps backwards.
fn stamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}

impl UserStore for InMemoryUserStore {
    fn create(&self, new_user: NewUser) -> User {
        let mut index = self.index.write();

        let id = index.next_id;
        index.next_id += 1;

        let now = Utc::now();
        let user = User {
            id,
            username: new_user.username,
            email: new_user.email,
            created_at: now,
            updated_at: now,
        };
        index.users.insert(id, user.clone());

        debug!(user_id = id, "user created");
        user
    }

    fn get_by_id(&self, id: u64) -> StoreResult<User> {
        let index = self.index.read();
        index
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list_all(&self) -> Vec<User> {
        let index = self.index.read();
        let users: Vec<User> = index.users.values().cloned().collect();
        trace!(count = users.len(), "listed users");
        users
    }

    fn update(&self, id: u64, changes: UserChanges) -> StoreResult<User> {
        let mut index = self.index.write();
        let existing = index.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        existing.username = changes.username;
        existing.email = changes.email;
        existing.updated_at = stamp_after(existing.updated_at);

        debug!(user_id = id, "user updated");
        Ok(existing.clone())
    }

    fn delete(&self, id: u64) -> StoreResult<()> {
        let mut index = self.index.write();
        index.users.remove(&id).ok_or(StoreError::NotFound(id))?;

        debug!(user_id = id, "user deleted");
        Ok(())
    }

    fn count(&self) -> usize {
        self.index.read().users.len()
    }
}
