//! User CRUD operations.
//!
//! # Responsibilities
//! - Validate creation payloads (presence only)
//! - Assign ids as current max + 1
//! - Apply partial updates field by field
//! - Report missing records as `UserError::NotFound`
//!
//! # Design Decisions
//! - The store lives behind a `std::sync::Mutex`; each operation takes the
//!   lock once and never holds it across an await
//! - A poisoned lock is recovered, records are plain values

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::observability::metrics;
use crate::users::error::{UserError, UserResult};
use crate::users::model::{present, CreateUser, UpdateUser, User, UserId};
use crate::users::store::UserStore;

/// Handler for the user collection.
#[derive(Debug)]
pub struct UserService {
    store: Mutex<UserStore>,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        metrics::record_user_count(store.len());
        Self {
            store: Mutex::new(store),
        }
    }

    fn store(&self) -> MutexGuard<'_, UserStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.store().all().to_vec()
    }

    pub fn get(&self, id: UserId) -> UserResult<User> {
        self.store().get(id).cloned().ok_or(UserError::NotFound(id))
    }

    /// Validate and append a new record.
    pub fn create(&self, payload: CreateUser) -> UserResult<User> {
        let (name, email) = match (present(&payload.name), present(&payload.email)) {
            (Some(name), Some(email)) => (name.to_owned(), email.to_owned()),
            _ => return Err(UserError::InvalidInput),
        };

        let mut store = self.store();
        let user = User::new(store.next_id(), name, email);
        store.push(user.clone());
        metrics::record_user_count(store.len());

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Overwrite each supplied, non-empty field. Supplying neither is a no-op
    /// that still returns the record.
    pub fn update(&self, id: UserId, patch: UpdateUser) -> UserResult<User> {
        let mut store = self.store();
        let user = store.get_mut(id).ok_or(UserError::NotFound(id))?;

        if let Some(name) = patch.name() {
            user.name = name.to_owned();
        }
        if let Some(email) = patch.email() {
            user.email = email.to_owned();
        }

        tracing::info!(user_id = id, "User updated");
        Ok(user.clone())
    }

    pub fn delete(&self, id: UserId) -> UserResult<()> {
        let mut store = self.store();
        let index = store.position(id).ok_or(UserError::NotFound(id))?;
        store.remove(index);
        metrics::record_user_count(store.len());

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new(UserStore::seeded())
    }
}
